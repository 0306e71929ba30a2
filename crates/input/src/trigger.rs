//! Easter-egg triggers: the Konami sequence and the secret corner clicks.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::SECRET_CLICKS;

/// A key as far as sequence matching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqKey {
    Up,
    Down,
    Left,
    Right,
    /// Lowercased character
    Char(char),
    /// Anything else; it only serves to break a sequence
    Other,
}

impl From<KeyCode> for SeqKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => SeqKey::Up,
            KeyCode::Down => SeqKey::Down,
            KeyCode::Left => SeqKey::Left,
            KeyCode::Right => SeqKey::Right,
            KeyCode::Char(c) => SeqKey::Char(c.to_ascii_lowercase()),
            _ => SeqKey::Other,
        }
    }
}

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI: [SeqKey; 10] = [
    SeqKey::Up,
    SeqKey::Up,
    SeqKey::Down,
    SeqKey::Down,
    SeqKey::Left,
    SeqKey::Right,
    SeqKey::Left,
    SeqKey::Right,
    SeqKey::Char('b'),
    SeqKey::Char('a'),
];

/// Sliding window over the last ten keys.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    window: ArrayVec<SeqKey, 10>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true when the window spells the code.
    pub fn push(&mut self, key: impl Into<SeqKey>) -> bool {
        if self.window.is_full() {
            self.window.remove(0);
        }
        self.window.push(key.into());
        self.window.as_slice() == &KONAMI[..]
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Counts clicks in the hidden top-left hot zone.
#[derive(Debug, Clone)]
pub struct SecretClicks {
    zone_w: u16,
    zone_h: u16,
    count: u8,
}

/// Hot zone size in terminal cells (columns x rows).
pub const HOT_ZONE: (u16, u16) = (4, 2);

impl SecretClicks {
    pub fn new() -> Self {
        Self::with_zone(HOT_ZONE.0, HOT_ZONE.1)
    }

    pub fn with_zone(zone_w: u16, zone_h: u16) -> Self {
        Self {
            zone_w,
            zone_h,
            count: 0,
        }
    }

    /// Register a click at (column, row).
    ///
    /// Clicks outside the zone are ignored. Returns true on the fifth zone
    /// click, and starts counting again from zero.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        if column >= self.zone_w || row >= self.zone_h {
            return false;
        }
        self.count += 1;
        if self.count >= SECRET_CLICKS {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

impl Default for SecretClicks {
    fn default() -> Self {
        Self::new()
    }
}
