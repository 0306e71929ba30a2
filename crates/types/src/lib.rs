//! Shared types and constants for the hidden arcade.
//!
//! Everything here is plain data with no dependencies so it can be used by the
//! engine, the input layer and the terminal views alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame step of the host loop (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval after a reset |
//! | `DROP_STEP_MS` | 50 | Interval reduction per line-clear event |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use secret_arcade_types::{GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!(GameStatus::GameOver.label(), "Game Over");
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame step in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval after a reset (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// How much faster gravity gets after every lock that clears rows
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Number of consecutive clicks in the hot zone that open the drawing canvas
pub const SECRET_CLICKS: u8 = 5;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }
}

/// Color of every locked board cell, whatever piece it came from.
pub const LOCKED_COLOR: Rgb = Rgb::hex(0x6366f1);

/// Color of empty board cells.
pub const EMPTY_COLOR: Rgb = Rgb::hex(0x1a1d24);

/// The seven tetromino kinds
///
/// - **O**: yellow 2x2 square
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **I**: cyan 4-long bar
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    S,
    Z,
    I,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order the uniform picker indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use secret_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Display color of the falling piece.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::O => Rgb::hex(0xffd600),
            PieceKind::T => Rgb::hex(0x9c27b0),
            PieceKind::S => Rgb::hex(0x4caf50),
            PieceKind::Z => Rgb::hex(0xf44336),
            PieceKind::I => Rgb::hex(0x00bcd4),
            PieceKind::J => Rgb::hex(0x2196f3),
            PieceKind::L => Rgb::hex(0xff9800),
        }
    }
}

/// Game actions reachable from the keyboard or the overlay controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it on collision
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over with an empty board
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use secret_arcade_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Engine state machine.
///
/// `Playing ⇄ Paused`, `Playing → GameOver`; only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Status line shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Playing => "Playing",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

/// A cell on the game board: occupied or not.
///
/// Locked cells do not remember which piece they came from.
pub type Cell = bool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 50);
        assert_eq!(DROP_INTERVAL_MIN_MS, 100);
        assert_eq!(LINE_CLEAR_POINTS, 100);
    }

    #[test]
    fn hex_colors_unpack() {
        assert_eq!(Rgb::hex(0x6366f1), Rgb::new(0x63, 0x66, 0xf1));
        assert_eq!(PieceKind::I.color(), Rgb::new(0x00, 0xbc, 0xd4));
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(GameStatus::Playing.label(), "Playing");
        assert_eq!(GameStatus::Paused.label(), "Paused");
        assert_eq!(GameStatus::GameOver.label(), "Game Over");
        assert_eq!(GameStatus::default(), GameStatus::Playing);
    }
}
