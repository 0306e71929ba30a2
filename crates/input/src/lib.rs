//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and watches for
//! the two easter-egg triggers: the Konami sequence and five clicks in the
//! top-left hot zone.

pub mod map;
pub mod trigger;

pub use secret_arcade_types as types;

pub use map::{handle_key_event, should_clear_canvas, should_close, should_quit};
pub use trigger::{KonamiDetector, SecretClicks, SeqKey, HOT_ZONE, KONAMI};
