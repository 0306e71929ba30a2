//! Secret Arcade (workspace facade crate).
//!
//! The engine, input and rendering live in dedicated crates under `crates/`;
//! this package re-exports them and adds the screen state machine and the
//! runtime configuration used by the `secret-arcade` binary.

pub mod app;
pub mod config;

pub use secret_arcade_core as core;
pub use secret_arcade_input as input;
pub use secret_arcade_term as term;
pub use secret_arcade_types as types;
