//! Game rules.
//!
//! - `MoveValidator`: normalizes and checks a raw move token
//! - `RoundEngine`: bot moves, round resolution, state transitions
//!
//! Neither keeps state between calls.

pub mod engine;
pub mod validator;

pub use engine::RoundEngine;
pub use validator::{MoveError, MoveValidator, Validation};
