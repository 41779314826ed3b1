//! Game engine
//!
//! The state machine, its injected letter sources, and the session boundary
//! front-ends talk to.

mod error;
mod game;
mod session;
pub mod source;

pub use error::GameError;
pub use game::GameEngine;
pub use session::{GuessOutcome, Session};
pub use source::{LetterSource, LetterSourceType, RandomLetters, ScriptedLetters};
