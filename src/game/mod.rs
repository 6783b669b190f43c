//! Game controller
//!
//! Round selection and the setup/playing/finished state machine. Everything
//! here is pure state; presentation lives in `interactive` and `commands`.

mod phase;
mod rounds;
pub mod selector;
mod session;

pub use phase::GamePhase;
pub use rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, clamp_rounds, max_rounds};
pub use selector::{PuzzleSource, RandomSource, ScriptedSource, select_puzzle};
pub use session::{GameSession, RoundResult, SessionError};
