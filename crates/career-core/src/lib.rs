//! Road to Kantei Simulation Library
//!
//! Public API for the political career simulation: a freshman member of the
//! lower house working toward the Prime Minister's office, one month at a
//! time, with a general election every four years.

pub mod actions;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod random;
pub mod session;
pub mod systems;

pub use actions::{ActionId, ActionSpec};
pub use components::{ChamberState, GameClock, Ledger, PlayerState};
pub use config::CareerConfig;
pub use error::{ActionError, ConfigError};
pub use events::{MessageLog, TraceWriter};
pub use random::{FixedRandom, RandomSource, SequenceRandom, SimRng};
pub use session::{CareerSession, Narration};
