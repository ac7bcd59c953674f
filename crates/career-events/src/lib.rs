//! Shared ledger enums, narration records, and snapshots for the career simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod entry;
pub mod ledger;
pub mod snapshot;
pub mod turn;

pub use entry::{EntryKind, LogEntry};
pub use ledger::{Ending, GamePhase, PartyRank, Position, TOTAL_SEATS};
pub use snapshot::{ChamberSnapshot, ClockSnapshot, PlayerSnapshot, SessionSnapshot};
pub use turn::{ParseTurnLabelError, TurnLabel};
