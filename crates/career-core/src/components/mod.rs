//! Ledger Components
//!
//! Player and chamber attributes, the session clock, and bounded deltas.

pub mod chamber;
pub mod clock;
pub mod ledger;
pub mod player;

pub use chamber::*;
pub use clock::*;
pub use ledger::*;
pub use player::*;
