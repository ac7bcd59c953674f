//! Narration Output
//!
//! The append-only message log and its JSON-lines trace writer.

pub mod log;
pub mod trace;

pub use log::{MessageLog, DEFAULT_DISPLAY_WINDOW};
pub use trace::TraceWriter;
