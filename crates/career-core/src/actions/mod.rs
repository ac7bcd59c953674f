//! Action Catalog
//!
//! Pure-data catalogs of what the player can do, plus a separate registry
//! of effect functions keyed by action id.

pub mod catalog;
pub mod effects;

pub use catalog::{catalog_for, ActionId, ActionPhase, ActionSpec, ELECTION_CATALOG, NORMAL_CATALOG};
pub use effects::{action_constants, effect_for, EffectFn, EffectOutcome};
