//! Event Generator
//!
//! Occasional news that shifts the ledger. The table is fixed; a monthly
//! roll decides whether anything happens and which entry fires.

use crate::components::{Ledger, LedgerDelta};
use crate::random::RandomSource;

/// Chance per month that an event fires
pub const EVENT_PROBABILITY: f64 = 0.10;

/// One entry of the event table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomEvent {
    pub key: &'static str,
    pub headline: &'static str,
    pub delta: LedgerDelta,
    /// Extra player approval change drawn from `[low, high)` when the event fires
    pub approval_swing: Option<(i64, i64)>,
}

impl RandomEvent {
    /// Apply the fixed delta and any drawn swing, returning the narration
    pub fn apply(&self, ledger: &mut Ledger, rng: &mut dyn RandomSource) -> String {
        self.delta.apply(ledger);
        match self.approval_swing {
            Some((low, high)) => {
                let swing = rng.int_range(low, high);
                LedgerDelta::approval(swing as f64).apply(ledger);
                format!("{} Your approval moved {:+}.", self.headline, swing)
            }
            None => self.headline.to_string(),
        }
    }
}

pub const EVENT_TABLE: [RandomEvent; 6] = [
    RandomEvent {
        key: "economic_news",
        headline: "NEWS FLASH: The economic outlook has shifted and every politician's numbers feel it.",
        delta: LedgerDelta::approval(0.0),
        approval_swing: Some((-5, 5)),
    },
    RandomEvent {
        key: "party_scandal",
        headline: "A funding scandal engulfs a senior party figure. The whole party takes the blame.",
        delta: LedgerDelta::approval(-1.0).with_ruling_party_approval(-3.0),
        approval_swing: None,
    },
    RandomEvent {
        key: "media_profile",
        headline: "A weekly magazine runs a flattering profile of you.",
        delta: LedgerDelta::approval(2.0),
        approval_swing: None,
    },
    RandomEvent {
        key: "donor_windfall",
        headline: "An old supporter from your district sends a generous donation.",
        delta: LedgerDelta::funds(100),
        approval_swing: None,
    },
    RandomEvent {
        key: "disaster_response",
        headline: "The government's disaster response is praised, and you were seen at the front.",
        delta: LedgerDelta::approval(1.0)
            .with_influence(2.0)
            .with_ruling_party_approval(2.0),
        approval_swing: None,
    },
    RandomEvent {
        key: "elder_patronage",
        headline: "A faction elder takes you under their wing.",
        delta: LedgerDelta::funds(0).with_influence(5.0),
        approval_swing: None,
    },
];

/// Uniform pick from the table
pub fn pick_event(rng: &mut dyn RandomSource) -> &'static RandomEvent {
    &EVENT_TABLE[rng.pick(EVENT_TABLE.len())]
}

/// Monthly roll: fires with `EVENT_PROBABILITY`, then picks an entry
pub fn roll_event(rng: &mut dyn RandomSource) -> Option<&'static RandomEvent> {
    if rng.chance(EVENT_PROBABILITY) {
        Some(pick_event(rng))
    } else {
        None
    }
}
