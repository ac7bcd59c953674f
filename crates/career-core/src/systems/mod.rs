//! Turn Systems
//!
//! Upkeep, promotion, random events, elections, and termination checks.
//! Each system is a plain function over the ledger; sequencing lives in the
//! session.

pub mod election;
pub mod events;
pub mod promotion;
pub mod termination;
pub mod upkeep;

pub use election::{
    is_poll_day, project_seats, resolve_election, run_poll, win_chance_score, ElectionOutcome,
    PollResult,
};
pub use events::{pick_event, roll_event, RandomEvent, EVENT_TABLE};
pub use promotion::{
    apply_ascension, apply_rung, evaluate_promotion, qualifies_for_ascension, Requirement, Rung,
    LADDER,
};
pub use termination::{check_termination, ending_message, APPROVAL_LOW_WATER};
pub use upkeep::{apply_campaign_day_cost, apply_monthly_upkeep};
