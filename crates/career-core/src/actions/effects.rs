//! Effect Registry
//!
//! One pure function per action, resolved by id. Effects only apply bounded
//! deltas to funds, approval, influence, and ruling-party approval; the
//! action's cost is charged by the caller when the outcome says it applied.

use crate::components::{Ledger, LedgerDelta};
use crate::random::RandomSource;

use super::catalog::ActionId;

/// Signature shared by every effect
pub type EffectFn = fn(&mut Ledger, &mut dyn RandomSource) -> EffectOutcome;

/// Narration produced by an effect
#[derive(Debug, Clone, PartialEq)]
pub struct EffectOutcome {
    pub text: String,
    /// False when the effect was a no-op; no cost is charged then
    pub applied: bool,
}

impl EffectOutcome {
    fn applied(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: true,
        }
    }

    fn skipped(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }
}

/// Effect magnitudes
pub mod action_constants {
    pub const CAMPAIGN_APPROVAL_GAIN: f64 = 3.0;

    /// Fundraiser gain is drawn from `[MIN, MAX)`
    pub const FUNDRAISING_MIN_GAIN: i64 = 100;
    pub const FUNDRAISING_MAX_GAIN: i64 = 300;
    pub const FUNDRAISING_INFLUENCE_GAIN: f64 = 1.0;

    pub const POLICY_APPROVAL_GAIN: f64 = 1.0;
    pub const POLICY_RULING_APPROVAL_GAIN: f64 = 0.2;

    /// Faction meeting influence gain is drawn from `1..=5`
    pub const FACTION_MIN_INFLUENCE_GAIN: i64 = 1;
    pub const FACTION_MAX_INFLUENCE_GAIN: i64 = 5;
    pub const FACTION_APPROVAL_LOSS: f64 = 1.0;

    pub const STUMP_SPEECH_APPROVAL_GAIN: f64 = 0.5;
    pub const DEBATE_APPROVAL_GAIN: f64 = 1.5;
}

use action_constants::*;

/// Resolve the effect function for an action
pub fn effect_for(id: ActionId) -> EffectFn {
    match id {
        ActionId::Campaign => local_campaign,
        ActionId::Fundraising => fundraising_party,
        ActionId::PolicyStudy => policy_study,
        ActionId::FactionMeeting => faction_meeting,
        ActionId::StumpSpeech => stump_speech,
        ActionId::TelevisedDebate => televised_debate,
    }
}

fn local_campaign(ledger: &mut Ledger, _rng: &mut dyn RandomSource) -> EffectOutcome {
    LedgerDelta::approval(CAMPAIGN_APPROVAL_GAIN).apply(ledger);
    EffectOutcome::applied(
        "Your work in the district made the local news. Voters are starting to notice you.",
    )
}

fn fundraising_party(ledger: &mut Ledger, rng: &mut dyn RandomSource) -> EffectOutcome {
    let gain = rng.int_range(FUNDRAISING_MIN_GAIN, FUNDRAISING_MAX_GAIN);
    LedgerDelta::funds(gain)
        .with_influence(FUNDRAISING_INFLUENCE_GAIN)
        .apply(ledger);
    EffectOutcome::applied(format!(
        "The party raised {} man-yen. Your voice inside the party grew a little louder.",
        gain
    ))
}

fn policy_study(ledger: &mut Ledger, _rng: &mut dyn RandomSource) -> EffectOutcome {
    if ledger.player.is_out_of_office() {
        return EffectOutcome::skipped(
            "Without a seat there is no committee to bring your proposals to.",
        );
    }
    LedgerDelta::approval(POLICY_APPROVAL_GAIN)
        .with_ruling_party_approval(POLICY_RULING_APPROVAL_GAIN)
        .apply(ledger);
    EffectOutcome::applied(
        "You prepared proposals for the coming Diet session. Unglamorous, but it is steady progress.",
    )
}

fn faction_meeting(ledger: &mut Ledger, rng: &mut dyn RandomSource) -> EffectOutcome {
    if ledger.player.is_out_of_office() {
        return EffectOutcome::skipped("The faction elders do not make time for a former member.");
    }
    let gain = rng.int_range(FACTION_MIN_INFLUENCE_GAIN, FACTION_MAX_INFLUENCE_GAIN + 1);
    LedgerDelta::approval(-FACTION_APPROVAL_LOSS)
        .with_influence(gain as f64)
        .apply(ledger);
    EffectOutcome::applied(format!(
        "You spent the evening with the faction's veterans. Influence +{}.",
        gain
    ))
}

fn stump_speech(ledger: &mut Ledger, _rng: &mut dyn RandomSource) -> EffectOutcome {
    LedgerDelta::approval(STUMP_SPEECH_APPROVAL_GAIN).apply(ledger);
    EffectOutcome::applied("You spoke outside the station at rush hour. A few people stopped to listen.")
}

fn televised_debate(ledger: &mut Ledger, _rng: &mut dyn RandomSource) -> EffectOutcome {
    LedgerDelta::approval(DEBATE_APPROVAL_GAIN).apply(ledger);
    EffectOutcome::applied("Your answers in the televised debate came across well.")
}
