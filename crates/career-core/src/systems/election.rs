//! Election Subsystem
//!
//! Campaign polling (read-only projections) and the once-per-election
//! resolution: seat apportionment for the ruling party and the player's
//! own race.

use career_events::TOTAL_SEATS;

use crate::components::{Ledger, PlayerState};
use crate::random::RandomSource;

/// Constants for elections
pub mod election_constants {
    /// Campaign days on which a poll is published
    pub const POLL_DAYS: [u8; 4] = [3, 6, 9, 12];
    /// Poll sampling noise, +/- percentage points
    pub const POLL_NOISE: f64 = 2.5;
    /// Seat noise at resolution, +/- seats
    pub const SEAT_NOISE: f64 = 25.0;
    /// The ruling party never falls below this many seats
    pub const MIN_RULING_SEATS: u32 = 100;
    /// Win-chance score must strictly exceed this to keep the seat
    pub const WIN_THRESHOLD: f64 = 100.0;
}

use election_constants::*;

pub fn is_poll_day(day: u8) -> bool {
    POLL_DAYS.contains(&day)
}

/// Seats implied by a national approval figure
pub fn project_seats(ruling_party_approval: f64) -> f64 {
    f64::from(TOTAL_SEATS) * ruling_party_approval / 100.0
}

/// Published poll figures
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    pub day: u8,
    pub player_approval: f64,
    pub ruling_party_approval: f64,
    pub projected_ruling_seats: u32,
}

impl PollResult {
    pub fn narration(&self) -> String {
        format!(
            "Poll (day {}): your support {:.1}%, ruling party {:.1}% for a projected {} of {} seats.",
            self.day, self.player_approval, self.ruling_party_approval, self.projected_ruling_seats, TOTAL_SEATS
        )
    }
}

/// Sample a poll. Never mutates the ledger.
pub fn run_poll(ledger: &Ledger, rng: &mut dyn RandomSource, day: u8) -> PollResult {
    let player_approval = ledger.player.approval + rng.uniform(-POLL_NOISE, POLL_NOISE);
    let ruling_party_approval =
        ledger.chamber.ruling_party_approval + rng.uniform(-POLL_NOISE, POLL_NOISE);
    let projected = project_seats(ruling_party_approval)
        .round()
        .clamp(0.0, f64::from(TOTAL_SEATS)) as u32;

    PollResult {
        day,
        player_approval,
        ruling_party_approval,
        projected_ruling_seats: projected,
    }
}

/// `2 x approval + influence + funds / 100`
pub fn win_chance_score(player: &PlayerState) -> f64 {
    2.0 * player.approval + player.influence + player.funds as f64 / 100.0
}

/// What happened at the tally
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionOutcome {
    pub previous_ruling_seats: u32,
    pub ruling_seats: u32,
    pub score: f64,
    pub player_elected: bool,
    /// Was seated going into the election
    pub was_elected: bool,
}

impl ElectionOutcome {
    pub fn lost_seat(&self) -> bool {
        self.was_elected && !self.player_elected
    }

    pub fn regained_seat(&self) -> bool {
        !self.was_elected && self.player_elected
    }

    pub fn seats_narration(&self) -> String {
        format!(
            "General election results: the ruling party won {} seats (previously {}), the opposition {}.",
            self.ruling_seats,
            self.previous_ruling_seats,
            TOTAL_SEATS - self.ruling_seats
        )
    }

    pub fn player_narration(&self) -> String {
        match (self.was_elected, self.player_elected) {
            (true, true) => format!("You held your seat (score {:.1}).", self.score),
            (false, true) => format!(
                "You are back in the Diet (score {:.1}), starting again from the back benches.",
                self.score
            ),
            (true, false) => format!(
                "You lost your seat (score {:.1}). You will fight on as an independent.",
                self.score
            ),
            (false, false) => format!(
                "The comeback fell short (score {:.1}). You remain out of office.",
                self.score
            ),
        }
    }
}

/// Resolve the general election.
///
/// Apportions ruling-party seats from national approval plus noise, then
/// settles the player's own race. Losing strips every office; winning back
/// a seat restarts the ladder from the bottom.
pub fn resolve_election(ledger: &mut Ledger, rng: &mut dyn RandomSource) -> ElectionOutcome {
    let previous_ruling_seats = ledger.chamber.ruling_party_seats();
    let base_seats = project_seats(ledger.chamber.ruling_party_approval);
    let noisy = (base_seats + rng.uniform(-SEAT_NOISE, SEAT_NOISE)).round();
    // f64::max discards NaN, so the floor holds for any approval figure
    let ruling_seats = noisy
        .max(f64::from(MIN_RULING_SEATS))
        .min(f64::from(TOTAL_SEATS)) as u32;
    ledger.chamber.set_ruling_party_seats(ruling_seats);

    let was_elected = ledger.player.is_elected;
    let score = win_chance_score(&ledger.player);
    let player_elected = score > WIN_THRESHOLD;

    if !player_elected {
        ledger.player.lose_seat();
    } else if !was_elected {
        ledger.player.regain_seat();
    }

    tracing::info!(
        ruling_seats,
        previous_ruling_seats,
        score,
        player_elected,
        "Election resolved"
    );

    ElectionOutcome {
        previous_ruling_seats,
        ruling_seats,
        score,
        player_elected,
        was_elected,
    }
}
