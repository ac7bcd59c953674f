//! Turn Controller
//!
//! `CareerSession` owns the whole game: ledger, clock, phase, narration log,
//! and the random source. It is the only mutator of game state. Front ends
//! call `invoke_action` any number of times per beat and `advance` once per
//! beat (a month in the Normal phase, a day during a campaign).

use career_events::{EntryKind, Ending, GamePhase, SessionSnapshot, TurnLabel};

use crate::actions::{catalog_for, effect_for, ActionId, ActionSpec};
use crate::components::{
    normalize_name, ChamberState, GameClock, Ledger, PlayerState, CAMPAIGN_DAYS,
};
use crate::config::CareerConfig;
use crate::error::ActionError;
use crate::events::MessageLog;
use crate::random::{RandomSource, SimRng};
use crate::systems::{
    apply_ascension, apply_campaign_day_cost, apply_monthly_upkeep, apply_rung,
    check_termination, ending_message, evaluate_promotion, is_poll_day, qualifies_for_ascension,
    resolve_election, roll_event, run_poll,
};

/// Narration returned by a successful action
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    pub action: ActionId,
    pub text: String,
    /// False when the action had nothing to act on and cost nothing
    pub applied: bool,
}

/// One game from the first month to its conclusion
pub struct CareerSession<R: RandomSource = SimRng> {
    ledger: Ledger,
    clock: GameClock,
    phase: GamePhase,
    ending: Option<Ending>,
    log: MessageLog,
    rng: R,
    /// Set once the opening narration has been written
    welcomed: bool,
}

impl CareerSession<SimRng> {
    /// Start a session seeded from the configuration
    pub fn with_seed(config: &CareerConfig) -> Self {
        Self::new(config, SimRng::seeded(config.session.seed))
    }
}

impl<R: RandomSource> CareerSession<R> {
    /// Start a fresh session with an injected random source.
    ///
    /// The welcome is written by the first input, so a name given through
    /// `set_player_name` appears in it.
    pub fn new(config: &CareerConfig, rng: R) -> Self {
        tracing::info!(player = %config.player.name, seed = config.session.seed, "Session created");
        Self {
            ledger: config.initial_ledger(),
            clock: config.initial_clock(),
            phase: GamePhase::Normal,
            ending: None,
            log: MessageLog::new(config.log.display_window),
            rng,
            welcomed: false,
        }
    }

    /// Resume from an explicit state.
    ///
    /// The clock's campaign day is zeroed outside a campaign and a Prime
    /// Minister without a seat loses the title, so the usual invariants hold.
    pub fn from_parts(mut ledger: Ledger, mut clock: GameClock, phase: GamePhase, rng: R) -> Self {
        if phase != GamePhase::ElectionCampaign {
            clock.election_day = 0;
        }
        if ledger.player.is_prime_minister && !ledger.player.is_elected {
            ledger.player.is_prime_minister = false;
        }
        Self {
            ledger,
            clock,
            phase,
            ending: None,
            log: MessageLog::default(),
            rng,
            welcomed: true,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn is_concluded(&self) -> bool {
        self.phase == GamePhase::Concluded
    }

    pub fn player(&self) -> &PlayerState {
        &self.ledger.player
    }

    pub fn chamber(&self) -> &ChamberState {
        &self.ledger.chamber
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn turn_label(&self) -> TurnLabel {
        self.clock.turn_label(self.phase)
    }

    /// Catalog offered in the current phase
    pub fn available_actions(&self) -> &'static [ActionSpec] {
        catalog_for(self.phase)
    }

    /// Read-only projection for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            ending: self.ending,
            player: self.ledger.player.snapshot(),
            chamber: self.ledger.chamber.snapshot(),
            clock: self.clock.snapshot(self.phase),
            log_len: self.log.len(),
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Rename the player. Blank input falls back to the default name.
    pub fn set_player_name(&mut self, name: &str) {
        if self.is_concluded() {
            return;
        }
        self.ledger.player.name = normalize_name(name);
        self.welcome_once();
    }

    /// Invoke an action by its external id
    pub fn invoke(&mut self, id: &str) -> Result<Narration, ActionError> {
        let action: ActionId = id.parse()?;
        self.invoke_action(action)
    }

    /// Invoke an action.
    ///
    /// Fails without touching the ledger when funds are short of the cost,
    /// or when the action belongs to the other catalog.
    pub fn invoke_action(&mut self, action: ActionId) -> Result<Narration, ActionError> {
        let spec = action.spec();
        if !spec.phase.permits(self.phase) {
            return Err(ActionError::InvalidPhaseForAction {
                action,
                phase: self.phase,
            });
        }
        self.welcome_once();

        let available = self.ledger.player.funds;
        if available < spec.cost {
            self.narrate(
                EntryKind::Shortfall,
                format!("Not enough funds! ({} needs {} man-yen)", spec.title, spec.cost),
            );
            tracing::debug!(%action, required = spec.cost, available, "Action refused");
            return Err(ActionError::InsufficientFunds {
                action,
                required: spec.cost,
                available,
            });
        }

        let outcome = effect_for(action)(&mut self.ledger, &mut self.rng);
        if outcome.applied {
            self.ledger.player.funds -= spec.cost;
        }
        self.narrate(EntryKind::Action, format!("[{}] {}", spec.title, outcome.text));
        tracing::debug!(%action, applied = outcome.applied, funds = self.ledger.player.funds, "Action taken");

        self.conclude_if_failed();
        Ok(Narration {
            action,
            text: outcome.text,
            applied: outcome.applied,
        })
    }

    /// Advance one beat: a month in the Normal phase, a day during a campaign.
    ///
    /// Does nothing once the session has concluded.
    pub fn advance(&mut self) {
        if !self.is_concluded() {
            self.welcome_once();
        }
        match self.phase {
            GamePhase::Normal => self.advance_month(),
            GamePhase::ElectionCampaign => self.advance_campaign_day(),
            GamePhase::Concluded => {
                tracing::debug!("advance() ignored: session concluded");
            }
        }
    }

    // ------------------------------------------------------------------
    // Beats
    // ------------------------------------------------------------------

    fn advance_month(&mut self) {
        apply_monthly_upkeep(&mut self.ledger);
        if self.conclude_if_failed() {
            return;
        }

        self.clock.months_until_election -= 1;
        if self.clock.months_until_election <= 0 {
            self.begin_campaign();
            return;
        }

        if self.ledger.player.is_elected {
            self.run_promotion_check();
        }

        if let Some(event) = roll_event(&mut self.rng) {
            let text = event.apply(&mut self.ledger, &mut self.rng);
            self.narrate(EntryKind::Event, text);
            tracing::info!(event = event.key, "Random event");
            if self.conclude_if_failed() {
                return;
            }
        }

        self.clock.turn_index += 1;
        if self.clock.is_year_boundary() {
            self.ledger.player.age += 1;
            let notice = format!("Happy birthday! You turned {}.", self.ledger.player.age);
            self.narrate(EntryKind::Birthday, notice);
        }
    }

    fn begin_campaign(&mut self) {
        self.phase = GamePhase::ElectionCampaign;
        self.clock.start_campaign();
        self.narrate(
            EntryKind::Election,
            "The Diet has been dissolved! The general election campaign begins: twelve days to polling day.",
        );
        tracing::info!(turn = self.clock.turn_index, "Election campaign started");
    }

    fn advance_campaign_day(&mut self) {
        self.clock.election_day += 1;
        apply_campaign_day_cost(&mut self.ledger);
        if self.conclude_if_failed() {
            return;
        }

        let day = self.clock.election_day;
        if is_poll_day(day) {
            let poll = run_poll(&self.ledger, &mut self.rng, day);
            self.narrate(EntryKind::Poll, poll.narration());
            tracing::debug!(day, projected = poll.projected_ruling_seats, "Poll published");
        }

        if day > CAMPAIGN_DAYS {
            self.tally_election();
        }
    }

    fn tally_election(&mut self) {
        let outcome = resolve_election(&mut self.ledger, &mut self.rng);
        self.narrate(EntryKind::Election, outcome.seats_narration());
        let highlighted = outcome.lost_seat() || outcome.regained_seat();
        self.narrate_highlighted(EntryKind::Election, outcome.player_narration(), highlighted);

        self.clock.reset_after_election();
        self.phase = GamePhase::Normal;

        self.check_ascension();
        self.conclude_if_failed();
    }

    fn welcome_once(&mut self) {
        if self.welcomed {
            return;
        }
        self.welcomed = true;
        let welcome = format!(
            "Welcome, Representative {}. Your road to the Prime Minister's office begins today.",
            self.ledger.player.name
        );
        self.narrate(EntryKind::Notice, welcome);
        tracing::info!(player = %self.ledger.player.name, "Session started");
    }

    fn run_promotion_check(&mut self) {
        if let Some(rung) = evaluate_promotion(&self.ledger) {
            let headline = apply_rung(&mut self.ledger, rung);
            self.narrate(EntryKind::Promotion, headline);
            tracing::info!(
                position = ?self.ledger.player.position,
                rank = ?self.ledger.player.party_rank,
                "Promotion"
            );
        }
        self.check_ascension();
    }

    fn check_ascension(&mut self) {
        if qualifies_for_ascension(&self.ledger) {
            let headline = apply_ascension(&mut self.ledger);
            self.narrate(EntryKind::Ascension, headline);
            tracing::info!(player = %self.ledger.player.name, "Prime Minister");
        }
    }

    /// Conclude the session if the ledger hit a failure condition.
    /// Returns true when the session is (now) concluded.
    fn conclude_if_failed(&mut self) -> bool {
        if self.is_concluded() {
            return true;
        }
        let Some(ending) = check_termination(&self.ledger.player) else {
            return false;
        };
        self.narrate(EntryKind::Termination, "--- Game Over ---");
        self.narrate(EntryKind::Termination, ending_message(ending));
        self.phase = GamePhase::Concluded;
        self.ending = Some(ending);
        tracing::info!(%ending, funds = self.ledger.player.funds, approval = self.ledger.player.approval, "Session concluded");
        true
    }

    fn narrate(&mut self, kind: EntryKind, text: impl Into<String>) {
        let label = self.turn_label();
        self.log.push(kind, text, label);
    }

    fn narrate_highlighted(&mut self, kind: EntryKind, text: impl Into<String>, highlighted: bool) {
        let label = self.turn_label();
        self.log.push_highlighted(kind, text, label, highlighted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, SequenceRandom};
    use career_events::{PartyRank, Position};

    fn quiet_session() -> CareerSession<FixedRandom> {
        CareerSession::new(&CareerConfig::default(), FixedRandom(0.5))
    }

    #[test]
    fn test_welcome_uses_chosen_name() {
        let mut session = quiet_session();
        assert!(session.log().is_empty());

        session.set_player_name("Ichiro Suzuki");
        assert_eq!(session.log().len(), 1);
        let entry = session.log().last().unwrap();
        assert_eq!(entry.kind, EntryKind::Notice);
        assert!(entry.text.contains("Ichiro Suzuki"));
        assert_eq!(entry.turn_label, TurnLabel::Month(1));

        // Renaming later does not welcome again
        session.set_player_name("Jiro Suzuki");
        assert_eq!(session.log().of_kind(EntryKind::Notice).count(), 1);
    }

    #[test]
    fn test_first_beat_welcomes_default_name() {
        let mut session = quiet_session();
        session.advance();
        let first = &session.log().entries()[0];
        assert_eq!(first.kind, EntryKind::Notice);
        assert!(first.text.contains("Taro Tanaka"));
    }

    #[test]
    fn test_set_player_name() {
        let mut session = quiet_session();
        session.set_player_name("Ichiro Suzuki");
        assert_eq!(session.player().name, "Ichiro Suzuki");
        session.set_player_name("  ");
        assert_eq!(session.player().name, "Taro Tanaka");
    }

    #[test]
    fn test_action_charges_cost() {
        let mut session = quiet_session();
        let narration = session.invoke_action(ActionId::Campaign).unwrap();
        assert!(narration.applied);
        assert_eq!(session.player().funds, 450);
        assert_eq!(session.player().approval, 43.0);
        assert!(session.log().last().unwrap().text.starts_with("[Local campaigning]"));
    }

    #[test]
    fn test_insufficient_funds_leaves_ledger_untouched() {
        let mut ledger = Ledger::default();
        ledger.player.funds = 20;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::Normal, FixedRandom(0.5));
        let before = session.ledger().clone();

        let err = session.invoke_action(ActionId::Campaign).unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientFunds {
                action: ActionId::Campaign,
                required: 50,
                available: 20
            }
        );
        assert_eq!(session.ledger(), &before);
        assert_eq!(session.log().last().unwrap().kind, EntryKind::Shortfall);
    }

    #[test]
    fn test_wrong_catalog_fails_fast() {
        let mut session = quiet_session();
        let err = session.invoke_action(ActionId::StumpSpeech).unwrap_err();
        assert!(matches!(err, ActionError::InvalidPhaseForAction { phase: GamePhase::Normal, .. }));
        assert!(matches!(session.invoke("bribe"), Err(ActionError::UnknownActionId(_))));
        // Nothing narrated for caller bugs
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_month_advance() {
        let mut session = quiet_session();
        session.advance();
        let player = session.player();
        assert_eq!(player.funds, 480);
        assert_eq!(player.approval, 39.5);
        assert_eq!(session.clock().months_until_election, 47);
        assert_eq!(session.clock().turn_index, 1);
    }

    #[test]
    fn test_birthday_every_twelve_months() {
        let mut session = quiet_session();
        for _ in 0..12 {
            session.advance();
        }
        assert_eq!(session.player().age, 36);
        assert_eq!(session.log().of_kind(EntryKind::Birthday).count(), 1);
    }

    #[test]
    fn test_campaign_starts_when_countdown_ends() {
        let ledger = Ledger::default();
        let clock = GameClock {
            turn_index: 47,
            months_until_election: 1,
            election_day: 0,
        };
        let mut session = CareerSession::from_parts(ledger, clock, GamePhase::Normal, FixedRandom(0.5));
        session.advance();
        assert_eq!(session.phase(), GamePhase::ElectionCampaign);
        assert_eq!(session.clock().election_day, 0);
        // The transition beat does not advance the month
        assert_eq!(session.clock().turn_index, 47);
        assert_eq!(session.log().last().unwrap().kind, EntryKind::Election);
    }

    #[test]
    fn test_campaign_days_and_polls() {
        let mut ledger = Ledger::default();
        ledger.player.approval = 60.0;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::ElectionCampaign, FixedRandom(0.5));

        for _ in 0..12 {
            session.advance();
        }
        assert_eq!(session.phase(), GamePhase::ElectionCampaign);
        assert_eq!(session.clock().election_day, 12);
        assert_eq!(session.player().funds, 500 - 120);
        assert_eq!(session.log().of_kind(EntryKind::Poll).count(), 4);

        // Tally day
        session.advance();
        assert_eq!(session.phase(), GamePhase::Normal);
        assert_eq!(session.clock().election_day, 0);
        assert_eq!(session.clock().months_until_election, 48);
        assert_eq!(session.player().funds, 500 - 130);
        assert!(session.player().is_elected);
    }

    #[test]
    fn test_election_actions_only_in_campaign() {
        let mut session = CareerSession::from_parts(
            Ledger::default(),
            GameClock::new(),
            GamePhase::ElectionCampaign,
            FixedRandom(0.5),
        );
        session.invoke_action(ActionId::TelevisedDebate).unwrap();
        assert_eq!(session.player().funds, 400);
        assert_eq!(session.player().approval, 41.5);
        assert!(matches!(
            session.invoke_action(ActionId::Campaign),
            Err(ActionError::InvalidPhaseForAction { .. })
        ));
    }

    #[test]
    fn test_promotion_fires_once() {
        let mut ledger = Ledger::default();
        ledger.player.influence = 60.0;
        ledger.player.approval = 60.0;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::Normal, FixedRandom(0.5));

        session.advance();
        session.advance();
        session.advance();
        assert_eq!(session.player().party_rank, PartyRank::ViceMinisterTier);
        assert_eq!(session.log().of_kind(EntryKind::Promotion).count(), 1);
    }

    #[test]
    fn test_ascension_is_not_terminal() {
        let mut ledger = Ledger::default();
        ledger.player.influence = 200.0;
        ledger.player.approval = 70.0;
        ledger.player.position = Position::DeputyChiefCabinetSecretary;
        ledger.player.party_rank = PartyRank::MinisterTier;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::Normal, FixedRandom(0.5));

        session.advance();
        assert!(session.player().is_prime_minister);
        assert_eq!(session.player().position, Position::PrimeMinister);
        assert_eq!(session.phase(), GamePhase::Normal);
        assert_eq!(session.log().of_kind(EntryKind::Ascension).count(), 1);

        session.advance();
        assert_eq!(session.log().of_kind(EntryKind::Ascension).count(), 1);
        assert_eq!(session.phase(), GamePhase::Normal);
    }

    #[test]
    fn test_bankruptcy_concludes() {
        let mut ledger = Ledger::default();
        ledger.player.funds = 10;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::Normal, FixedRandom(0.5));
        session.advance();
        assert!(session.is_concluded());
        assert_eq!(session.ending(), Some(Ending::Bankruptcy));
        assert_eq!(session.log().of_kind(EntryKind::Termination).count(), 2);

        let frozen = session.snapshot();
        session.advance();
        session.set_player_name("Someone Else");
        assert!(session.invoke_action(ActionId::FactionMeeting).is_err());
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_lost_confidence_after_faction_meeting() {
        let mut ledger = Ledger::default();
        ledger.player.approval = 10.5;
        let mut session = CareerSession::from_parts(ledger, GameClock::new(), GamePhase::Normal, FixedRandom(0.5));
        session.invoke_action(ActionId::FactionMeeting).unwrap();
        assert_eq!(session.ending(), Some(Ending::LostConfidence));
    }

    #[test]
    fn test_random_event_applies() {
        // Gate passes (0.05), pick index 3 (0.5) = donor windfall
        let rng = SequenceRandom::new(vec![0.05, 0.5, 0.99]);
        let mut session = CareerSession::from_parts(Ledger::default(), GameClock::new(), GamePhase::Normal, rng);
        session.advance();
        assert_eq!(session.player().funds, 500 - 20 + 100);
        assert_eq!(session.log().of_kind(EntryKind::Event).count(), 1);
    }

    #[test]
    fn test_from_parts_restores_invariants() {
        let mut ledger = Ledger::default();
        ledger.player.lose_seat();
        ledger.player.is_prime_minister = true;
        let clock = GameClock {
            turn_index: 3,
            months_until_election: 10,
            election_day: 5,
        };
        let session = CareerSession::from_parts(ledger, clock, GamePhase::Normal, FixedRandom(0.5));
        assert!(!session.player().is_prime_minister);
        assert_eq!(session.clock().election_day, 0);
    }

    #[test]
    fn test_snapshot_projection() {
        let session = quiet_session();
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Normal);
        assert_eq!(snap.player.funds, 500);
        assert_eq!(snap.chamber.ruling_party_seats + snap.chamber.opposition_seats, 465);
        assert_eq!(snap.clock.turn_label, TurnLabel::Month(1));
        assert_eq!(snap.log_len, 0);
        assert_eq!(session.available_actions().len(), 4);
    }
}
