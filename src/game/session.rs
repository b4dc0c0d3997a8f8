//! Game session state machine
//!
//! A session is the single mutable context a front end drives. Every user
//! gesture maps to one method; every piece of renderable state has a getter.
//!
//! Phases:
//! - guesser: the human fills a proposition, `apply` scores it against a
//!   random secret
//! - proposer, setting: the human fills a proposition, `apply` locks it as
//!   the solution and the solver plays its opening guess
//! - proposer, playing: the human marks feedback on the machine's guess,
//!   `apply` records it and the solver answers with the next guess

use super::history::{History, HistoryError, Round};
use super::settings::{Role, Settings, TallyCadence};
use crate::core::{Code, Color, Feedback, FeedbackPeg, Proposition, Score};
use crate::ledger::ScoreLedger;
use crate::solver::{CodeSpace, Solver};
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How a finished game ended, from the code-breaker's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The last scored round matched every slot
    Win,
    /// Every attempt was used without an exact match
    Loss,
    /// The solver found no code consistent with the previous round
    Exhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("code broken"),
            Self::Loss => f.write_str("out of attempts"),
            Self::Exhausted => f.write_str("no consistent candidate"),
        }
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    GuesserPlaying,
    ProposerSettingSolution,
    ProposerPlaying,
    Ended(Outcome),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuesserPlaying => f.write_str("guessing"),
            Self::ProposerSettingSolution => f.write_str("setting the solution"),
            Self::ProposerPlaying => f.write_str("scoring the machine"),
            Self::Ended(outcome) => write!(f, "ended ({outcome})"),
        }
    }
}

/// Error type for session gestures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("every slot must be filled before applying")]
    NotReady,
    #[error("slot {slot} does not exist (code has {nb_pawns} pawns)")]
    SlotOutOfRange { slot: usize, nb_pawns: usize },
    #[error("cannot {action} while {phase}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("the game is over")]
    GameOver,
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// One play session
#[derive(Debug)]
pub struct GameSession {
    settings: Settings,
    phase: Phase,
    selected_color: Color,
    proposition: Proposition,
    solution: Option<Code>,
    feedback: Feedback,
    history: History,
    solver: Option<Solver>,
    ledger: ScoreLedger,
}

impl GameSession {
    /// Start a session with fixed `settings`
    ///
    /// In the guesser role the secret is drawn from `rng` right away. In the
    /// proposer role the session waits for the human's solution.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameSession, Phase, Settings};
    /// use mastermind::ledger::ScoreLedger;
    ///
    /// let session = GameSession::new(Settings::default(), ScoreLedger::new(), &mut rand::rng());
    /// assert_eq!(session.phase(), Phase::GuesserPlaying);
    /// assert!(session.in_game());
    /// ```
    pub fn new<R: Rng>(settings: Settings, ledger: ScoreLedger, rng: &mut R) -> Self {
        let nb_pawns = settings.nb_pawns();
        let (phase, solution) = match settings.role() {
            Role::Guesser => (Phase::GuesserPlaying, Some(Code::random(nb_pawns, rng))),
            Role::Proposer => (Phase::ProposerSettingSolution, None),
        };

        info!(
            role = %settings.role(),
            nb_pawns,
            attempts = settings.attempts(),
            "session started"
        );

        Self {
            phase,
            selected_color: Color::default(),
            proposition: Proposition::new(nb_pawns),
            solution,
            feedback: Feedback::new(nb_pawns),
            history: History::new(settings.attempts()),
            solver: None,
            ledger,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.settings.role()
    }

    #[must_use]
    pub const fn nb_pawns(&self) -> usize {
        self.settings.nb_pawns()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn in_game(&self) -> bool {
        !matches!(self.phase, Phase::Ended(_))
    }

    #[must_use]
    pub const fn selected_color(&self) -> Color {
        self.selected_color
    }

    #[must_use]
    pub const fn proposition(&self) -> &Proposition {
        &self.proposition
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The round waiting for a score, if any (the machine's guess in the
    /// proposer role)
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.history.current_round()
    }

    /// The secret: machine-drawn for a guesser, human-set for a proposer
    #[must_use]
    pub const fn solution(&self) -> Option<&Code> {
        self.solution.as_ref()
    }

    /// Check if a proposer has locked in the solution
    #[must_use]
    pub const fn valid_solution(&self) -> bool {
        matches!(self.settings.role(), Role::Proposer) && self.solution.is_some()
    }

    #[must_use]
    pub const fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Scan position of the solver, once it is seeded
    #[must_use]
    pub fn solver_index(&self) -> Option<usize> {
        self.solver.as_ref().map(Solver::last_index)
    }

    /// Check if the human came out ahead in a finished game
    #[must_use]
    pub const fn human_won(&self) -> bool {
        match (self.phase, self.settings.role()) {
            (Phase::Ended(Outcome::Win), Role::Guesser) => true,
            (Phase::Ended(Outcome::Loss | Outcome::Exhausted), Role::Proposer) => true,
            _ => false,
        }
    }

    /// End the session and hand the ledger back for saving
    #[must_use]
    pub fn into_ledger(self) -> ScoreLedger {
        self.ledger
    }

    pub fn select_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    /// Put the selected color on a proposition slot
    ///
    /// # Errors
    /// Returns `SessionError::SlotOutOfRange` for a slot past the code length,
    /// `SessionError::WrongPhase` while the proposition is the machine's.
    pub fn set_proposition_slot(&mut self, slot: usize) -> Result<(), SessionError> {
        if !matches!(
            self.phase,
            Phase::GuesserPlaying | Phase::ProposerSettingSolution
        ) {
            return Err(self.wrong_phase("edit the proposition"));
        }
        if !self.proposition.set(slot, self.selected_color) {
            return Err(self.slot_out_of_range(slot));
        }
        Ok(())
    }

    /// Advance the feedback marker on a slot of the machine's guess
    ///
    /// Returns the new marker.
    ///
    /// # Errors
    /// Returns `SessionError::WrongPhase` unless the machine is waiting for
    /// feedback, `SessionError::SlotOutOfRange` for a slot past the code
    /// length.
    pub fn cycle_feedback_slot(
        &mut self,
        slot: usize,
    ) -> Result<Option<FeedbackPeg>, SessionError> {
        if self.phase != Phase::ProposerPlaying {
            return Err(self.wrong_phase("give feedback"));
        }
        self.feedback
            .cycle(slot)
            .ok_or_else(|| self.slot_out_of_range(slot))
    }

    /// Clear the human's proposition; history is untouched
    ///
    /// Does nothing while the proposition shows the machine's guess.
    pub fn reset_proposition(&mut self) {
        if matches!(
            self.phase,
            Phase::GuesserPlaying | Phase::ProposerSettingSolution
        ) {
            self.proposition.clear();
        }
    }

    /// Clear the feedback markers; history is untouched
    pub fn reset_feedback(&mut self) {
        self.feedback.clear();
    }

    /// Clear whichever working buffer the current phase edits
    pub fn reset(&mut self) {
        match self.phase {
            Phase::GuesserPlaying | Phase::ProposerSettingSolution => self.reset_proposition(),
            Phase::ProposerPlaying => self.reset_feedback(),
            Phase::Ended(_) => {}
        }
    }

    /// Submit the current working buffer and return the resulting phase
    ///
    /// # Errors
    /// Returns `SessionError::NotReady` when a proposition still has unset
    /// slots, `SessionError::GameOver` once the game has ended.
    pub fn apply(&mut self) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::GuesserPlaying => self.apply_guess()?,
            Phase::ProposerSettingSolution => self.lock_solution()?,
            Phase::ProposerPlaying => self.apply_feedback()?,
            Phase::Ended(_) => return Err(SessionError::GameOver),
        }
        Ok(self.phase)
    }

    fn apply_guess(&mut self) -> Result<(), SessionError> {
        let code = self.proposition.to_code().ok_or(SessionError::NotReady)?;
        let Some(secret) = self.solution else {
            return Err(self.wrong_phase("score a guess"));
        };

        let score = Score::calculate(&code, &secret);
        self.history.record(code, Some(score))?;
        self.history.advance_cursor();
        self.proposition.clear();

        debug!(round = self.history.rounds_played(), %code, %score, "guess scored");
        self.verify_end_game();
        Ok(())
    }

    fn lock_solution(&mut self) -> Result<(), SessionError> {
        let code = self.proposition.to_code().ok_or(SessionError::NotReady)?;

        let solver = Solver::new(CodeSpace::generate(self.nb_pawns()));
        let opening = solver.first_guess();
        self.history.record(opening, None)?;

        self.solution = Some(code);
        self.proposition.fill_from(&opening);
        self.feedback.clear();
        self.solver = Some(solver);
        self.phase = Phase::ProposerPlaying;

        debug!(%opening, "solution locked, solver opened");
        Ok(())
    }

    fn apply_feedback(&mut self) -> Result<(), SessionError> {
        let guess = self
            .history
            .current_round()
            .map(|round| round.code)
            .ok_or(HistoryError::NoPendingRound)?;

        // The human is the oracle: the markers are the score
        let score = self.feedback.tally();
        self.history.score_current(score)?;
        self.history.advance_cursor();
        self.feedback.clear();

        debug!(round = self.history.rounds_played(), %guess, %score, "feedback recorded");
        self.verify_end_game();
        if !self.in_game() {
            return Ok(());
        }

        let Some(solver) = self.solver.as_mut() else {
            return Err(self.wrong_phase("ask the solver"));
        };
        match solver.next_guess(&guess, score) {
            Ok(next) => {
                self.history.record(next, None)?;
                self.proposition.fill_from(&next);
            }
            Err(e) => {
                warn!(error = %e, "solver has no guess left");
                self.end(Outcome::Exhausted);
            }
        }
        Ok(())
    }

    /// End-of-round check, run after every scored round
    ///
    /// With `TallyCadence::EveryRound` this also adds to the player's ledger
    /// entry on every call, whatever the round's result.
    fn verify_end_game(&mut self) {
        let exact = self
            .history
            .last_round()
            .and_then(|round| round.score)
            .is_some_and(|score| score.is_exact(self.nb_pawns()));

        if exact {
            self.end(Outcome::Win);
        } else if self.history.is_full() {
            self.end(Outcome::Loss);
        }

        if self.settings.cadence() == TallyCadence::EveryRound {
            self.tally();
        }
    }

    fn end(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended(outcome);
        info!(
            %outcome,
            rounds = self.history.rounds_played(),
            human_won = self.human_won(),
            "game over"
        );

        if self.settings.cadence() == TallyCadence::HumanWin && self.human_won() {
            self.tally();
        }
    }

    fn tally(&mut self) {
        let pseudo = self.settings.pseudo();
        if pseudo.is_empty() {
            debug!("anonymous player, ledger untouched");
            return;
        }
        let score = self.ledger.record_outcome(pseudo);
        debug!(pseudo, score, "ledger updated");
    }

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        SessionError::WrongPhase {
            action,
            phase: self.phase,
        }
    }

    fn slot_out_of_range(&self, slot: usize) -> SessionError {
        SessionError::SlotOutOfRange {
            slot,
            nb_pawns: self.nb_pawns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn settings(role: Role, pseudo: &str, cadence: TallyCadence) -> Settings {
        let mut settings = Settings::default();
        settings.choose_role(role);
        if !pseudo.is_empty() {
            settings.set_pseudo(pseudo).unwrap();
        }
        settings.set_cadence(cadence);
        settings
    }

    fn guesser(pseudo: &str, cadence: TallyCadence) -> GameSession {
        let mut rng = StdRng::seed_from_u64(42);
        GameSession::new(
            settings(Role::Guesser, pseudo, cadence),
            ScoreLedger::new(),
            &mut rng,
        )
    }

    fn proposer() -> GameSession {
        let mut rng = StdRng::seed_from_u64(42);
        GameSession::new(
            settings(Role::Proposer, "", TallyCadence::EveryRound),
            ScoreLedger::new(),
            &mut rng,
        )
    }

    fn fill(session: &mut GameSession, code: &Code) {
        for (slot, &color) in code.colors().iter().enumerate() {
            session.select_color(color);
            session.set_proposition_slot(slot).unwrap();
        }
    }

    fn give_feedback(session: &mut GameSession, score: Score) {
        let blacks = usize::from(score.correct());
        let whites = usize::from(score.misplaced());
        for slot in 0..blacks {
            session.cycle_feedback_slot(slot).unwrap();
        }
        for slot in blacks..blacks + whites {
            session.cycle_feedback_slot(slot).unwrap();
            session.cycle_feedback_slot(slot).unwrap();
        }
    }

    /// A code that is not the session's secret
    fn wrong_code(session: &GameSession) -> Code {
        let secret = *session.solution().unwrap();
        (0..)
            .map(|i| Code::from_index(i, 4))
            .find(|c| *c != secret)
            .unwrap()
    }

    #[test]
    fn guesser_starts_with_secret_and_full_history() {
        let session = guesser("", TallyCadence::EveryRound);
        assert_eq!(session.phase(), Phase::GuesserPlaying);
        assert_eq!(session.solution().unwrap().len(), 4);
        assert!(!session.valid_solution());
        assert_eq!(session.history().attempts_remaining(), 10);
        assert_eq!(session.selected_color(), Color::Blue);
    }

    #[test]
    fn incomplete_proposition_is_not_scored() {
        let mut session = guesser("", TallyCadence::EveryRound);
        session.select_color(Color::Red);
        session.set_proposition_slot(0).unwrap();
        session.set_proposition_slot(2).unwrap();

        assert_eq!(session.apply(), Err(SessionError::NotReady));
        assert_eq!(session.history().rounds_played(), 0);
        assert_eq!(session.proposition().get(0), Some(Color::Red));
    }

    #[test]
    fn slot_out_of_range_is_reported() {
        let mut session = guesser("", TallyCadence::EveryRound);
        assert_eq!(
            session.set_proposition_slot(4),
            Err(SessionError::SlotOutOfRange {
                slot: 4,
                nb_pawns: 4
            })
        );
    }

    #[test]
    fn guesser_scores_and_clears_proposition() {
        let mut session = guesser("", TallyCadence::EveryRound);
        let guess = wrong_code(&session);
        let expected = Score::calculate(&guess, session.solution().unwrap());

        fill(&mut session, &guess);
        assert_eq!(session.apply(), Ok(Phase::GuesserPlaying));

        let last = session.history().last_round().unwrap();
        assert_eq!(last.code, guess);
        assert_eq!(last.score, Some(expected));
        assert!(session.proposition().slots().iter().all(Option::is_none));
        assert_eq!(session.history().attempts_remaining(), 9);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut session = guesser("", TallyCadence::EveryRound);
        let miss = wrong_code(&session);
        fill(&mut session, &miss);
        session.apply().unwrap();

        let secret = *session.solution().unwrap();
        fill(&mut session, &secret);
        assert_eq!(session.apply(), Ok(Phase::Ended(Outcome::Win)));
        assert!(!session.in_game());
        assert!(session.human_won());
        assert_eq!(session.history().attempts_remaining(), 8);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut session = guesser("", TallyCadence::EveryRound);
        let miss = wrong_code(&session);

        for _ in 0..9 {
            fill(&mut session, &miss);
            assert_eq!(session.apply(), Ok(Phase::GuesserPlaying));
        }
        fill(&mut session, &miss);
        assert_eq!(session.apply(), Ok(Phase::Ended(Outcome::Loss)));
        assert_eq!(session.history().cursor(), -1);
        assert!(!session.in_game());
        assert_eq!(session.apply(), Err(SessionError::GameOver));
    }

    #[test]
    fn reset_never_touches_history() {
        let mut session = guesser("", TallyCadence::EveryRound);
        let miss = wrong_code(&session);
        fill(&mut session, &miss);
        session.apply().unwrap();

        fill(&mut session, &miss);
        session.reset();
        assert!(session.proposition().slots().iter().all(Option::is_none));
        assert_eq!(session.history().rounds_played(), 1);
        assert_eq!(session.history().last_round().unwrap().code, miss);
    }

    #[test]
    fn feedback_is_rejected_while_guessing() {
        let mut session = guesser("", TallyCadence::EveryRound);
        assert!(matches!(
            session.cycle_feedback_slot(0),
            Err(SessionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn proposer_locks_solution_and_solver_opens() {
        let mut session = proposer();
        assert_eq!(session.phase(), Phase::ProposerSettingSolution);
        assert!(!session.valid_solution());

        fill(&mut session, &code("CBBB"));
        assert_eq!(session.apply(), Ok(Phase::ProposerPlaying));
        assert!(session.valid_solution());
        assert_eq!(session.solution(), Some(&code("CBBB")));

        let pending = session.current_round().unwrap();
        assert_eq!(pending.code, code("BBBB"));
        assert_eq!(pending.score, None);
        assert_eq!(session.proposition().to_code(), Some(code("BBBB")));
        assert_eq!(session.history().rounds_played(), 0);
        assert_eq!(session.solver_index(), Some(1));
    }

    #[test]
    fn proposer_cannot_edit_machine_guess() {
        let mut session = proposer();
        fill(&mut session, &code("RGBY"));
        session.apply().unwrap();
        assert!(matches!(
            session.set_proposition_slot(0),
            Err(SessionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn proposer_feedback_drives_solver_to_win() {
        let mut session = proposer();
        let secret = code("CBBB");
        fill(&mut session, &secret);
        session.apply().unwrap();

        let mut phase = session.phase();
        while phase == Phase::ProposerPlaying {
            let guess = session.current_round().unwrap().code;
            give_feedback(&mut session, Score::calculate(&guess, &secret));
            phase = session.apply().unwrap();
        }

        assert_eq!(phase, Phase::Ended(Outcome::Win));
        assert_eq!(session.history().rounds_played(), 2);
        assert_eq!(session.history().last_round().unwrap().code, secret);
        assert_eq!(
            session.history().last_round().unwrap().score,
            Some(Score::new(4, 0))
        );
        assert!(!session.human_won());
    }

    #[test]
    fn proposer_feedback_is_taken_as_given() {
        let mut session = proposer();
        fill(&mut session, &code("RGBY"));
        session.apply().unwrap();

        // True score of BBBB against RGBY is (1, 0); the human says (0, 0)
        give_feedback(&mut session, Score::new(0, 0));
        assert_eq!(session.apply(), Ok(Phase::ProposerPlaying));

        let first = session.history().last_round().unwrap();
        assert_eq!(first.score, Some(Score::new(0, 0)));
        assert!(session.feedback().markers().iter().all(Option::is_none));
        assert_eq!(session.current_round().unwrap().code, code("CCCC"));
    }

    #[test]
    fn impossible_feedback_exhausts_solver() {
        let mut session = proposer();
        fill(&mut session, &code("RGBY"));
        session.apply().unwrap();

        give_feedback(&mut session, Score::new(3, 1));
        assert_eq!(session.apply(), Ok(Phase::Ended(Outcome::Exhausted)));
        assert!(!session.in_game());
        assert!(session.human_won());
        assert_eq!(session.history().rounds_played(), 1);
        assert!(session.current_round().is_none());
    }

    #[test]
    fn reset_feedback_keeps_machine_guess() {
        let mut session = proposer();
        fill(&mut session, &code("RGBY"));
        session.apply().unwrap();

        session.cycle_feedback_slot(0).unwrap();
        session.reset();
        assert_eq!(session.feedback().tally(), Score::default());
        assert_eq!(session.current_round().unwrap().code, code("BBBB"));
    }

    #[test]
    fn reset_proposition_keeps_machine_guess() {
        let mut session = proposer();
        fill(&mut session, &code("RGBY"));
        session.apply().unwrap();

        session.reset_proposition();
        assert_eq!(session.proposition().to_code(), Some(code("BBBB")));
    }

    #[test]
    fn every_round_cadence_tallies_each_scored_round() {
        let mut session = guesser("alice", TallyCadence::EveryRound);
        let miss = wrong_code(&session);
        for _ in 0..3 {
            fill(&mut session, &miss);
            session.apply().unwrap();
        }
        assert_eq!(session.ledger().get("alice"), Some(3));
    }

    #[test]
    fn human_win_cadence_tallies_once() {
        let mut session = guesser("alice", TallyCadence::HumanWin);
        let miss = wrong_code(&session);
        for _ in 0..3 {
            fill(&mut session, &miss);
            session.apply().unwrap();
        }
        assert_eq!(session.ledger().get("alice"), None);

        let secret = *session.solution().unwrap();
        fill(&mut session, &secret);
        session.apply().unwrap();
        assert_eq!(session.into_ledger().get("alice"), Some(1));
    }

    #[test]
    fn human_win_cadence_skips_losses() {
        let mut session = guesser("alice", TallyCadence::HumanWin);
        let miss = wrong_code(&session);
        for _ in 0..10 {
            fill(&mut session, &miss);
            session.apply().unwrap();
        }
        assert_eq!(session.phase(), Phase::Ended(Outcome::Loss));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn anonymous_player_is_not_tallied() {
        let mut session = guesser("", TallyCadence::EveryRound);
        let miss = wrong_code(&session);
        fill(&mut session, &miss);
        session.apply().unwrap();
        assert!(session.ledger().is_empty());
    }
}
