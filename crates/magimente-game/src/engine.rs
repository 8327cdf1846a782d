//! Engine orchestration: sessions, placements, history, fetch protocol.

use std::fmt;

use log::{debug, info};
use magimente_core::{Board, Level, Operation, Position, Puzzle};

use crate::{
    FeedbackSink, Game, GameEvent, History, LineAggregates, NullSink, PuzzleSource, SourceError,
    aggregate::LineHits,
};

/// Handle for one outstanding puzzle fetch.
///
/// Tickets are handed out by [`Engine::begin_fetch`] and are strictly
/// ordered: only the most recently issued ticket can still apply a
/// result (last-request-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Result of completing a fetch against the engine.
#[derive(Debug, derive_more::IsVariant)]
pub enum FetchOutcome {
    /// The puzzle was applied and a fresh session started.
    Applied,
    /// A newer fetch superseded this ticket; the result was discarded
    /// and engine state is untouched.
    Superseded,
    /// The source failed; the engine keeps its previous state.
    Failed(SourceError),
}

/// The state of one game session.
#[derive(Debug)]
struct Session {
    puzzle: Puzzle,
    history: History,
    aggregates: LineAggregates,
    /// Edge-detection memory for line-completion cues. Transient: not
    /// part of history, cleared on new game and reset.
    prev_hits: LineHits,
    is_won: bool,
}

impl Session {
    fn new(puzzle: Puzzle) -> Self {
        let game = Game::new(&puzzle);
        let aggregates = LineAggregates::compute(game.board(), puzzle.operation());
        Self {
            puzzle,
            history: History::new(game),
            aggregates,
            prev_hits: LineHits::default(),
            is_won: false,
        }
    }
}

/// Read-only snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, Copy)]
pub struct EngineView<'a> {
    /// The current board.
    pub board: &'a Board,
    /// Numbers still available to place.
    pub bank: &'a [f64],
    /// The common row/column target value.
    pub target_value: f64,
    /// The operation the puzzle is played under.
    pub operation: Operation,
    /// The difficulty level of the current puzzle.
    pub level: Level,
    /// Row aggregates, `None` for incomplete rows.
    pub row_aggregates: &'a [Option<f64>],
    /// Column aggregates, `None` for incomplete columns.
    pub col_aggregates: &'a [Option<f64>],
    /// Whether the session has been won (latched).
    pub is_won: bool,
    /// Whether every cell holds a value.
    pub is_board_full: bool,
    /// Whether undo is currently possible.
    pub can_undo: bool,
    /// Whether redo is currently possible.
    pub can_redo: bool,
    /// Whether a puzzle fetch is outstanding.
    pub is_loading: bool,
}

/// The game engine: composition root over board, bank, aggregates, win
/// detection, and history.
///
/// All operations are synchronous and run to completion; the only
/// asynchronous boundary is the puzzle fetch, handled through the
/// [`begin_fetch`](Engine::begin_fetch) /
/// [`complete_fetch`](Engine::complete_fetch) ticket protocol.
///
/// # Examples
///
/// ```
/// use magimente_core::{Level, Operation, Puzzle};
/// use magimente_game::{Engine, PuzzleSource, SourceError};
///
/// struct OnePuzzle(Puzzle);
///
/// impl PuzzleSource for OnePuzzle {
///     fn fetch(&mut self, _: Level, _: Operation) -> Result<Puzzle, SourceError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let puzzle = Puzzle::new(
///     "e1_add",
///     vec![
///         vec![Some(8.0), None, Some(6.0)],
///         vec![None, Some(5.0), None],
///         vec![Some(4.0), None, Some(2.0)],
///     ],
///     15.0,
///     Operation::Add,
///     Level::Easy,
///     vec![1.0, 3.0, 7.0, 9.0],
/// )
/// .unwrap();
///
/// let mut engine = Engine::new();
/// engine
///     .start_new_game(&mut OnePuzzle(puzzle), Level::Easy, Operation::Add)
///     .unwrap();
/// assert!(engine.place(0, 1, "1"));
/// assert!(!engine.place(0, 1, "3")); // occupied: silent no-op
/// assert!(engine.undo());
/// ```
pub struct Engine {
    sink: Box<dyn FeedbackSink>,
    session: Option<Session>,
    next_ticket: u64,
    pending_ticket: Option<u64>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("session", &self.session)
            .field("pending_ticket", &self.pending_ticket)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine that discards feedback events.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }

    /// Creates an engine delivering feedback events to `sink`.
    #[must_use]
    pub fn with_sink(sink: impl FeedbackSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            session: None,
            next_ticket: 0,
            pending_ticket: None,
        }
    }

    /// Returns the puzzle of the active session, if any.
    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.session.as_ref().map(|session| &session.puzzle)
    }

    /// Returns whether a puzzle fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_ticket.is_some()
    }

    /// Returns the read-only view for the presentation layer, or `None`
    /// before the first game has started.
    #[must_use]
    pub fn view(&self) -> Option<EngineView<'_>> {
        let session = self.session.as_ref()?;
        let game = session.history.current();
        Some(EngineView {
            board: game.board(),
            bank: game.bank().numbers(),
            target_value: session.puzzle.target_value(),
            operation: session.puzzle.operation(),
            level: session.puzzle.level(),
            row_aggregates: session.aggregates.rows(),
            col_aggregates: session.aggregates.cols(),
            is_won: session.is_won,
            is_board_full: game.is_board_full(),
            can_undo: session.history.can_undo(),
            can_redo: session.history.can_redo(),
            is_loading: self.is_loading(),
        })
    }

    /// Starts a new game from a synchronous source.
    ///
    /// On failure the engine keeps its previous session unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the [`SourceError`] from the source.
    pub fn start_new_game(
        &mut self,
        source: &mut dyn PuzzleSource,
        level: Level,
        operation: Operation,
    ) -> Result<(), SourceError> {
        let ticket = self.begin_fetch();
        match self.complete_fetch(ticket, source.fetch(level, operation)) {
            FetchOutcome::Failed(err) => Err(err),
            // Nothing can supersede the ticket on this synchronous path.
            FetchOutcome::Applied | FetchOutcome::Superseded => Ok(()),
        }
    }

    /// Registers an outstanding fetch and returns its ticket.
    ///
    /// Issuing a new ticket supersedes every earlier one, so a slow
    /// fetch can never apply stale results over a newer request.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        self.pending_ticket = Some(self.next_ticket);
        FetchTicket(self.next_ticket)
    }

    /// Completes an outstanding fetch.
    ///
    /// A superseded ticket's result is discarded without touching any
    /// state; a failed fetch clears the loading flag but keeps the
    /// previous session.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Puzzle, SourceError>,
    ) -> FetchOutcome {
        if self.pending_ticket != Some(ticket.0) {
            debug!("discarding superseded fetch result (ticket {})", ticket.0);
            return FetchOutcome::Superseded;
        }
        self.pending_ticket = None;

        match result {
            Ok(puzzle) => {
                info!(
                    "starting new game: puzzle={} level={} operation={}",
                    puzzle.id(),
                    puzzle.level(),
                    puzzle.operation()
                );
                self.apply_puzzle(puzzle);
                FetchOutcome::Applied
            }
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    /// Re-initializes the current puzzle without re-fetching.
    ///
    /// Returns `false` when no session is active.
    pub fn reset(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        info!("resetting puzzle {}", session.puzzle.id());
        self.apply_puzzle(session.puzzle);
        true
    }

    /// Handles a raw placement payload, e.g. a drag-and-drop item.
    ///
    /// The payload is parsed as a number; unparsable or non-finite
    /// payloads are silent no-ops, as are all placement rejections.
    /// Returns whether a placement happened.
    pub fn place(&mut self, row: usize, col: usize, payload: &str) -> bool {
        let Ok(value) = payload.trim().parse::<f64>() else {
            debug!("ignoring non-numeric placement payload {payload:?}");
            return false;
        };
        if !value.is_finite() {
            debug!("ignoring non-finite placement payload {payload:?}");
            return false;
        }
        self.place_number(Position::new(row, col), value)
    }

    /// Places an already-parsed number. Rejections are silent no-ops.
    ///
    /// Returns whether a placement happened.
    pub fn place_number(&mut self, pos: Position, value: f64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let mut game = session.history.current().clone();
        if let Err(rejection) = game.place(pos, value) {
            debug!("placement of {value} at {pos} rejected: {rejection}");
            return false;
        }

        session.history.commit(game);
        self.sink.notify(GameEvent::Placed);
        self.refresh();
        true
    }

    /// Returns whether undo is currently possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.history.can_undo())
    }

    /// Moves one step back in history. Returns whether anything moved.
    pub fn undo(&mut self) -> bool {
        let moved = self
            .session
            .as_mut()
            .is_some_and(|session| session.history.undo());
        if moved {
            self.refresh();
        }
        moved
    }

    /// Returns whether redo is currently possible.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.history.can_redo())
    }

    /// Moves one step forward in history. Returns whether anything moved.
    pub fn redo(&mut self) -> bool {
        let moved = self
            .session
            .as_mut()
            .is_some_and(|session| session.history.redo());
        if moved {
            self.refresh();
        }
        moved
    }

    /// Returns whether the current session has been won.
    ///
    /// Monotonic within a session: latched on the first win and cleared
    /// only by a new game or reset. The latch suppresses duplicate
    /// events; it never blocks input.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_won)
    }

    fn apply_puzzle(&mut self, puzzle: Puzzle) {
        self.session = Some(Session::new(puzzle));
        // Lines already complete in the puzzle data fire their cues once
        // at session start, matching the empty edge-detection memory.
        self.refresh();
    }

    /// Recomputes the derived state and emits edge-triggered cues.
    fn refresh(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let game = session.history.current();
        let target = session.puzzle.target_value();
        session.aggregates = LineAggregates::compute(game.board(), session.puzzle.operation());
        let hits = session.aggregates.target_hits(target);

        if !session.is_won {
            for line in hits.newly_hit(&session.prev_hits) {
                self.sink.notify(GameEvent::LineCompleted(line));
            }
            // Only a full board can be solved; skipping the check
            // otherwise is an optimization, not a correctness need.
            if game.is_board_full() && session.aggregates.is_solved(target) {
                session.is_won = true;
                self.sink.notify(GameEvent::Won);
            }
        }

        session.prev_hits = hits;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use magimente_core::{CellState, Level, Operation};

    use super::*;
    use crate::Line;

    /// Source double yielding a fixed puzzle, optionally failing first.
    struct StubSource {
        puzzle: Puzzle,
        fail: bool,
    }

    impl StubSource {
        fn new(puzzle: Puzzle) -> Self {
            Self {
                puzzle,
                fail: false,
            }
        }
    }

    impl PuzzleSource for StubSource {
        fn fetch(&mut self, _: Level, _: Operation) -> Result<Puzzle, SourceError> {
            if self.fail {
                return Err(SourceError::Unavailable {
                    reason: "stub outage".into(),
                });
            }
            Ok(self.puzzle.clone())
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

    impl Recorder {
        fn events(&self) -> Vec<GameEvent> {
            self.0.borrow().clone()
        }

        fn clear(&self) {
            self.0.borrow_mut().clear();
        }
    }

    impl FeedbackSink for Recorder {
        fn notify(&mut self, event: GameEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    fn easy_add_puzzle() -> Puzzle {
        Puzzle::new(
            "e1_add",
            vec![
                vec![Some(8.0), None, Some(6.0)],
                vec![None, Some(5.0), None],
                vec![Some(4.0), None, Some(2.0)],
            ],
            15.0,
            Operation::Add,
            Level::Easy,
            vec![1.0, 3.0, 7.0, 9.0],
        )
        .unwrap()
    }

    fn engine_with_game() -> (Engine, Recorder) {
        let recorder = Recorder::default();
        let mut engine = Engine::with_sink(recorder.clone());
        engine
            .start_new_game(
                &mut StubSource::new(easy_add_puzzle()),
                Level::Easy,
                Operation::Add,
            )
            .unwrap();
        recorder.clear();
        (engine, recorder)
    }

    /// Solves the easy add puzzle: 8 1 6 / 3 5 7 / 4 9 2.
    fn solve(engine: &mut Engine) {
        assert!(engine.place(0, 1, "1"));
        assert!(engine.place(1, 0, "3"));
        assert!(engine.place(1, 2, "7"));
        assert!(engine.place(2, 1, "9"));
    }

    #[test]
    fn view_reflects_initial_session() {
        let (engine, _) = engine_with_game();
        let view = engine.view().unwrap();

        assert_eq!(view.target_value, 15.0);
        assert_eq!(view.operation, Operation::Add);
        assert_eq!(view.bank, &[1.0, 3.0, 7.0, 9.0]);
        assert_eq!(view.row_aggregates, &[None, None, None]);
        assert!(!view.is_won);
        assert!(!view.is_board_full);
        assert!(!view.can_undo);
        assert!(!view.can_redo);
        assert!(!view.is_loading);
    }

    #[test]
    fn placement_emits_placed_and_line_cues() {
        let (mut engine, recorder) = engine_with_game();

        assert!(engine.place(0, 1, "1"));
        // Row 0 is now 8+1+6 = 15; column 1 is still incomplete.
        assert_eq!(
            recorder.events(),
            vec![GameEvent::Placed, GameEvent::LineCompleted(Line::Row(0))]
        );
    }

    #[test]
    fn win_fires_once_and_latches() {
        let (mut engine, recorder) = engine_with_game();

        solve(&mut engine);

        let events = recorder.events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Won).count(),
            1
        );
        assert!(engine.is_won());
        assert!(engine.view().unwrap().is_board_full);

        // Undo/redo across the winning placement emits no further wins.
        recorder.clear();
        assert!(engine.undo());
        assert!(engine.redo());
        assert!(engine.is_won());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn garbage_payloads_are_silent_noops() {
        let (mut engine, recorder) = engine_with_game();

        assert!(!engine.place(0, 1, "banana"));
        assert!(!engine.place(0, 1, "NaN"));
        assert!(!engine.place(0, 1, "inf"));
        assert!(!engine.place(0, 1, "5")); // not in bank
        assert!(!engine.place(0, 0, "1")); // fixed cell

        assert!(recorder.events().is_empty());
        assert_eq!(engine.view().unwrap().bank, &[1.0, 3.0, 7.0, 9.0]);
    }

    #[test]
    fn undo_redo_roundtrip_restores_state() {
        let (mut engine, _) = engine_with_game();

        assert!(engine.place(0, 1, "1"));
        let after_place: Vec<f64> = engine.view().unwrap().bank.to_vec();

        assert!(engine.undo());
        assert_eq!(engine.view().unwrap().bank, &[1.0, 3.0, 7.0, 9.0]);
        assert_eq!(
            engine.view().unwrap().board.cell(Position::new(0, 1)),
            Some(&CellState::Empty)
        );

        assert!(engine.redo());
        assert_eq!(engine.view().unwrap().bank, after_place.as_slice());
        assert_eq!(
            engine.view().unwrap().board.cell(Position::new(0, 1)),
            Some(&CellState::Filled(1.0))
        );
    }

    #[test]
    fn commit_after_undo_disables_redo() {
        let (mut engine, _) = engine_with_game();

        assert!(engine.place(0, 1, "1"));
        assert!(engine.place(1, 0, "3"));
        assert!(engine.undo());
        assert!(engine.can_redo());

        assert!(engine.place(1, 0, "7"));
        assert!(!engine.can_redo());
    }

    #[test]
    fn reset_restores_initial_state_and_clears_win() {
        let (mut engine, recorder) = engine_with_game();

        solve(&mut engine);
        assert!(engine.is_won());

        recorder.clear();
        assert!(engine.reset());
        assert!(!engine.is_won());
        let view = engine.view().unwrap();
        assert_eq!(view.bank, &[1.0, 3.0, 7.0, 9.0]);
        assert!(!view.can_undo);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn reset_without_session_is_noop() {
        let mut engine = Engine::new();
        assert!(!engine.reset());
        assert!(engine.view().is_none());
    }

    #[test]
    fn failed_fetch_keeps_previous_session() {
        let (mut engine, _) = engine_with_game();
        assert!(engine.place(0, 1, "1"));

        let mut source = StubSource::new(easy_add_puzzle());
        source.fail = true;
        let err = engine
            .start_new_game(&mut source, Level::Easy, Operation::Add)
            .unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));

        // Previous session untouched, including its history.
        assert!(!engine.is_loading());
        assert!(engine.can_undo());
        assert_eq!(engine.view().unwrap().bank, &[3.0, 7.0, 9.0]);
    }

    #[test]
    fn stale_fetch_completion_is_discarded() {
        let (mut engine, _) = engine_with_game();
        assert!(engine.place(0, 1, "1"));

        let stale = engine.begin_fetch();
        let fresh = engine.begin_fetch();
        assert!(engine.is_loading());

        // The superseded completion must not touch the session.
        let outcome = engine.complete_fetch(stale, Ok(easy_add_puzzle()));
        assert!(outcome.is_superseded());
        assert!(engine.is_loading());
        assert!(engine.can_undo());

        let outcome = engine.complete_fetch(fresh, Ok(easy_add_puzzle()));
        assert!(outcome.is_applied());
        assert!(!engine.is_loading());
        assert!(!engine.can_undo());
    }

    #[test]
    fn won_board_still_accepts_structural_input() {
        // The latch suppresses events, not input: undo after winning and
        // place a different number.
        let (mut engine, recorder) = engine_with_game();
        solve(&mut engine);

        assert!(engine.undo());
        recorder.clear();
        assert!(engine.place(2, 1, "9"));
        assert_eq!(recorder.events(), vec![GameEvent::Placed]);
        assert!(engine.is_won());
    }
}
