use std::time::Duration;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::{
    PieceCollisionError,
    core::{Cell, GRID_HEIGHT, GRID_WIDTH, Grid, Piece},
};

use super::{EngineConfig, EngineEvent, EngineState, GameStats, PieceGenerator};

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SPAWN_X: i32 = (GRID_WIDTH / 2 + 1) as i32;
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const TOP_ROW: i32 = (GRID_HEIGHT - 1) as i32;

/// A piece anchored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece: Piece,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    /// Absolute board coordinates of the piece's cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.piece.cells_at(self.x, self.y)
    }
}

/// The game simulation.
///
/// A single owner drives it through `&mut self` calls; nothing inside is
/// shared or locked. Player commands issued in a state that does not accept
/// them are ignored and report `false`.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    state: EngineState,
    grid: Grid,
    placement: Option<Placement>,
    next_piece: Piece,
    generator: PieceGenerator,
    lines_cleared: usize,
    stats: GameStats,
    total_ticks: u32,
    events: Vec<EngineEvent>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let generator = config
            .seed
            .map_or_else(PieceGenerator::new, PieceGenerator::with_seed);
        Self {
            config,
            state: EngineState::Idle,
            grid: Grid::EMPTY,
            placement: None,
            next_piece: Piece::EMPTY,
            generator,
            lines_cleared: 0,
            stats: GameStats::new(),
            total_ticks: 0,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece, or `None` when nothing is falling.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// The piece that spawns next. Empty until the first `start`.
    #[must_use]
    pub fn next_piece(&self) -> Piece {
        self.next_piece
    }

    /// The score: lines cleared since the last `start`.
    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Seed of the piece sequence, for reproducing a game.
    #[must_use]
    pub fn seed(&self) -> super::PieceSeed {
        self.generator.seed()
    }

    /// How often the host should call [`Engine::tick`], or `None` when the
    /// tick source should be disarmed.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.state
            .is_ticking()
            .then_some(self.config.tick_interval)
    }

    /// Game time: ticks processed since `start` times the tick interval.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.config.tick_interval.saturating_mul(self.total_ticks)
    }

    #[must_use]
    pub fn board_dimensions(&self) -> (usize, usize) {
        (GRID_WIDTH, GRID_HEIGHT)
    }

    /// Locked content of a board cell. The falling piece is not included.
    #[must_use]
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.grid.get(x, y)
    }

    /// Cells of the falling piece as `(x, y, kind)`; empty when nothing falls.
    #[must_use]
    pub fn active_piece_cells(&self) -> ArrayVec<(usize, usize, Cell), 4> {
        let Some(placement) = self.placement else {
            return ArrayVec::new();
        };
        let kind = placement.piece.kind();
        placement
            .cells()
            .map(|(x, y)| (board_index(x), board_index(y), kind))
            .collect()
    }

    /// Hands out the events queued since the previous call.
    pub fn drain_events(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain(..)
    }

    fn emit(&mut self, event: EngineEvent) {
        trace!(?event, "event queued");
        self.events.push(event);
    }

    /// Begins a new game on an empty board.
    ///
    /// Ignored while paused; from any other state the current game, if any,
    /// is discarded.
    pub fn start(&mut self) {
        if self.state.is_paused() {
            return;
        }
        self.grid.clear();
        self.placement = None;
        self.lines_cleared = 0;
        self.stats = GameStats::new();
        self.total_ticks = 0;
        self.next_piece = Piece::new(self.generator.next_kind());
        self.state = EngineState::Running;
        debug!(seed = %self.generator.seed(), "game started");
        self.emit(EngineEvent::ScoreChanged(0));
        self.spawn_piece();
    }

    /// Pauses a running game or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        match self.state {
            EngineState::Running => {
                self.state = EngineState::Paused;
                debug!("paused");
                self.emit(EngineEvent::Paused);
            }
            EngineState::Paused => {
                self.state = EngineState::Running;
                debug!("resumed");
                self.emit(EngineEvent::Resumed);
            }
            EngineState::Idle | EngineState::LineClearWait | EngineState::GameOver => {}
        }
    }

    /// Advances the game by one gravity step.
    ///
    /// After a line clear the tick spawns the next piece instead of moving.
    pub fn tick(&mut self) {
        match self.state {
            EngineState::LineClearWait => {
                self.total_ticks = self.total_ticks.saturating_add(1);
                self.spawn_piece();
            }
            EngineState::Running => {
                self.total_ticks = self.total_ticks.saturating_add(1);
                self.drop_one_row();
            }
            EngineState::Idle | EngineState::Paused | EngineState::GameOver => {}
        }
    }

    /// Anchors `piece` at `(x, y)` if all of its cells are on the board and
    /// unoccupied. On failure nothing changes.
    ///
    /// This is the only way the falling piece moves, turns or appears.
    pub fn try_move(&mut self, piece: Piece, x: i32, y: i32) -> Result<(), PieceCollisionError> {
        assert!(!piece.is_empty(), "an empty piece cannot be placed");
        if !self.grid.can_place(&piece, x, y) {
            return Err(PieceCollisionError);
        }
        self.placement = Some(Placement { piece, x, y });
        Ok(())
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.rotate(Piece::rotated_right)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.rotate(Piece::rotated_left)
    }

    /// Moves the piece down one row, locking it if it cannot move.
    ///
    /// Returns true only if the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.controlled_placement().is_none() {
            return false;
        }
        self.drop_one_row()
    }

    /// Drops the piece as far as it can fall and locks it.
    ///
    /// Returns false if the command was ignored.
    pub fn hard_drop(&mut self) -> bool {
        let Some(Placement { piece, x, mut y }) = self.controlled_placement() else {
            return false;
        };
        while self.try_move(piece, x, y - 1).is_ok() {
            y -= 1;
        }
        self.land();
        true
    }

    fn controlled_placement(&self) -> Option<Placement> {
        if !self.state.is_running() {
            return None;
        }
        self.placement
    }

    fn shift(&mut self, dx: i32) -> bool {
        let Some(Placement { piece, x, y }) = self.controlled_placement() else {
            return false;
        };
        self.try_move(piece, x + dx, y).is_ok()
    }

    fn rotate(&mut self, rotation: fn(&Piece) -> Piece) -> bool {
        let Some(Placement { piece, x, y }) = self.controlled_placement() else {
            return false;
        };
        self.try_move(rotation(&piece), x, y).is_ok()
    }

    fn drop_one_row(&mut self) -> bool {
        let Some(Placement { piece, x, y }) = self.placement else {
            return false;
        };
        if self.try_move(piece, x, y - 1).is_ok() {
            return true;
        }
        self.land();
        false
    }

    /// Writes the falling piece into the grid and clears completed rows.
    fn land(&mut self) {
        let Some(placement) = self.placement.take() else {
            return;
        };
        let kind = placement.piece.kind();
        for (x, y) in placement.cells() {
            self.grid.set(board_index(x), board_index(y), kind);
        }

        let cleared = self.grid.clear_full_rows();
        self.stats.record_lock(cleared);
        trace!(?kind, x = placement.x, y = placement.y, cleared, "piece locked");

        if cleared == 0 {
            self.spawn_piece();
            return;
        }
        self.lines_cleared += cleared;
        self.state = EngineState::LineClearWait;
        debug!(cleared, total = self.lines_cleared, "rows cleared");
        self.emit(EngineEvent::ScoreChanged(self.lines_cleared));
    }

    /// Promotes the next piece to the top of the board and draws a new next
    /// piece. Ends the game if the spawn position is blocked.
    fn spawn_piece(&mut self) {
        let piece = std::mem::replace(
            &mut self.next_piece,
            Piece::new(self.generator.next_kind()),
        );
        let y = TOP_ROW + piece.bounding_box().min_y;
        if self.try_move(piece, SPAWN_X, y).is_err() {
            self.placement = None;
            self.state = EngineState::GameOver;
            debug!(score = self.lines_cleared, "game over");
            self.emit(EngineEvent::GameOver(self.lines_cleared));
            return;
        }
        trace!(kind = ?piece.kind(), next = ?self.next_piece.kind(), "piece spawned");
        self.state = EngineState::Running;
    }
}

/// Converts a coordinate of a committed placement back into a grid index.
fn board_index(v: i32) -> usize {
    usize::try_from(v).expect("placed cells are always on the board")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceSeed;

    const SEED: PieceSeed = PieceSeed::from_bytes([7; 16]);

    fn started_engine() -> Engine {
        let mut engine = Engine::new(EngineConfig::default().with_seed(SEED));
        engine.start();
        engine.events.clear();
        engine
    }

    /// Replaces the falling piece with `piece` at the spawn column, top-aligned.
    fn force_piece(engine: &mut Engine, piece: Piece, x: i32) {
        engine.placement = None;
        let y = TOP_ROW + piece.bounding_box().min_y;
        engine.try_move(piece, x, y).unwrap();
    }

    fn occupied_count(grid: &Grid) -> usize {
        grid.rows().flatten().filter(|c| !c.is_empty()).count()
    }

    fn events(engine: &mut Engine) -> Vec<EngineEvent> {
        engine.drain_events().collect()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(SEED));
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.tick_interval(), None);
        assert!(engine.active_piece_cells().is_empty());
        assert!(engine.next_piece().is_empty());
        assert_eq!(engine.board_dimensions(), (10, 22));

        engine.tick();
        assert!(!engine.move_left());
        engine.toggle_pause();
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_start_spawns_piece_at_top() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(SEED));
        engine.start();

        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(events(&mut engine), [EngineEvent::ScoreChanged(0)]);
        assert_eq!(engine.tick_interval(), Some(Duration::from_millis(300)));
        assert!(!engine.next_piece().is_empty());

        let placement = engine.placement().unwrap();
        assert_eq!(placement.x, 6);
        let cells = engine.active_piece_cells();
        assert_eq!(cells.len(), 4);
        let top = cells.iter().map(|&(_, y, _)| y).max().unwrap();
        assert_eq!(top, GRID_HEIGHT - 1);
        assert!(cells.iter().all(|&(_, _, k)| k == placement.piece.kind()));
    }

    #[test]
    fn test_spawn_aligns_every_kind_with_top_row() {
        for kind in Cell::PIECE_KINDS {
            let mut engine = started_engine();
            engine.placement = None;
            engine.next_piece = Piece::new(kind);
            engine.spawn_piece();
            assert!(engine.state().is_running(), "{kind:?}");
            let top = engine
                .active_piece_cells()
                .iter()
                .map(|&(_, y, _)| y)
                .max()
                .unwrap();
            assert_eq!(top, GRID_HEIGHT - 1, "{kind:?}");
        }
    }

    #[test]
    fn test_try_move_out_of_bounds_is_rejected_without_change() {
        let mut engine = started_engine();
        let before = engine.placement();
        let grid_before = engine.grid().clone();
        let piece = Piece::new(Cell::T);

        for (x, y) in [(-1, 10), (0, 10), (9, 10), (10, 10), (5, 0), (5, -3), (5, 22), (5, 40)] {
            assert_eq!(engine.try_move(piece, x, y), Err(PieceCollisionError), "({x}, {y})");
            assert_eq!(engine.placement(), before);
            assert_eq!(engine.grid(), &grid_before);
        }
        assert!(engine.try_move(piece, 5, 10).is_ok());
    }

    #[test]
    fn test_try_move_onto_occupied_cell_is_rejected() {
        let mut engine = started_engine();
        engine.grid.set(5, 5, Cell::Z);
        let before = engine.placement();
        let square = Piece::new(Cell::Square);
        // Square cells: (x, y), (x + 1, y), (x, y - 1), (x + 1, y - 1).
        for (x, y) in [(5, 5), (4, 5), (5, 6), (4, 6)] {
            assert!(engine.try_move(square, x, y).is_err(), "({x}, {y})");
            assert_eq!(engine.placement(), before);
        }
        assert!(engine.try_move(square, 6, 6).is_ok());
    }

    #[test]
    fn test_moves_are_bounded_by_walls() {
        let mut engine = started_engine();
        force_piece(&mut engine, Piece::new(Cell::Square), 6);
        let mut moves = 0;
        while engine.move_left() {
            moves += 1;
        }
        assert_eq!(moves, 6);
        assert_eq!(engine.placement().unwrap().x, 0);

        let mut moves = 0;
        while engine.move_right() {
            moves += 1;
        }
        assert_eq!(moves, 8);
        assert_eq!(engine.placement().unwrap().x, 8);
    }

    #[test]
    fn test_blocked_rotation_keeps_original_piece() {
        let mut engine = started_engine();
        // Horizontal line flush against the floor cannot turn upright in place.
        let line = Piece::new(Cell::Line).rotated_right();
        engine.placement = None;
        engine.try_move(line, 5, 0).unwrap();
        let before = engine.placement();

        assert!(!engine.rotate_cw());
        assert_eq!(engine.placement(), before);
        assert!(!engine.rotate_ccw());
        assert_eq!(engine.placement(), before);
    }

    #[test]
    fn test_rotation_in_open_space() {
        let mut engine = started_engine();
        force_piece(&mut engine, Piece::new(Cell::T), 5);
        engine.soft_drop();
        engine.soft_drop();
        let before = engine.placement().unwrap();

        assert!(engine.rotate_cw());
        let after = engine.placement().unwrap();
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(after.piece, before.piece.rotated_right());

        assert!(engine.rotate_ccw());
        assert_eq!(engine.placement().unwrap(), before);
    }

    #[test]
    fn test_square_rotation_is_accepted_and_unchanged() {
        let mut engine = started_engine();
        force_piece(&mut engine, Piece::new(Cell::Square), 6);
        let before = engine.placement();
        assert!(engine.rotate_cw());
        assert_eq!(engine.placement(), before);
    }

    #[test]
    fn test_soft_drop_and_tick_move_one_row() {
        let mut engine = started_engine();
        let y = engine.placement().unwrap().y;
        assert!(engine.soft_drop());
        assert_eq!(engine.placement().unwrap().y, y - 1);
        engine.tick();
        assert_eq!(engine.placement().unwrap().y, y - 2);
        assert_eq!(engine.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn test_gravity_lands_piece_and_spawns_next() {
        let mut engine = started_engine();
        force_piece(&mut engine, Piece::new(Cell::Square), 0);
        let next = engine.next_piece();

        // The square needs 20 ticks to reach the floor and one more to lock.
        for _ in 0..20 {
            engine.tick();
        }
        assert_eq!(engine.placement().unwrap().y, 1);
        engine.tick();

        assert_eq!(engine.cell_at(0, 0), Cell::Square);
        assert_eq!(engine.cell_at(1, 1), Cell::Square);
        assert_eq!(occupied_count(engine.grid()), 4);
        assert_eq!(engine.placement().unwrap().piece, next);
        assert_eq!(engine.stats().completed_pieces(), 1);
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_hard_drop_reaches_lowest_legal_row() {
        let mut engine = started_engine();
        engine.grid.set(6, 3, Cell::Z);
        force_piece(&mut engine, Piece::new(Cell::Line), 6);
        assert!(engine.hard_drop());
        // The upright line rests on the block at row 3.
        for y in 4..8 {
            assert_eq!(engine.cell_at(6, y), Cell::Line, "row {y}");
        }
        assert_eq!(engine.cell_at(6, 8), Cell::Empty);
    }

    #[test]
    fn test_stacked_line_drops_never_overlap() {
        let mut engine = started_engine();
        let line = Piece::new(Cell::Line).rotated_right();
        for i in 0..10 {
            force_piece(&mut engine, line, SPAWN_X);
            assert!(engine.hard_drop());
            assert_eq!(engine.state(), EngineState::Running);
            for x in 4..8 {
                assert_eq!(engine.cell_at(x, i), Cell::Line, "({x}, {i})");
                assert_eq!(engine.cell_at(x, i + 1), Cell::Empty, "({x}, {})", i + 1);
            }
            assert_eq!(occupied_count(engine.grid()), 4 * (i + 1));
        }
        assert_eq!(engine.lines_cleared(), 0);
    }

    #[test]
    fn test_single_row_clear() {
        let mut engine = started_engine();
        for x in 0..9 {
            engine.grid.set(x, 0, Cell::Z);
        }
        engine.grid.set(2, 1, Cell::S);
        force_piece(&mut engine, Piece::new(Cell::Line), 9);

        assert!(engine.hard_drop());

        assert_eq!(engine.lines_cleared(), 1);
        assert_eq!(engine.state(), EngineState::LineClearWait);
        assert!(engine.placement().is_none());
        assert!(engine.active_piece_cells().is_empty());
        assert_eq!(events(&mut engine), [EngineEvent::ScoreChanged(1)]);

        // Former row 1 is now row 0; the line's three upper cells moved down too.
        assert_eq!(engine.cell_at(2, 0), Cell::S);
        assert_eq!(engine.cell_at(9, 0), Cell::Line);
        assert_eq!(engine.cell_at(9, 2), Cell::Line);
        assert_eq!(engine.cell_at(9, 3), Cell::Empty);
        assert_eq!(occupied_count(engine.grid()), 4);
        for x in 0..GRID_WIDTH {
            assert_eq!(engine.cell_at(x, GRID_HEIGHT - 1), Cell::Empty);
        }
        assert_eq!(engine.stats().line_cleared_counter()[1], 1);
    }

    #[test]
    fn test_multi_row_clear_counts_every_row() {
        let mut engine = started_engine();
        for y in 0..4 {
            for x in 0..9 {
                engine.grid.set(x, y, Cell::T);
            }
        }
        engine.grid.set(0, 4, Cell::L);
        force_piece(&mut engine, Piece::new(Cell::Line), 9);
        engine.hard_drop();

        assert_eq!(engine.lines_cleared(), 4);
        assert_eq!(events(&mut engine), [EngineEvent::ScoreChanged(4)]);
        assert_eq!(engine.cell_at(0, 0), Cell::L);
        assert_eq!(occupied_count(engine.grid()), 1);
    }

    #[test]
    fn test_line_clear_wait_ignores_commands_until_tick() {
        let mut engine = started_engine();
        for x in 0..9 {
            engine.grid.set(x, 0, Cell::Z);
        }
        force_piece(&mut engine, Piece::new(Cell::Line), 9);
        engine.hard_drop();
        engine.events.clear();
        assert_eq!(engine.state(), EngineState::LineClearWait);
        assert!(engine.tick_interval().is_some());

        let next = engine.next_piece();
        assert!(!engine.move_left());
        assert!(!engine.rotate_cw());
        assert!(!engine.soft_drop());
        assert!(!engine.hard_drop());
        engine.toggle_pause();
        assert_eq!(engine.state(), EngineState::LineClearWait);
        assert!(events(&mut engine).is_empty());

        engine.tick();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.placement().unwrap().piece, next);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut engine = started_engine();
        let before = engine.placement();

        engine.toggle_pause();
        assert_eq!(engine.state(), EngineState::Paused);
        assert_eq!(engine.tick_interval(), None);
        assert_eq!(events(&mut engine), [EngineEvent::Paused]);

        engine.tick();
        assert!(!engine.move_left());
        assert!(!engine.move_right());
        assert!(!engine.rotate_cw());
        assert!(!engine.soft_drop());
        assert!(!engine.hard_drop());
        engine.start();
        assert_eq!(engine.placement(), before);
        assert_eq!(engine.state(), EngineState::Paused);

        engine.toggle_pause();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(events(&mut engine), [EngineEvent::Resumed]);
        assert_eq!(engine.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut engine = started_engine();
        engine.placement = None;
        // Solid except for column 0, so no row clears.
        for y in 0..GRID_HEIGHT {
            for x in 1..GRID_WIDTH {
                engine.grid.set(x, y, Cell::T);
            }
        }
        engine.spawn_piece();

        assert_eq!(engine.state(), EngineState::GameOver);
        assert_eq!(engine.tick_interval(), None);
        assert!(engine.active_piece_cells().is_empty());
        assert_eq!(events(&mut engine), [EngineEvent::GameOver(0)]);

        engine.tick();
        engine.toggle_pause();
        assert!(!engine.hard_drop());
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_piece_locked_at_spawn_tops_out() {
        let mut engine = started_engine();
        for y in 0..GRID_HEIGHT - 2 {
            for x in 1..GRID_WIDTH {
                engine.grid.set(x, y, Cell::S);
            }
        }
        // Every kind spawns over (6, 20) and (6, 21), which the square keeps.
        force_piece(&mut engine, Piece::new(Cell::Square), SPAWN_X);
        assert!(engine.hard_drop());

        assert_eq!(engine.state(), EngineState::GameOver);
        assert_eq!(events(&mut engine), [EngineEvent::GameOver(0)]);
        assert_eq!(engine.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_game_runs_to_game_over_exactly_once() {
        let mut engine = started_engine();
        let mut game_overs = 0;
        for _ in 0..10_000 {
            if engine.tick_interval().is_none() {
                break;
            }
            engine.hard_drop();
            engine.tick();
            game_overs += engine.drain_events().filter(|e| e.is_game_over()).count();
        }
        assert_eq!(engine.state(), EngineState::GameOver);
        assert_eq!(game_overs, 1);
        for _ in 0..10 {
            engine.tick();
        }
        assert!(events(&mut engine).is_empty());
    }

    #[test]
    fn test_restart_after_game_over_resets() {
        let mut engine = started_engine();
        while engine.tick_interval().is_some() {
            engine.hard_drop();
            engine.tick();
        }
        engine.events.clear();

        engine.start();
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.lines_cleared(), 0);
        assert_eq!(engine.stats(), &GameStats::new());
        assert_eq!(occupied_count(engine.grid()), 0);
        assert_eq!(events(&mut engine), [EngineEvent::ScoreChanged(0)]);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = || {
            let mut engine = Engine::new(EngineConfig::default().with_seed(SEED));
            engine.start();
            for i in 0..200 {
                if i % 3 == 0 {
                    engine.rotate_cw();
                }
                if i % 5 == 0 {
                    engine.move_left();
                }
                engine.tick();
            }
            (engine.grid().clone(), engine.placement(), engine.lines_cleared())
        };
        assert_eq!(play(), play());
    }

    #[test]
    #[should_panic(expected = "x out of range")]
    fn test_cell_at_out_of_range_panics() {
        let _ = started_engine().cell_at(GRID_WIDTH, 0);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Engine>();
    }
}
