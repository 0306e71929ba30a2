//! Game state module - the Tetris engine
//!
//! Ties together the board, the active piece, the piece picker, scoring and
//! gravity timing. All mutation goes through `&mut self`; the host drives it
//! with keyboard actions and a fixed-step [`GameState::tick`].

use crate::board::{Board, LockResult};
use crate::rng::PiecePicker;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece in spawn orientation, horizontally centred on row 0
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: ((BOARD_WIDTH - shape.cols()) / 2) as i8,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Would this piece collide with the board where it stands?
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// What a single soft drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece locked, rows were cleared (possibly none) and a new piece spawned
    Locked { lines_cleared: u8 },
    /// The piece locked above row 0: the game is over
    ToppedOut,
}

/// Emitted on every lock, consumed by the host for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u8,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    picker: PiecePicker,
    score: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    status: GameStatus,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game, ready to play, with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a pre-filled board
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut picker = PiecePicker::new(seed);
        let kind = picker.next_kind();
        let mut state = Self {
            board,
            active: Piece::new(kind),
            picker,
            score: 0,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            status: GameStatus::Playing,
            last_event: None,
        };
        state.spawn(kind);
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared since the last reset
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup.
    ///
    /// Editing cells under the active piece breaks the no-overlap invariant
    /// until the next [`GameState::spawn`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Put a fresh piece of `kind` at its spawn position.
    ///
    /// If the spawn cells are taken the piece is lifted until it no longer
    /// collides, at worst entirely above the board. Such a piece locks above
    /// row 0 on its first downward collision, which ends the game.
    pub fn spawn(&mut self, kind: PieceKind) {
        let mut piece = Piece::new(kind);
        let top = -(piece.shape.rows() as i8);
        while piece.y > top && piece.collides(&self.board) {
            piece.y -= 1;
        }
        self.active = piece;
    }

    fn spawn_random(&mut self) {
        let kind = self.picker.next_kind();
        self.spawn(kind);
    }

    /// Shift the active piece horizontally; no-op if the target collides
    pub fn move_piece(&mut self, dx: i8) -> bool {
        let piece = self.active;
        if self.board.collides(&piece.shape, piece.x + dx, piece.y) {
            return false;
        }
        self.active.x += dx;
        true
    }

    /// Rotate the active piece 90° clockwise in place; no-op if that collides
    pub fn rotate(&mut self) -> bool {
        let piece = self.active;
        let rotated = piece.shape.rotated_cw();
        if self.board.collides(&rotated, piece.x, piece.y) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Move down one row, or lock the piece if it cannot move
    pub fn soft_drop(&mut self) -> DropOutcome {
        let piece = self.active;
        if !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            self.active.y += 1;
            return DropOutcome::Moved;
        }
        self.lock_active()
    }

    fn lock_active(&mut self) -> DropOutcome {
        let piece = self.active;
        if self.board.lock(&piece.shape, piece.x, piece.y) == LockResult::AboveTop {
            self.status = GameStatus::GameOver;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                score: self.score,
                drop_interval_ms: self.drop_interval_ms,
                topped_out: true,
            });
            return DropOutcome::ToppedOut;
        }

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score += LINE_CLEAR_POINTS * cleared;
            self.lines += cleared;
            self.drop_interval_ms = self
                .drop_interval_ms
                .saturating_sub(DROP_STEP_MS)
                .max(DROP_INTERVAL_MIN_MS);
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u8,
            score: self.score,
            drop_interval_ms: self.drop_interval_ms,
            topped_out: false,
        });

        self.spawn_random();
        DropOutcome::Locked {
            lines_cleared: cleared as u8,
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Empty board, zero score, base gravity and a fresh random piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.status = GameStatus::Playing;
        self.last_event = None;
        self.spawn_random();
    }

    /// Pause or resume. Has no effect once the game is over.
    pub fn set_paused(&mut self, paused: bool) {
        if self.status == GameStatus::GameOver {
            return;
        }
        self.status = if paused {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        };
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Once the time accumulated while playing exceeds the drop interval,
    /// exactly one soft drop runs and the clock restarts. Paused and finished
    /// games do not accumulate time.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if self.status != GameStatus::Playing {
            return None;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms {
            self.drop_timer_ms = 0;
            return Some(self.soft_drop());
        }

        None
    }

    /// Apply a keyboard action.
    ///
    /// Movement, rotation and soft drop only act while playing. Pause toggles
    /// between playing and paused; restart always starts over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::Pause => {
                if self.game_over() {
                    return false;
                }
                self.set_paused(!self.paused());
                true
            }
            _ if self.status != GameStatus::Playing => false,
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(kind: PieceKind, board: Board) -> GameState {
        let mut state = GameState::with_board(1, board);
        state.spawn(kind);
        state
    }

    #[test]
    fn test_new_game_is_playing() {
        let state = GameState::new(12345);

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS);
        assert_eq!(state.active().y, 0);
        assert!(!state.active().collides(state.board()));
    }

    #[test]
    fn test_spawn_positions_are_centred() {
        assert_eq!(Piece::new(PieceKind::I).x, 3);
        assert_eq!(Piece::new(PieceKind::O).x, 4);
        assert_eq!(Piece::new(PieceKind::T).x, 3);
    }

    #[test]
    fn test_move_blocked_by_locked_cells() {
        let mut board = Board::new();
        board.set(2, 0, true);
        let mut state = game_with(PieceKind::I, board);

        assert!(!state.move_piece(-1));
        assert_eq!(state.active().x, 3);
        assert!(state.move_piece(1));
        assert_eq!(state.active().x, 4);
    }

    #[test]
    fn test_rotate_without_kick_keeps_orientation() {
        let mut state = game_with(PieceKind::I, Board::new());
        // Vertical I from (3, 0) spans rows 0..=3; block row 2.
        state.board_mut().set(3, 2, true);
        let before = state.active();

        assert!(!state.rotate());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_rotate_applies_when_free() {
        let mut state = game_with(PieceKind::I, Board::new());
        assert!(state.rotate());
        assert_eq!(state.active().shape.rows(), 4);
        assert_eq!((state.active().x, state.active().y), (3, 0));
    }

    #[test]
    fn test_rotate_at_right_wall_is_rejected() {
        let mut state = game_with(PieceKind::I, Board::new());
        assert!(state.rotate());
        for _ in 0..6 {
            state.move_piece(1);
        }
        assert_eq!(state.active().x, 9);

        // Horizontal again would need columns 9..=12.
        assert!(!state.rotate());
        assert_eq!(state.active().shape.cols(), 1);
    }

    #[test]
    fn test_lock_spawns_next_piece() {
        let mut state = game_with(PieceKind::O, Board::new());
        for _ in 0..18 {
            assert_eq!(state.soft_drop(), DropOutcome::Moved);
        }
        assert_eq!(state.soft_drop(), DropOutcome::Locked { lines_cleared: 0 });
        assert_eq!(state.board().filled(), 4);
        assert_eq!(state.active().y, 0);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.topped_out);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_double_clear_scores_per_row_and_steps_interval_once() {
        let board = Board::from_ascii(&["########..", "########.."]);
        let mut state = game_with(PieceKind::O, board);
        for _ in 0..4 {
            state.move_piece(1);
        }
        while state.soft_drop() == DropOutcome::Moved {}

        assert_eq!(state.score(), 200);
        assert_eq!(state.lines(), 2);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS - DROP_STEP_MS);
        assert_eq!(state.board().filled(), 0);
    }

    #[test]
    fn test_blocked_spawn_lifts_above_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 3..7 {
                board.set(x, y, true);
            }
        }
        let state = game_with(PieceKind::T, board);

        assert_eq!(state.active().y, -2);
        assert!(!state.active().collides(state.board()));
    }

    #[test]
    fn test_topping_out_ends_game() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 3..7 {
                board.set(x, y, true);
            }
        }
        let mut state = game_with(PieceKind::I, board.clone());
        assert_eq!(state.active().y, -1);

        assert_eq!(state.soft_drop(), DropOutcome::ToppedOut);
        assert!(state.game_over());
        assert_eq!(state.board(), &board, "nothing is written on top-out");
        assert!(state.take_last_event().unwrap().topped_out);
    }

    #[test]
    fn test_tick_drops_only_after_interval_exceeded() {
        let mut state = game_with(PieceKind::T, Board::new());

        assert_eq!(state.tick(1000), None, "must strictly exceed the interval");
        assert_eq!(state.tick(1), Some(DropOutcome::Moved));
        assert_eq!(state.active().y, 1);
        assert_eq!(state.tick(500), None);
    }

    #[test]
    fn test_tick_runs_at_most_one_drop() {
        let mut state = game_with(PieceKind::T, Board::new());
        assert_eq!(state.tick(10_000), Some(DropOutcome::Moved));
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_pause_suppresses_ticks_and_input() {
        let mut state = game_with(PieceKind::T, Board::new());
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.status(), GameStatus::Paused);

        assert_eq!(state.tick(5000), None);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active(), Piece::new(PieceKind::T));

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_pause_has_no_effect_after_game_over() {
        let mut state = GameState::new(3);
        state.status = GameStatus::GameOver;

        assert!(!state.apply_action(GameAction::Pause));
        state.set_paused(true);
        assert_eq!(state.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let board = Board::from_ascii(&["#########."]);
        let mut state = game_with(PieceKind::I, board);
        state.score = 700;
        state.drop_interval_ms = 300;
        state.status = GameStatus::GameOver;

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS);
        assert_eq!(state.board().filled(), 0);
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut board = Board::new();
        board.set(0, 19, true);
        let state = game_with(PieceKind::L, board);
        let snap = state.snapshot();

        assert!(snap.board[19][0]);
        assert!(!snap.board[19][1]);
        assert_eq!(snap.active.unwrap().kind, PieceKind::L);
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.drop_interval_ms, BASE_DROP_MS);
    }
}
