//! Game state module - the simulation step
//!
//! This module ties together the board, the piece catalog and the piece source. It
//! owns the active piece, handles movement, rotation, locking, line clears, spawning,
//! lives and the game status machine, and queues [`GameEvent`]s for the host.
//!
//! Nothing here measures time: periodic drops and the one-second clock are driven by
//! [`crate::game_loop::GameLoop`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::collision::collides;
use crate::config::GameConfig;
use crate::pieces::{base_shape, spawn_col, Shape};
use crate::rng::{PieceSource, UniformRandomizer};
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation; starts as the base shape and changes on rotation
    pub shape: Shape,
    /// Board row of the shape's top-left corner (may be negative)
    pub row: i32,
    /// Board column of the shape's top-left corner
    pub col: i32,
}

impl ActivePiece {
    /// Create a piece at row 0, horizontally centered on a board of `cols`
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let shape = base_shape(kind);
        let col = spawn_col(cols, shape.width());
        Self {
            kind,
            shape,
            row: 0,
            col,
        }
    }

    /// Check whether the piece would collide after moving by (drow, dcol)
    pub fn collides_at(&self, board: &Board, drow: i32, dcol: i32) -> bool {
        collides(&self.shape, self.row + drow, self.col + dcol, board)
    }

    /// Absolute (row, col) of every mino
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .minos()
            .map(|(dy, dx)| (self.row + dy, self.col + dx))
    }
}

/// Complete simulation state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    source: Box<dyn PieceSource + Send>,
    status: GameStatus,
    score: u32,
    lives: u32,
    /// Total rows cleared this session
    lines: u32,
    /// Whole seconds spent running this session
    elapsed_secs: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Pending notifications for presentation collaborators.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game drawing uniformly random pieces from `seed`
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, Box::new(UniformRandomizer::new(seed)))
    }

    /// Create a new game drawing pieces from `source`
    pub fn with_source(config: GameConfig, source: Box<dyn PieceSource + Send>) -> Self {
        let config = config.normalized();
        Self {
            config,
            board: Board::new(config.rows, config.cols),
            active: None,
            source,
            status: GameStatus::NotRunning,
            score: 0,
            lives: config.lives,
            lines: 0,
            elapsed_secs: 0,
            piece_id: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the pending events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hash of everything a renderer shows; changes whenever the picture would.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.board.hash(&mut hasher);
        self.active.hash(&mut hasher);
        self.status.hash(&mut hasher);
        self.score.hash(&mut hasher);
        self.lives.hash(&mut hasher);
        self.elapsed_secs.hash(&mut hasher);
        hasher.finish()
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.events.push(GameEvent::StatusChanged(status));
        }
    }

    /// Start the game and spawn the first piece
    ///
    /// Only valid from `NotRunning`; returns false otherwise.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::NotRunning {
            return false;
        }
        self.set_status(GameStatus::Running);
        self.spawn_piece();
        true
    }

    /// Toggle between `Running` and `Paused`; returns false in any other status.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.set_status(GameStatus::Paused),
            GameStatus::Paused => self.set_status(GameStatus::Running),
            GameStatus::NotRunning | GameStatus::GameOver => return false,
        }
        true
    }

    /// Reset board, score, lives and clock, and return to `NotRunning`.
    ///
    /// The piece source keeps its position, so a restarted game gets fresh pieces.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lives = self.config.lives;
        self.lines = 0;
        self.elapsed_secs = 0;

        self.set_status(GameStatus::NotRunning);
        self.events.push(GameEvent::ScoreChanged(self.score));
        self.events.push(GameEvent::LivesChanged(self.lives));
        self.events.push(GameEvent::TimerTick(self.elapsed_secs));
    }

    /// Advance the session clock by one second (driven by the game loop).
    pub fn tick_second(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.elapsed_secs = self.elapsed_secs.wrapping_add(1);
        self.events.push(GameEvent::TimerTick(self.elapsed_secs));
    }

    /// Spawn a new piece from the source.
    ///
    /// A blocked spawn costs a life. With lives left the board is cleared and spawning
    /// is retried; otherwise the game ends. Returns true if a piece is active afterwards.
    pub fn spawn_piece(&mut self) -> bool {
        loop {
            let kind = self.source.next_kind();
            let piece = ActivePiece::spawn(kind, self.board.cols());

            if !piece.collides_at(&self.board, 0, 0) {
                self.active = Some(piece);
                self.piece_id = self.piece_id.wrapping_add(1);
                return true;
            }

            self.active = None;
            self.lives = self.lives.saturating_sub(1);
            self.events.push(GameEvent::LivesChanged(self.lives));

            if self.lives == 0 {
                self.end_game();
                return false;
            }

            self.board.clear();
        }
    }

    fn end_game(&mut self) {
        self.active = None;
        self.set_status(GameStatus::GameOver);
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece; a blocked sideways or upward move is
    /// rejected without any state change.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if !self.status.accepts_moves() {
            return MoveOutcome::Rejected;
        }
        let Some(active) = self.active.as_mut() else {
            return MoveOutcome::Rejected;
        };

        if !active.collides_at(&self.board, dy, dx) {
            active.row += dy;
            active.col += dx;
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            let lines_cleared = self.lock_piece();
            return MoveOutcome::Locked { lines_cleared };
        }

        MoveOutcome::Rejected
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.try_move(1, 0)
    }

    pub fn soft_drop(&mut self) -> MoveOutcome {
        self.try_move(0, 1)
    }

    /// Rotate the active piece 90° clockwise in place.
    ///
    /// The rotated matrix keeps the current anchor. If it collides the rotation is
    /// discarded (no kicks). Returns true if the rotation was committed.
    pub fn rotate(&mut self) -> bool {
        if !self.status.accepts_moves() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.shape.rotated();
        if collides(&rotated, active.row, active.col, &self.board) {
            return false;
        }

        active.shape = rotated;
        true
    }

    /// Lock the active piece onto the board, clear full rows and spawn the next piece.
    ///
    /// Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        // Minos above the top edge are lost.
        self.board
            .lock_shape(&active.shape, active.row, active.col, active.kind);

        let lines_cleared = self.board.clear_full_rows();
        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.score += lines_cleared * self.config.line_score;
            self.events.push(GameEvent::ScoreChanged(self.score));
        }
        self.events.push(GameEvent::PieceLocked { lines_cleared });

        if self.status == GameStatus::Running {
            self.spawn_piece();
        }

        lines_cleared
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSequence;

    fn scripted(kinds: &[PieceKind]) -> GameState {
        GameState::with_source(
            GameConfig::default(),
            Box::new(FixedSequence::new(kinds.to_vec())),
        )
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default(), 12345);

        assert_eq!(state.status, GameStatus::NotRunning);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 1);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_start_spawns_centered_piece() {
        let mut state = scripted(&[PieceKind::I]);
        assert!(state.start());

        let piece = state.active.as_ref().unwrap();
        assert_eq!(piece.kind, PieceKind::I);
        assert_eq!((piece.row, piece.col), (0, 3));
        assert_eq!(state.piece_id, 1);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::StatusChanged(GameStatus::Running)]
        );

        // Second start is ignored
        assert!(!state.start());
    }

    #[test]
    fn test_moves_are_noops_unless_running() {
        let mut state = scripted(&[PieceKind::T]);
        assert_eq!(state.move_left(), MoveOutcome::Rejected);
        assert!(!state.rotate());

        state.start();
        state.toggle_pause();
        let before = state.active.clone();
        assert_eq!(state.soft_drop(), MoveOutcome::Rejected);
        assert!(!state.rotate());
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_sideways_block_is_rejected() {
        let mut state = scripted(&[PieceKind::O]);
        state.start();

        for _ in 0..4 {
            assert_eq!(state.move_left(), MoveOutcome::Moved);
        }
        assert_eq!(state.move_left(), MoveOutcome::Rejected);
        assert_eq!(state.active.as_ref().unwrap().col, 0);
        assert_eq!(state.try_move(0, -1), MoveOutcome::Moved);
        assert_eq!(state.active.as_ref().unwrap().row, -1);
    }

    #[test]
    fn test_rotation_blocked_by_wall_is_discarded() {
        let mut state = scripted(&[PieceKind::I]);
        state.start();

        // Vertical I at the right wall
        assert!(state.rotate());
        while state.move_right() == MoveOutcome::Moved {}
        let before = state.active.clone().unwrap();
        assert_eq!(before.col, 9);

        // Horizontal again would stick out past column 9
        assert!(!state.rotate());
        assert_eq!(state.active.as_ref(), Some(&before));
    }

    #[test]
    fn test_lock_clears_and_scores() {
        let mut state = scripted(&[PieceKind::I, PieceKind::O]);
        state.start();

        for col in 0..6 {
            state.board.set(19, col, Some(PieceKind::Z));
        }
        state.take_events();

        // I spawns covering columns 3..=6; three steps right fills the 6..=9 gap
        for _ in 0..3 {
            assert_eq!(state.move_right(), MoveOutcome::Moved);
        }
        while state.soft_drop() == MoveOutcome::Moved {}

        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.active.as_ref().unwrap().kind, PieceKind::O);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::ScoreChanged(100),
                GameEvent::PieceLocked { lines_cleared: 1 }
            ]
        );
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = scripted(&[PieceKind::O]);
        state.start();
        state.score = 300;
        state.board.set(0, 4, Some(PieceKind::L));
        state.take_events();

        state.lock_piece();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.lives, 0);
        assert!(state.active.is_none());
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::PieceLocked { lines_cleared: 0 },
                GameEvent::LivesChanged(0),
                GameEvent::StatusChanged(GameStatus::GameOver),
                GameEvent::GameOver { final_score: 300 },
            ]
        );
    }

    #[test]
    fn test_blocked_spawn_with_spare_life_clears_board() {
        let config = GameConfig {
            lives: 3,
            ..GameConfig::default()
        };
        let mut state =
            GameState::with_source(config, Box::new(FixedSequence::new(vec![PieceKind::O])));
        state.start();
        state.board.set(0, 5, Some(PieceKind::L));
        state.board.set(10, 0, Some(PieceKind::L));

        state.lock_piece();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.lives, 2);
        assert_eq!(state.board.occupied_count(), 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = scripted(&[PieceKind::T]);
        state.start();
        state.score = 500;
        state.lines = 5;
        state.elapsed_secs = 42;
        state.board.set(19, 0, Some(PieceKind::T));

        state.restart();

        assert_eq!(state.status, GameStatus::NotRunning);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.elapsed_secs, 0);
        assert_eq!(state.lives, 1);
        assert!(state.active.is_none());
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_tick_second_only_while_running() {
        let mut state = scripted(&[PieceKind::T]);
        state.tick_second();
        assert_eq!(state.elapsed_secs, 0);

        state.start();
        state.tick_second();
        assert_eq!(state.elapsed_secs, 1);

        state.toggle_pause();
        state.tick_second();
        assert_eq!(state.elapsed_secs, 1);
    }

    #[test]
    fn test_fingerprint_tracks_moves() {
        let mut state = scripted(&[PieceKind::T]);
        state.start();
        let before = state.fingerprint();

        state.move_left();
        assert_ne!(state.fingerprint(), before);

        state.move_right();
        assert_eq!(state.fingerprint(), before);
    }
}
