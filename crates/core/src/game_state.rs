//! Game state module - owns one game and runs its rules
//!
//! Ties together the board, the current and next pieces, the shape generator,
//! the speed controller and the score. Every command is a synchronous
//! `&mut self` call that either commits completely or leaves the state as it
//! was; illegal moves just return `false`.
//!
//! # Phases
//!
//! ```text
//!            toggle_pause              spawn collides
//!  Running <--------------> Paused    Running ---------> GameOver
//!     ^                                                      |
//!     +------------------------ reset -----------------------+
//! ```
//!
//! Move, rotate and drop commands are ignored unless running. Pause toggling
//! is ignored once the game is over; reset is always accepted.

use log::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::collision::collides;
use crate::piece::Piece;
use crate::rng::ShapeGenerator;
use crate::scoring::calculate_line_score;
use crate::snapshot::GameSnapshot;
use crate::speed::SpeedController;
use crate::types::{Difficulty, GameAction};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Outcome of the most recent lock, kept for renderers that animate clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Board rows removed by this lock, bottom to top (pre-clear indices)
    pub cleared_rows: ClearedRows,
    /// Points added by this lock
    pub score_delta: u32,
    /// Piece cells written into the board (cells above the top are dropped)
    pub cells_merged: usize,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    generator: ShapeGenerator,
    speed: SpeedController,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
    /// Monotonic id of the current piece (increments on every spawn)
    piece_id: u32,
    /// Play time, excluding paused time
    elapsed_ms: u64,
    /// Time since the last gravity step
    gravity_ms: u64,
    /// Timestamp of the previous running tick; `None` re-anchors the clock
    last_tick_ms: Option<u64>,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// New game on the easy profile with a random generator seeded by `seed`.
    pub fn new(seed: u32) -> Self {
        Self::with_generator(ShapeGenerator::seeded(seed), Difficulty::default())
    }

    /// New game with an explicit generator and difficulty.
    pub fn with_generator(generator: ShapeGenerator, difficulty: Difficulty) -> Self {
        Self::from_parts(Board::new(), generator, difficulty)
    }

    /// Start a game on a prepared board.
    ///
    /// The first piece spawns immediately. If it collides with the given
    /// board the game starts out over.
    pub fn from_parts(board: Board, mut generator: ShapeGenerator, difficulty: Difficulty) -> Self {
        let placeholder = Piece::spawn(generator.draw());
        let mut state = Self {
            board,
            current: placeholder,
            next: placeholder,
            generator,
            speed: SpeedController::new(difficulty),
            phase: Phase::Running,
            score: 0,
            lines: 0,
            episode_id: 0,
            piece_id: 0,
            elapsed_ms: 0,
            gravity_ms: 0,
            last_tick_ms: None,
            last_event: None,
        };
        state.spawn_next();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Whole seconds of play.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn difficulty(&self) -> Difficulty {
        self.speed.difficulty()
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed.multiplier()
    }

    /// Current gravity interval in milliseconds
    pub fn interval_ms(&self) -> f64 {
        self.speed.interval_ms()
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = self.current;
        out.next = self.next;
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.lines = self.lines;
        out.elapsed_ms = self.elapsed_ms;
        out.speed_multiplier = self.speed.multiplier();
        out.interval_ms = self.speed.interval_ms();
        out.difficulty = self.speed.difficulty();
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece and draw a fresh one.
    ///
    /// Ends the game when the new current piece overlaps the stack. The board
    /// and score are left untouched in that case.
    fn spawn_next(&mut self) -> bool {
        let upcoming = Piece::spawn(self.generator.draw());
        self.current = std::mem::replace(&mut self.next, upcoming);
        self.piece_id = self.piece_id.wrapping_add(1);

        if collides(&self.board, &self.current, 0, 0, None) {
            self.phase = Phase::GameOver;
            self.last_tick_ms = None;
            info!(
                "game over: score={} lines={} elapsed_ms={}",
                self.score, self.lines, self.elapsed_ms
            );
            return false;
        }

        true
    }

    /// Shift the current piece by (dx, dy) if the target is free.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() || collides(&self.board, &self.current, dx, dy, None) {
            return false;
        }
        match self.current.offset(dx, dy) {
            Some(moved) => {
                self.current = moved;
                true
            }
            None => false,
        }
    }

    /// Rotate the current piece clockwise in place. No wall kicks.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = self.current.shape.rotated_cw();
        if collides(&self.board, &self.current, 0, 0, Some(&rotated)) {
            return false;
        }
        self.current = self.current.with_shape(rotated);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One row down. A blocked soft drop does not lock; gravity does.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Drop the current piece to the lowest legal row and lock it.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        while self.try_move(0, 1) {}
        self.lock_piece();
        true
    }

    /// Row the current piece would land on, for the ghost preview.
    pub fn ghost_y(&self) -> i8 {
        let mut dy: i8 = 0;
        while dy < i8::MAX && !collides(&self.board, &self.current, 0, dy + 1, None) {
            dy += 1;
        }
        self.current.y.saturating_add(dy)
    }

    /// Merge the current piece, clear full rows, score them, spawn the next.
    fn lock_piece(&mut self) {
        let piece = self.current;
        let cells_merged = self
            .board
            .merge(&piece.minos(), piece.x, piece.y, piece.color);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();
        let score_delta = calculate_line_score(lines_cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        debug!(
            "locked {:?} at ({}, {}): merged={} cleared={:?} score={}",
            piece.kind,
            piece.x,
            piece.y,
            cells_merged,
            cleared_rows.as_slice(),
            self.score
        );

        self.last_event = Some(LockEvent {
            cleared_rows,
            score_delta,
            cells_merged,
        });
        self.gravity_ms = 0;
        self.spawn_next();
    }

    /// Pause or resume. Ignored once the game is over.
    ///
    /// Both directions drop the tick anchor, so wall-clock time spent paused
    /// never reaches the play clock or the gravity timer.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => return false,
        };
        self.last_tick_ms = None;
        debug!("phase -> {:?}", self.phase);
        true
    }

    /// Switch difficulty. The speed multiplier restarts at 1.0.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.speed.set_difficulty(difficulty);
        info!("difficulty set to {}", difficulty.as_str());
    }

    /// Switch difficulty by name. Unknown names are rejected and the current
    /// profile stays.
    pub fn set_difficulty_by_name(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.set_difficulty(difficulty);
                true
            }
            None => {
                debug!("rejected unknown difficulty {:?}", name);
                false
            }
        }
    }

    /// Fresh game on an empty board, keeping the difficulty and the
    /// generator's position in its sequence.
    pub fn reset(&mut self) {
        let generator = std::mem::take(&mut self.generator);
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::with_generator(generator, self.speed.difficulty());
        self.episode_id = next_episode;
        info!(
            "reset: episode={} difficulty={}",
            self.episode_id,
            self.difficulty().as_str()
        );
    }

    /// Advance the game clock to `now_ms` and apply gravity when due.
    ///
    /// Timestamps come from any monotonic clock. The first tick after start,
    /// resume or reset only anchors the clock. Returns true when a gravity
    /// step happened (a move down or a lock).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            self.last_tick_ms = None;
            return false;
        }

        let delta = match self.last_tick_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_tick_ms = Some(now_ms);

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta);
        self.speed.update(self.elapsed_ms);
        self.gravity_ms = self.gravity_ms.saturating_add(delta);

        if (self.gravity_ms as f64) < self.speed.interval_ms() {
            return false;
        }

        self.gravity_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a discrete command. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            // A paused game only answers to the pause toggle.
            GameAction::Restart if self.paused() => false,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
