use crate::piece::Piece;
use crate::types::{Difficulty, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs for one frame.
///
/// `board` holds color codes (0 = empty, see `Color::code`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Piece,
    pub next: Piece,
    pub ghost_y: i8,
    pub score: u32,
    pub lines: u32,
    pub elapsed_ms: u64,
    pub speed_multiplier: f64,
    pub interval_ms: f64,
    pub difficulty: Difficulty,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Whole seconds of play.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let idle = Piece::spawn(ShapeKind::I);
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: idle,
            next: idle,
            ghost_y: 0,
            score: 0,
            lines: 0,
            elapsed_ms: 0,
            speed_multiplier: 1.0,
            interval_ms: Difficulty::default().profile().base_interval_ms as f64,
            difficulty: Difficulty::default(),
            paused: false,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
