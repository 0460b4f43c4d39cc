//! Shared types and constants.
//!
//! Pure data with no external dependencies, usable by the core engine, the
//! terminal renderer and the input mapper alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Difficulty Profiles
//!
//! | Profile | Base interval | Increase per minute | Speed cap |
//! |---------|---------------|---------------------|-----------|
//! | easy    | 1000ms        | +0.1x               | 2.0x      |
//! | medium  | 800ms         | +0.2x               | 3.0x      |
//! | hard    | 500ms         | +0.3x               | 5.0x      |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Difficulty, GameAction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::I));
//! assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Hard.profile().base_interval_ms, 500);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame budget of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points awarded per cleared line (flat, no multi-line bonus)
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Milliseconds per minute of play, the granularity of speed increases
pub const MS_PER_MINUTE: u64 = 60_000;

/// The seven tetromino shapes, in generator index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds in generator index order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Look up a kind by generator index (0..7).
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::L => 3,
            ShapeKind::J => 4,
            ShapeKind::S => 5,
            ShapeKind::Z => 6,
        }
    }

    /// The fixed color paired with this shape.
    pub fn color(&self) -> Color {
        Color::ALL[self.index()]
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("Q"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Palette color identifier stored in occupied board cells.
///
/// Each variant is named after the shape that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rose,
    Sky,
    Mint,
    Violet,
    Amber,
    Gold,
    Azure,
}

impl Color {
    /// Palette in shape index order.
    pub const ALL: [Color; 7] = [
        Color::Rose,
        Color::Sky,
        Color::Mint,
        Color::Violet,
        Color::Amber,
        Color::Gold,
        Color::Azure,
    ];

    /// 24-bit RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rose => (0xFF, 0x0D, 0x72),
            Color::Sky => (0x0D, 0xC2, 0xFF),
            Color::Mint => (0x0D, 0xFF, 0x72),
            Color::Violet => (0xF5, 0x38, 0xFF),
            Color::Amber => (0xFF, 0x8E, 0x0D),
            Color::Gold => (0xFF, 0xE1, 0x38),
            Color::Azure => (0x38, 0x77, 0xFF),
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Rose => "#FF0D72",
            Color::Sky => "#0DC2FF",
            Color::Mint => "#0DFF72",
            Color::Violet => "#F538FF",
            Color::Amber => "#FF8E0D",
            Color::Gold => "#FFE138",
            Color::Azure => "#3877FF",
        }
    }

    /// Compact non-zero code used in snapshot grids (0 means empty).
    pub fn code(&self) -> u8 {
        match self {
            Color::Rose => 1,
            Color::Sky => 2,
            Color::Mint => 3,
            Color::Violet => 4,
            Color::Amber => 5,
            Color::Gold => 6,
            Color::Azure => 7,
        }
    }

    /// Inverse of [`Color::code`]; `0` and unknown codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked block of the given color
pub type Cell = Option<Color>;

/// Speed parameters of a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Fall interval at multiplier 1.0
    pub base_interval_ms: u32,
    /// Multiplier growth per full minute of play
    pub speed_increase_per_minute: f64,
    /// Upper bound of the multiplier
    pub speed_cap: f64,
}

/// Named difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                base_interval_ms: 1000,
                speed_increase_per_minute: 0.1,
                speed_cap: 2.0,
            },
            Difficulty::Medium => DifficultyProfile {
                base_interval_ms: 800,
                speed_increase_per_minute: 0.2,
                speed_cap: 3.0,
            },
            Difficulty::Hard => DifficultyProfile {
                base_interval_ms: 500,
                speed_increase_per_minute: 0.3,
                speed_cap: 5.0,
            },
        }
    }

    /// Parse difficulty from string (case-insensitive).
    ///
    /// Unknown names return `None`; callers keep their current profile.
    ///
    /// ```
    /// use blockfall_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Discrete commands accepted by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a fresh game keeping the difficulty
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
