//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and no I/O: no terminal, no clock, no
//! global state. Time enters only through [`GameState::tick`], randomness only
//! through the seedable [`ShapeGenerator`], so a seed plus a list of commands
//! and timestamps reproduces a game exactly.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, row clearing and merging
//! - [`shape`]: tetromino masks and clockwise rotation
//! - [`piece`]: a shape placed on the board with its color
//! - [`collision`]: the legality check used by every move, rotation and spawn
//! - [`rng`]: seedable and scripted shape generators
//! - [`scoring`]: flat 100 points per cleared line
//! - [`speed`]: fall interval from play time and difficulty profile
//! - [`game_state`]: the game loop and its Running / Paused / GameOver phases
//! - [`snapshot`]: a `Copy` view of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random, one piece of lookahead
//! - Rotation is clockwise only and has no wall kicks
//! - A blocked gravity step or a hard drop locks the piece immediately
//! - Each cleared line is worth 100 points
//! - Speed grows every minute of play up to the difficulty's cap
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ShapeGenerator};
//! use blockfall_types::{Difficulty, GameAction, ShapeKind};
//!
//! let generator = ShapeGenerator::scripted(&[ShapeKind::I]);
//! let mut game = GameState::with_generator(generator, Difficulty::Medium);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//!
//! // Drive gravity from any monotonic millisecond clock.
//! game.tick(0);
//! game.tick(800);
//! assert_eq!(game.current().y, 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod speed;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use collision::collides;
pub use game_state::{GameState, LockEvent, Phase};
pub use piece::Piece;
pub use rng::{ShapeGenerator, SimpleRng};
pub use scoring::calculate_line_score;
pub use shape::{Minos, Shape};
pub use snapshot::GameSnapshot;
pub use speed::SpeedController;
