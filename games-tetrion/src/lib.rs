//! Tetrion game implementation: a two-player tetromino territory game.
//!
//! Tetrion is played on a fixed 11x11 grid that wraps around at the edges
//! (a torus). Each turn a player places one of the seven tetromino shapes,
//! in any rotation, onto empty cells. Apart from a player's first move, the
//! placement must touch at least one cell the player already owns. Any row
//! or column that becomes completely filled is cleared. A player with no
//! legal placement loses.
//!
//! This crate holds the game rules and state model:
//!
//! - [`PlayerColor`], [`Coord`], [`Placement`]: value types
//! - [`Shape`], [`Tetromino`], [`PieceSet`]: piece geometry and catalog
//! - [`Board`]: immutable-with-copy grid state with a canonical encoding
//! - [`GameNode`]: a board plus the side to move; legal-move generation
//!   and randomized playouts
//! - [`Strategy`]: the trait seam implemented by search engines

pub mod board;
pub mod color;
pub mod coord;
pub mod node;
pub mod piece;
pub mod placement;
pub mod strategy;

pub use board::Board;
pub use color::PlayerColor;
pub use coord::{Coord, BOARD_N, CELL_COUNT};
pub use node::GameNode;
pub use piece::{PieceError, PieceSet, Shape, Tetromino};
pub use placement::Placement;
pub use strategy::{Strategy, StrategyError};
