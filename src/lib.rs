pub mod board;
pub mod game;

pub use board::{Board, BoardBuilder, Color, MoveError, Piece, Square};
pub use game::Game;
