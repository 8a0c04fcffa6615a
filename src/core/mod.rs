pub mod piece;
pub mod types;

pub use piece::{MoveStep, Piece, PieceKind};
pub use types::{PlayerId, Position, BOARD_SIZE};
