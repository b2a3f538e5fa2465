//! A chess rules engine built around a mailbox board: an 8x8 grid of
//! pieces with an absorbing empty piece, per-piece movement rules, and an
//! arbiter that owns the game state. The arbiter validates and commits
//! moves, tracks turn order, handles en passant, castling, and
//! promotions, and declares checkmate or stalemate.

#[macro_use]
extern crate impl_ops;

pub mod arbiter;
pub mod boards;
pub mod chess_errors;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod rules;

pub use arbiter::{GameOutcome, GameState, PendingPromotion};
pub use boards::Board;
pub use chess_errors::{ChessError, ChessResult, Rejection};
pub use moves::MoveRecord;
pub use pieces::{Piece, PieceColor, PieceKind};
pub use positions::{Position, GRID_SIZE, KING_FILE};
