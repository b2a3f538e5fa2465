use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
#[derive(Debug, Clone)]
pub struct ChessError(String);

pub type ChessResult<T> = std::result::Result<T, ChessError>;

impl From<String> for ChessError {
    fn from(s: String) -> ChessError {
        ChessError(s)
    }
}

impl From<&str> for ChessError {
    fn from(s: &str) -> ChessError {
        ChessError(s.to_string())
    }
}

impl Error for ChessError {}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Chess error occured: {}", self.0)
    }
}

/// Why a move attempt (or promotion call) was turned down. The public
/// boundary only surfaces a boolean, since a rejected move always leaves the
/// game untouched, but the arbiter's internal entry points return this so
/// tests can tell the causes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Target (or source) square lies off the board.
    OutOfBounds,
    /// The grabbed piece does not match what stands on the source square.
    /// Also covers grabbing the empty piece.
    NoSuchPiece,
    /// It is not this color's turn.
    OutOfTurn,
    /// The move does not match the piece's movement pattern.
    IllegalShape,
    /// The movement pattern fits, but a piece stands in the way.
    PathBlocked,
    /// The target square holds a piece of the mover's own color.
    OwnPieceOnTarget,
    /// The move would leave the mover's own king attacked.
    SelfCheck,
    /// A pawn is waiting for its promotion choice; no other move may run.
    PromotionPending,
    /// `promote` was called with nothing to promote, or with a piece kind
    /// pawns cannot promote into.
    InvalidPromotion,
    /// The game already ended in checkmate or stalemate.
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            Rejection::OutOfBounds => "target out of bounds",
            Rejection::NoSuchPiece => "no such piece on the source square",
            Rejection::OutOfTurn => "not this color's turn",
            Rejection::IllegalShape => "move does not fit the piece's movement pattern",
            Rejection::PathBlocked => "path is blocked",
            Rejection::OwnPieceOnTarget => "target occupied by own piece",
            Rejection::SelfCheck => "move would leave own king in check",
            Rejection::PromotionPending => "a promotion choice is pending",
            Rejection::InvalidPromotion => "invalid promotion",
            Rejection::GameOver => "game is over",
        };
        write!(f, "Move rejected: {}", reason)
    }
}
