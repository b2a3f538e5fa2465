//! Describing the moves that have been committed on a chessboard.

use crate::pieces::*;
use crate::positions::*;
use std::fmt;

/// One committed move. The history is an append-only sequence of these;
/// only the most recent entry is ever consulted (en passant eligibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub source: Position,
    pub target: Position,
}

impl MoveRecord {
    pub fn new(kind: PieceKind, color: PieceColor, source: Position, target: Position) -> Self {
        MoveRecord {
            kind,
            color,
            source,
            target,
        }
    }

    /// True if this records a pawn advancing two ranks in one move. The
    /// only move that opens an en passant window.
    pub fn is_pawn_double_step(&self) -> bool {
        self.kind == PieceKind::Pawn && (self.target.y - self.source.y).abs() == 2
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            Piece::new(self.kind, self.color).algebraic(),
            self.source,
            self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_double_step() {
        let double = MoveRecord::new(
            PieceKind::Pawn,
            PieceColor::White,
            Position::new(4, 1),
            Position::new(4, 3),
        );
        assert!(double.is_pawn_double_step());

        let single = MoveRecord::new(
            PieceKind::Pawn,
            PieceColor::White,
            Position::new(4, 1),
            Position::new(4, 2),
        );
        assert!(!single.is_pawn_double_step());

        let rook = MoveRecord::new(
            PieceKind::Rook,
            PieceColor::Black,
            Position::new(0, 7),
            Position::new(0, 5),
        );
        assert!(!rook.is_pawn_double_step());
    }

    #[test]
    fn test_display() {
        let m = MoveRecord::new(
            PieceKind::Knight,
            PieceColor::White,
            Position::new(6, 0),
            Position::new(5, 2),
        );
        assert_eq!(m.to_string(), "Ng1f3");
        let p = MoveRecord::new(
            PieceKind::Pawn,
            PieceColor::White,
            Position::new(4, 1),
            Position::new(4, 3),
        );
        assert_eq!(p.to_string(), "e2e4");
    }
}
