use super::{sliding_moves, DIAGONAL_DIRECTIONS};
use crate::boards::Board;
use crate::pieces::*;
use crate::positions::Position;

pub(super) fn is_valid_move(
    piece: Piece,
    source: Position,
    target: Position,
    board: &Board,
) -> bool {
    let color = match piece.color() {
        Some(c) => c,
        None => return false,
    };
    let delta_x = target.x - source.x;
    let delta_y = target.y - source.y;
    // a diagonal move that actually changes position
    if delta_x == 0 || delta_x.abs() != delta_y.abs() {
        return false;
    }
    board.can_move_straight_to(source, target, color)
}

pub(super) fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    sliding_moves(piece, source, board, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_bishop_blocked_in_standard_setup() {
        let board = Board::standard_setup();
        let bishop = board.piece_at(pos("c1"));
        assert!(!is_valid_move(bishop, pos("c1"), pos("e3"), &board));
        assert!(valid_moves(bishop, pos("c1"), &board).is_empty());
    }

    #[test]
    fn test_bishop_slides_and_captures() {
        let mut board = Board::empty();
        board
            .add(pos("c1"), Piece::new(PieceKind::Bishop, PieceColor::White))
            .unwrap();
        board
            .add(pos("g5"), Piece::new(PieceKind::Pawn, PieceColor::Black))
            .unwrap();
        let bishop = board.piece_at(pos("c1"));
        assert!(is_valid_move(bishop, pos("c1"), pos("g5"), &board));
        // may not slide through the enemy pawn
        assert!(!is_valid_move(bishop, pos("c1"), pos("h6"), &board));
        // straight lines are not bishop moves
        assert!(!is_valid_move(bishop, pos("c1"), pos("c4"), &board));
        let moves = valid_moves(bishop, pos("c1"), &board);
        assert!(moves.contains(&pos("g5")));
        assert!(!moves.contains(&pos("h6")));
        assert!(moves.contains(&pos("a3")));
    }
}
