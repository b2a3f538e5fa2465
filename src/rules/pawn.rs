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
    // measured in the pawn's own direction of travel
    let delta_forward = (target.y - source.y) * color.forward();

    if delta_x == 0 && delta_forward == 1 {
        // single step: the target itself must be free
        return !board.straight_path_occupied(source, target, true);
    }
    if delta_x == 0 && delta_forward == 2 && !piece.has_moved() {
        return !board.straight_path_occupied(source, target, true);
    }
    if delta_x.abs() == 1 && delta_forward == 1 {
        // diagonal: only onto an enemy piece, or the en passant tile
        return board.tile_is_occupied_by(target, color.opposite())
            || board.move_is_en_passant(source, target);
    }
    false
}

pub(super) fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    let color = match piece.color() {
        Some(c) => c,
        None => return Vec::new(),
    };
    let forward = color.forward();
    [(0, forward), (0, 2 * forward), (-1, forward), (1, forward)]
        .iter()
        .map(|&(dx, dy)| source.offset(dx, dy))
        .filter(|&target| target.in_bounds() && is_valid_move(piece, source, target, board))
        .collect()
}

/// Pawns attack exactly their two forward diagonals, regardless of what
/// (if anything) stands there. This is pure geometry, which is what keeps
/// attack queries from recursing through en passant history checks.
pub(super) fn is_valid_attack(piece: Piece, source: Position, target: Position) -> bool {
    let color = match piece.color() {
        Some(c) => c,
        None => return false,
    };
    let delta_x = (target.x - source.x).abs();
    let delta_forward = (target.y - source.y) * color.forward();
    delta_x == 1 && delta_forward == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveRecord;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_forward_moves() {
        let board = Board::standard_setup();
        let pawn = board.piece_at(pos("e2"));
        assert!(is_valid_move(pawn, pos("e2"), pos("e3"), &board));
        assert!(is_valid_move(pawn, pos("e2"), pos("e4"), &board));
        // no sideways, backwards, or triple steps
        assert!(!is_valid_move(pawn, pos("e2"), pos("f2"), &board));
        assert!(!is_valid_move(pawn, pos("e2"), pos("e1"), &board));
        assert!(!is_valid_move(pawn, pos("e2"), pos("e5"), &board));
        let mut moves = valid_moves(pawn, pos("e2"), &board);
        moves.sort();
        assert_eq!(moves, vec![pos("e3"), pos("e4")]);
    }

    #[test]
    fn test_pawn_double_step_only_once() {
        let mut board = Board::empty();
        board
            .add(pos("e3"), Piece::new(PieceKind::Pawn, PieceColor::White).moved())
            .unwrap();
        let pawn = board.piece_at(pos("e3"));
        assert!(is_valid_move(pawn, pos("e3"), pos("e4"), &board));
        assert!(!is_valid_move(pawn, pos("e3"), pos("e5"), &board));
    }

    #[test]
    fn test_pawn_cannot_capture_straight() {
        let mut board = Board::empty();
        board
            .add(pos("e4"), Piece::new(PieceKind::Pawn, PieceColor::White).moved())
            .unwrap();
        board
            .add(pos("e5"), Piece::new(PieceKind::Pawn, PieceColor::Black).moved())
            .unwrap();
        let pawn = board.piece_at(pos("e4"));
        assert!(!is_valid_move(pawn, pos("e4"), pos("e5"), &board));
        assert!(valid_moves(pawn, pos("e4"), &board).is_empty());
    }

    #[test]
    fn test_pawn_double_step_blocked_midway() {
        let mut board = Board::empty();
        board
            .add(pos("e2"), Piece::new(PieceKind::Pawn, PieceColor::White))
            .unwrap();
        board
            .add(pos("e3"), Piece::new(PieceKind::Knight, PieceColor::Black))
            .unwrap();
        let pawn = board.piece_at(pos("e2"));
        assert!(!is_valid_move(pawn, pos("e2"), pos("e3"), &board));
        // the blocker on e3 also forbids jumping to e4
        assert!(!is_valid_move(pawn, pos("e2"), pos("e4"), &board));
    }

    #[test]
    fn test_pawn_diagonal_capture() {
        let mut board = Board::empty();
        board
            .add(pos("e4"), Piece::new(PieceKind::Pawn, PieceColor::White).moved())
            .unwrap();
        board
            .add(pos("d5"), Piece::new(PieceKind::Rook, PieceColor::Black))
            .unwrap();
        board
            .add(pos("f5"), Piece::new(PieceKind::Rook, PieceColor::White))
            .unwrap();
        let pawn = board.piece_at(pos("e4"));
        assert!(is_valid_move(pawn, pos("e4"), pos("d5"), &board));
        // no capturing own pieces, no diagonal onto empty tiles
        assert!(!is_valid_move(pawn, pos("e4"), pos("f5"), &board));
        let mut empty_diag = Board::empty();
        empty_diag
            .add(pos("e4"), Piece::new(PieceKind::Pawn, PieceColor::White).moved())
            .unwrap();
        let lone = empty_diag.piece_at(pos("e4"));
        assert!(!is_valid_move(lone, pos("e4"), pos("d5"), &empty_diag));
    }

    #[test]
    fn test_pawn_en_passant_is_a_valid_move() {
        let mut board = Board::empty();
        board
            .add(pos("e5"), Piece::new(PieceKind::Pawn, PieceColor::White).moved())
            .unwrap();
        board
            .add(pos("d5"), Piece::new(PieceKind::Pawn, PieceColor::Black).moved())
            .unwrap();
        board.record_move(MoveRecord::new(
            PieceKind::Pawn,
            PieceColor::Black,
            pos("d7"),
            pos("d5"),
        ));
        let pawn = board.piece_at(pos("e5"));
        assert!(is_valid_move(pawn, pos("e5"), pos("d6"), &board));
        assert!(valid_moves(pawn, pos("e5"), &board).contains(&pos("d6")));
    }

    #[test]
    fn test_black_pawn_attacks_downward() {
        let pawn = Piece::new(PieceKind::Pawn, PieceColor::Black);
        assert!(is_valid_attack(pawn, pos("d5"), pos("c4")));
        assert!(is_valid_attack(pawn, pos("d5"), pos("e4")));
        assert!(!is_valid_attack(pawn, pos("d5"), pos("c6")));
        assert!(!is_valid_attack(pawn, pos("d5"), pos("d4")));
    }
}
