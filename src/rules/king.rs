use crate::boards::Board;
use crate::pieces::*;
use crate::positions::{Position, GRID_SIZE, KING_FILE};

const NEIGHBORS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

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
    if delta_x == 0 && delta_y == 0 {
        return false;
    }
    if delta_x.abs() <= 1 && delta_y.abs() <= 1 {
        return board.can_move_straight_to(source, target, color);
    }
    // the only multi-tile king move is castling: two files along the back rank
    if delta_y == 0 && delta_x.abs() == 2 {
        return can_castle(piece, source, board, delta_x > 0);
    }
    false
}

/// Castling eligibility for the given side (`short` is the h-file corner).
/// The king and the corner rook must both be unmoved, every tile strictly
/// between them must be empty, and none of the king's tile, the tile it
/// crosses, and the tile it lands on may be attacked by the enemy.
pub(super) fn can_castle(piece: Piece, source: Position, board: &Board, short: bool) -> bool {
    let color = match piece.color() {
        Some(c) => c,
        None => return false,
    };
    if piece.has_moved() || source.x != KING_FILE {
        return false;
    }
    let corner_x = if short { GRID_SIZE - 1 } else { 0 };
    let corner = Position::new(corner_x, source.y);
    let corner_piece = board.piece_at(corner);
    if !(corner_piece.kind() == PieceKind::Rook
        && corner_piece.is_color(color)
        && !corner_piece.has_moved())
    {
        return false;
    }
    if board.straight_path_occupied(source, corner, false) {
        return false;
    }
    // current tile, transit tile, destination tile
    let step: i8 = if short { 1 } else { -1 };
    for i in 0..=2 {
        let crossed = Position::new(KING_FILE + i * step, source.y);
        if board.tile_is_attacked(crossed, color.opposite()) {
            return false;
        }
    }
    true
}

pub(super) fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    let mut moves: Vec<Position> = NEIGHBORS
        .iter()
        .map(|&(dx, dy)| source.offset(dx, dy))
        .filter(|&target| target.in_bounds() && is_valid_move(piece, source, target, board))
        .collect();
    for &short in &[true, false] {
        if can_castle(piece, source, board, short) {
            let step: i8 = if short { 2 } else { -2 };
            moves.push(source.offset(step, 0));
        }
    }
    moves
}

/// A king attacks exactly its eight neighbors. Kept free of occupancy and
/// safety concerns so that attack queries from the enemy king never loop
/// back into move simulation.
pub(super) fn is_valid_attack(source: Position, target: Position) -> bool {
    let delta_x = (target.x - source.x).abs();
    let delta_y = (target.y - source.y).abs();
    delta_x <= 1 && delta_y <= 1 && !(delta_x == 0 && delta_y == 0)
}
