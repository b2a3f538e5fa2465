use crate::boards::Board;
use crate::pieces::*;
use crate::positions::Position;

/// The eight L-shaped jumps: two tiles along one axis, one along the other.
const JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
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
    let delta_x = (target.x - source.x).abs();
    let delta_y = (target.y - source.y).abs();
    if !((delta_x == 1 && delta_y == 2) || (delta_x == 2 && delta_y == 1)) {
        return false;
    }
    // jumps over everything; only the landing tile matters
    !board.tile_is_occupied_by(target, color)
}

pub(super) fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    JUMPS
        .iter()
        .map(|&(dx, dy)| source.offset(dx, dy))
        .filter(|&target| target.in_bounds() && is_valid_move(piece, source, target, board))
        .collect()
}
