use super::{sliding_moves, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
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
    let straight = (delta_x != 0) != (delta_y != 0);
    let diagonal = delta_x != 0 && delta_x.abs() == delta_y.abs();
    if !straight && !diagonal {
        return false;
    }
    board.can_move_straight_to(source, target, color)
}

pub(super) fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    let mut moves = sliding_moves(piece, source, board, &STRAIGHT_DIRECTIONS);
    moves.extend(sliding_moves(piece, source, board, &DIAGONAL_DIRECTIONS));
    moves
}
