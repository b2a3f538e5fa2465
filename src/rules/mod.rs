//! Movement rules, one module per piece kind.
//!
//! Every operation dispatches on the piece's kind; the empty piece absorbs
//! everything (never a valid move, never an attack, no targets). All checks
//! here are *shape* legality: geometry and occupancy only, with no regard
//! for whether the mover's own king ends up attacked. The arbiter layers
//! the self-check filtering on top.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use crate::boards::Board;
use crate::pieces::*;
use crate::positions::Position;

pub(crate) const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Shape legality of moving the piece from source to target, ignoring
/// whether the mover's own king would be left in check. En passant is not
/// decided here; the board answers that from its history.
pub fn is_valid_move(piece: Piece, source: Position, target: Position, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pawn::is_valid_move(piece, source, target, board),
        PieceKind::Knight => knight::is_valid_move(piece, source, target, board),
        PieceKind::Bishop => bishop::is_valid_move(piece, source, target, board),
        PieceKind::Rook => rook::is_valid_move(piece, source, target, board),
        PieceKind::Queen => queen::is_valid_move(piece, source, target, board),
        PieceKind::King => king::is_valid_move(piece, source, target, board),
        PieceKind::Empty => false,
    }
}

/// All geometrically legal targets for the piece, without self-check
/// filtering. Pawn targets include eligible en passant captures, king
/// targets include eligible castling moves.
pub fn valid_moves(piece: Piece, source: Position, board: &Board) -> Vec<Position> {
    match piece.kind() {
        PieceKind::Pawn => pawn::valid_moves(piece, source, board),
        PieceKind::Knight => knight::valid_moves(piece, source, board),
        PieceKind::Bishop => bishop::valid_moves(piece, source, board),
        PieceKind::Rook => rook::valid_moves(piece, source, board),
        PieceKind::Queen => queen::valid_moves(piece, source, board),
        PieceKind::King => king::valid_moves(piece, source, board),
        PieceKind::Empty => Vec::new(),
    }
}

/// Whether the piece attacks the target square. For knights and sliders
/// this is the same as move legality; pawns attack exactly their two
/// forward diagonals (occupied or not) and kings their eight neighbors.
/// The dedicated pawn and king checks keep `tile_is_attacked` free of
/// recursion through move simulation.
pub fn is_valid_attack(piece: Piece, source: Position, target: Position, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pawn::is_valid_attack(piece, source, target),
        PieceKind::Knight => knight::is_valid_move(piece, source, target, board),
        PieceKind::Bishop => bishop::is_valid_move(piece, source, target, board),
        PieceKind::Rook => rook::is_valid_move(piece, source, target, board),
        PieceKind::Queen => queen::is_valid_move(piece, source, target, board),
        PieceKind::King => king::is_valid_attack(source, target),
        PieceKind::Empty => false,
    }
}

/// Pure movement-pattern test, ignoring occupancy and attack state
/// entirely. The arbiter uses this to tell "wrong shape for this piece"
/// apart from "right shape, but blocked" when classifying rejections.
pub fn fits_shape(piece: Piece, source: Position, target: Position) -> bool {
    let color = match piece.color() {
        Some(c) => c,
        None => return false,
    };
    let delta_x = target.x - source.x;
    let delta_y = target.y - source.y;
    let delta_forward = delta_y * color.forward();
    match piece.kind() {
        PieceKind::Pawn => {
            (delta_x == 0 && delta_forward == 1)
                || (delta_x == 0 && delta_forward == 2 && !piece.has_moved())
                || (delta_x.abs() == 1 && delta_forward == 1)
        }
        PieceKind::Knight => {
            (delta_x.abs() == 1 && delta_y.abs() == 2) || (delta_x.abs() == 2 && delta_y.abs() == 1)
        }
        PieceKind::Bishop => delta_x != 0 && delta_x.abs() == delta_y.abs(),
        PieceKind::Rook => (delta_x != 0) != (delta_y != 0),
        PieceKind::Queen => {
            ((delta_x != 0) != (delta_y != 0)) || (delta_x != 0 && delta_x.abs() == delta_y.abs())
        }
        PieceKind::King => {
            (delta_x.abs() <= 1 && delta_y.abs() <= 1 && !(delta_x == 0 && delta_y == 0))
                || (delta_y == 0 && delta_x.abs() == 2 && !piece.has_moved())
        }
        PieceKind::Empty => false,
    }
}

/// Shared target enumeration for the sliding pieces: walk each direction
/// one tile at a time, stop at the board edge, stop inclusively on the
/// first enemy piece, and never enter a tile held by a friendly piece.
pub(crate) fn sliding_moves(
    piece: Piece,
    source: Position,
    board: &Board,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let color = match piece.color() {
        Some(c) => c,
        None => return Vec::new(),
    };
    let mut moves = Vec::new();
    for &(step_x, step_y) in directions {
        let mut target = source.offset(step_x, step_y);
        while target.in_bounds() && !board.tile_is_occupied_by(target, color) {
            moves.push(target);
            if board.tile_is_occupied(target) {
                // enemy piece: may be captured, but blocks anything beyond
                break;
            }
            target = target + (step_x, step_y);
        }
    }
    moves
}
