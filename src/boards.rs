use crate::chess_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use crate::rules;
use array_init::array_init;
use lazy_static::lazy_static;
use std::fmt::{self, Display};
use std::ops;

// ---------------------------------------------
// Board State
// ---------------------------------------------

type Grid = [[Piece; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Back-rank placement for both colors, left to right (a-file to h-file).
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn initial_grid() -> Grid {
    let mut grid: Grid = array_init(|_| array_init(|_| Piece::Empty));
    for x in 0..GRID_SIZE {
        let kind = BACK_RANK[x as usize];
        grid[0][x as usize] = Piece::new(kind, PieceColor::White);
        grid[1][x as usize] = Piece::new(PieceKind::Pawn, PieceColor::White);
        grid[6][x as usize] = Piece::new(PieceKind::Pawn, PieceColor::Black);
        grid[7][x as usize] = Piece::new(kind, PieceColor::Black);
    }
    grid
}

lazy_static! {
    static ref INITIAL_GRID: Grid = initial_grid();
}

/// The 8x8 grid of pieces plus the move history. Piece behaviors and the
/// arbiter only consume the query surface; the arbiter alone builds new
/// boards when committing moves.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    history: Vec<MoveRecord>,
}

impl Board {
    /// A board with no pieces and an empty history.
    pub fn empty() -> Board {
        Board {
            grid: array_init(|_| array_init(|_| Piece::Empty)),
            history: Vec::new(),
        }
    }

    /// The standard initial placement, white to move next.
    pub fn standard_setup() -> Board {
        Board {
            grid: INITIAL_GRID.clone(),
            history: Vec::new(),
        }
    }

    /// Places a piece on an empty tile. Used to build test and puzzle
    /// positions; refuses double occupancy.
    pub fn add(&mut self, pos: Position, piece: Piece) -> ChessResult<()> {
        if !pos.in_bounds() {
            return Err(format!("Position {} is off the board", pos).into());
        }
        let current = &mut self.grid[pos.y as usize][pos.x as usize];
        if current.is_empty() {
            *current = piece;
            Ok(())
        } else {
            Err(format!("Piece at {} is not empty but {}", pos, current).into())
        }
    }

    /// The piece standing on the given tile. Off-board positions read as
    /// empty, which lets callers probe candidate squares without a
    /// separate bounds check.
    pub fn piece_at(&self, pos: Position) -> Piece {
        if pos.in_bounds() {
            self.grid[pos.y as usize][pos.x as usize]
        } else {
            Piece::Empty
        }
    }

    pub(crate) fn set(&mut self, pos: Position, piece: Piece) {
        debug_assert!(pos.in_bounds(), "Tried to set piece off the board: {}", pos);
        self.grid[pos.y as usize][pos.x as usize] = piece;
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push(record);
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Total number of pieces on the board, both colors.
    pub fn piece_count(&self) -> usize {
        Position::all_positions()
            .filter(|&p| !self.piece_at(p).is_empty())
            .count()
    }

    pub fn tile_is_occupied(&self, pos: Position) -> bool {
        !self.piece_at(pos).is_empty()
    }

    pub fn tile_is_occupied_by(&self, pos: Position, color: PieceColor) -> bool {
        self.piece_at(pos).is_color(color)
    }

    /// Checks whether any tile strictly between source and target along a
    /// straight (horizontal, vertical, or diagonal) line is occupied, by
    /// either color. With `include_target` the target tile itself is
    /// checked as well (pawn forward moves land on it, so it must be
    /// free). A path that is not straight at all counts as occupied.
    pub fn straight_path_occupied(
        &self,
        source: Position,
        target: Position,
        include_target: bool,
    ) -> bool {
        let delta_x = target.x - source.x;
        let delta_y = target.y - source.y;
        if delta_x != 0 && delta_y != 0 && delta_x.abs() != delta_y.abs() {
            // not horizontal, vertical, or diagonal
            return true;
        }
        let step_x: i8 = if delta_x > 0 { 1 } else { -1 };
        let step_y: i8 = if delta_y > 0 { 1 } else { -1 };
        let mut path_length = std::cmp::max(delta_x.abs() - 1, delta_y.abs() - 1);
        if include_target {
            path_length += 1;
        }
        // Step over all tiles starting with the neighbor of source, ending
        // with the neighbor of target (or target itself, see above)
        for i in 1..=path_length {
            let mut path = source;
            if delta_x != 0 {
                path.x += i * step_x;
            }
            if delta_y != 0 {
                path.y += i * step_y;
            }
            if self.tile_is_occupied(path) {
                return true;
            }
        }
        false
    }

    /// Path clearance composed with "target not occupied by own color":
    /// the legality core shared by bishop, rook, queen and the king's
    /// single-step moves.
    pub fn can_move_straight_to(
        &self,
        source: Position,
        target: Position,
        own_color: PieceColor,
    ) -> bool {
        if self.straight_path_occupied(source, target, false) {
            return false;
        }
        !self.tile_is_occupied_by(target, own_color)
    }

    /// True iff some piece of `by_color` has `pos` as a valid attack
    /// target. Pawns and kings use dedicated geometric attack checks, so
    /// this never recurses back into itself through move simulation.
    pub fn tile_is_attacked(&self, pos: Position, by_color: PieceColor) -> bool {
        Position::all_positions().any(|source| {
            let piece = self.piece_at(source);
            piece.is_color(by_color) && rules::is_valid_attack(piece, source, pos, self)
        })
    }

    pub fn king_position(&self, color: PieceColor) -> Option<Position> {
        Position::all_positions().find(|&pos| {
            let piece = self.piece_at(pos);
            piece.kind() == PieceKind::King && piece.is_color(color)
        })
    }

    /// Checks whether moving from source to target is a legal en passant
    /// capture. Four conditions, all required: the mover is a pawn making
    /// a one-file diagonal forward step; an enemy pawn stands on the tile
    /// the mover passes beside (target file, source rank); and the most
    /// recent committed move is that very pawn's two-square advance.
    pub fn move_is_en_passant(&self, source: Position, target: Position) -> bool {
        let moving = self.piece_at(source);
        let color = match (moving.kind(), moving.color()) {
            (PieceKind::Pawn, Some(c)) => c,
            _ => return false,
        };
        // en passant depends on the previous move
        let previous = match self.last_move() {
            Some(m) => m,
            None => return false,
        };
        let delta_x = (target.x - source.x).abs();
        let delta_forward = (target.y - source.y) * color.forward();
        if !(delta_x == 1 && delta_forward == 1) {
            return false;
        }
        // The captured pawn is not on the target tile but directly beside
        // the mover, on the tile "behind" the target.
        let captured_pos = Position::new(target.x, source.y);
        let captured = self.piece_at(captured_pos);
        if !(captured.kind() == PieceKind::Pawn && captured.is_color(color.opposite())) {
            return false;
        }
        previous.is_pawn_double_step() && previous.target == captured_pos
    }

    /// A copy of this board with the piece at source relocated to target
    /// and a synthetic history entry appended. This exists solely for the
    /// one-ply "would my king be attacked afterwards" simulation; it
    /// deliberately models no captures, castling, or promotion, since
    /// only attack queries run against the result.
    pub fn clone_with_relocation(&self, source: Position, target: Position) -> Board {
        let mut sim = self.clone();
        let piece = sim.piece_at(source);
        sim.set(source, Piece::Empty);
        sim.set(target, piece);
        if let Some(color) = piece.color() {
            sim.record_move(MoveRecord::new(piece.kind(), color, source, target));
        }
        sim
    }
}

impl ops::Index<Position> for Board {
    type Output = Piece;

    fn index(&self, pos: Position) -> &Piece {
        &self.grid[pos.y as usize][pos.x as usize]
    }
}

// Displays the board in the usual orientation, white at the bottom:
//
//    a b c d e f g h
//  8 r n b q k b n r 8
//  7 ...
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        for y in (0..GRID_SIZE).rev() {
            write!(f, "\n{} ", y + 1)?;
            for x in 0..GRID_SIZE {
                write!(f, "{} ", self.piece_at(Position::new(x, y)))?;
            }
            write!(f, "{} ", y + 1)?;
        }
        write!(f, "\n ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
