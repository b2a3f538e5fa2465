use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank direction this color moves in: white pawns walk up the board
    /// (+y), black pawns walk down (-y).
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank a pawn of this color promotes on.
    pub const fn promotion_rank(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Rank the back-rank pieces of this color start on.
    pub const fn back_rank(self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

impl PieceKind {
    /// Whether a pawn may promote into this kind of piece.
    pub const fn is_promotable(self) -> bool {
        match self {
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            PieceKind::Pawn | PieceKind::King | PieceKind::Empty => false,
        }
    }
}

/// A single tile's worth of piece. `Empty` marks an unoccupied tile and
/// absorbs every legality and attack check (always illegal, attacks
/// nothing), so board code can pattern match instead of juggling options.
///
/// Every real piece carries its color and a `has_moved` flag; the flag
/// feeds the pawn double-step and the castling eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Empty,
    Pawn { color: PieceColor, has_moved: bool },
    Knight { color: PieceColor, has_moved: bool },
    Bishop { color: PieceColor, has_moved: bool },
    Rook { color: PieceColor, has_moved: bool },
    Queen { color: PieceColor, has_moved: bool },
    King { color: PieceColor, has_moved: bool },
}

impl Piece {
    /// A fresh, unmoved piece of the given kind and color. Asking for an
    /// `Empty` kind just yields the empty piece.
    pub const fn new(kind: PieceKind, color: PieceColor) -> Piece {
        let has_moved = false;
        match kind {
            PieceKind::Pawn => Piece::Pawn { color, has_moved },
            PieceKind::Knight => Piece::Knight { color, has_moved },
            PieceKind::Bishop => Piece::Bishop { color, has_moved },
            PieceKind::Rook => Piece::Rook { color, has_moved },
            PieceKind::Queen => Piece::Queen { color, has_moved },
            PieceKind::King => Piece::King { color, has_moved },
            PieceKind::Empty => Piece::Empty,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Knight { .. } => PieceKind::Knight,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
            Piece::Empty => PieceKind::Empty,
        }
    }

    pub const fn color(self) -> Option<PieceColor> {
        match self {
            Piece::Pawn { color, .. }
            | Piece::Knight { color, .. }
            | Piece::Bishop { color, .. }
            | Piece::Rook { color, .. }
            | Piece::Queen { color, .. }
            | Piece::King { color, .. } => Some(color),
            Piece::Empty => None,
        }
    }

    pub const fn has_moved(self) -> bool {
        match self {
            Piece::Pawn { has_moved, .. }
            | Piece::Knight { has_moved, .. }
            | Piece::Bishop { has_moved, .. }
            | Piece::Rook { has_moved, .. }
            | Piece::Queen { has_moved, .. }
            | Piece::King { has_moved, .. } => has_moved,
            Piece::Empty => false,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    pub fn is_color(self, c: PieceColor) -> bool {
        self.color() == Some(c)
    }

    /// The same piece with its `has_moved` flag raised.
    pub const fn moved(self) -> Piece {
        match self {
            Piece::Pawn { color, .. } => Piece::Pawn { color, has_moved: true },
            Piece::Knight { color, .. } => Piece::Knight { color, has_moved: true },
            Piece::Bishop { color, .. } => Piece::Bishop { color, has_moved: true },
            Piece::Rook { color, .. } => Piece::Rook { color, has_moved: true },
            Piece::Queen { color, .. } => Piece::Queen { color, has_moved: true },
            Piece::King { color, .. } => Piece::King { color, has_moved: true },
            Piece::Empty => Piece::Empty,
        }
    }

    /// Letter used in algebraic notation (empty string for pawns and the
    /// empty piece).
    pub const fn algebraic(self) -> &'static str {
        match self.kind() {
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
            PieceKind::Pawn | PieceKind::Empty => "",
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PieceColor::*;
        use PieceKind::*;
        let symbol = match (self.kind(), self.color()) {
            (King, Some(White)) => '\u{2654}',
            (Queen, Some(White)) => '\u{2655}',
            (Rook, Some(White)) => '\u{2656}',
            (Bishop, Some(White)) => '\u{2657}',
            (Knight, Some(White)) => '\u{2658}',
            (Pawn, Some(White)) => '\u{2659}',
            (King, Some(Black)) => '\u{265a}',
            (Queen, Some(Black)) => '\u{265b}',
            (Rook, Some(Black)) => '\u{265c}',
            (Bishop, Some(Black)) => '\u{265d}',
            (Knight, Some(Black)) => '\u{265e}',
            (Pawn, Some(Black)) => '\u{265f}',
            _ => ' ',
        };
        write!(f, "{}", symbol)
    }
}
