use crate::chess_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Chessboard coordinates on an 8x8 board.
//
// x runs along the files (a..h), y along the ranks. White sits at the
// bottom, so the white back rank is y = 0 and "forward" for white is +y:
//
//     a    b    c    d    e    f    g    h
//   -----------------------------------------
// 8 | 0,7  1,7  2,7  3,7  4,7  5,7  6,7  7,7 | 8
// 7 | 0,6  1,6  2,6  3,6  4,6  5,6  6,6  7,6 | 7
//   |                  ...                   |
// 2 | 0,1  1,1  2,1  3,1  4,1  5,1  6,1  7,1 | 2
// 1 | 0,0  1,0  2,0  3,0  4,0  5,0  6,0  7,0 | 1
//   -----------------------------------------
//     a    b    c    d    e    f    g    h
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

/// Number of tiles along each axis of the board.
pub const GRID_SIZE: i8 = 8;

/// File of the king in the standard initial placement. Castling geometry
/// (two-square king moves, rook landing squares) hangs off this file.
pub const KING_FILE: i8 = 4;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Position {
        Position { x, y }
    }

    /// Checks whether the position lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }

    /// Returns the position shifted by the given file/rank deltas. The
    /// result may lie off the board; callers check `in_bounds` themselves.
    pub const fn offset(self, dx: i8, dy: i8) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Allows to iterate over all positions on the board.
    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Error is rather big, so we use a closure to avoid copies
        let err_closure = || -> ChessError { format!("Invalid chess position {}", s).into() };
        let mut chars = s.chars();

        let file = chars.next().ok_or_else(err_closure)?;
        let rank = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err_closure)?;

        //    Too many characters || rank is invalid
        if chars.next().is_some() || rank < 1 || rank > 8 {
            return Err(err_closure());
        }

        let pos = Position::new(file as i8 - 'a' as i8, rank as i8 - 1);
        if pos.in_bounds() {
            Ok(pos)
        } else {
            Err(err_closure())
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(
                f,
                "{}{}",
                ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'][self.x as usize],
                self.y + 1,
            )
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

type Offset = (i8, i8);

impl_op_ex!(+ |a: &Position, b: &Offset| -> Position { Position::new(a.x + b.0, a.y + b.1) });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(7, 7).in_bounds());
        assert!(!Position::new(-1, 3).in_bounds());
        assert!(!Position::new(3, 8).in_bounds());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("a1".parse::<Position>().unwrap(), Position::new(0, 0));
        assert_eq!("e4".parse::<Position>().unwrap(), Position::new(4, 3));
        assert_eq!("h8".parse::<Position>().unwrap(), Position::new(7, 7));
        assert!("i1".parse::<Position>().is_err());
        assert!("a9".parse::<Position>().is_err());
        assert!("a0".parse::<Position>().is_err());
        assert!("e44".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let pos = Position::new(x, y);
                assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
            }
        }
    }

    #[test]
    fn test_offset_ops() {
        assert_eq!(Position::new(4, 1) + (0, 2), Position::new(4, 3));
        assert_eq!(Position::new(4, 1).offset(-1, 1), Position::new(3, 2));
    }
}
