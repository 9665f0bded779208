use super::{File, Square};
use thiserror::Error;

/******************************************\
|==========================================|
|                  Sides                   |
|==========================================|
\******************************************/

/// # Side Representation
///
/// Represents the two sides of the board: White and Black.
/// Selects which pawn attack table applies.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black
}

impl Side {
    /// Number of elements in the Side enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Side);
crate::impl_enum_iter!(Side);

/******************************************\
|==========================================|
|                 Sliders                  |
|==========================================|
\******************************************/

/// # Slider Representation
///
/// Represents the two sliding movement patterns: diagonal (bishop)
/// and orthogonal (rook).

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Bishop,
    Rook
}

impl Slider {
    /// Number of elements in the Slider enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Slider);
crate::impl_enum_iter!(Slider);

impl std::fmt::Display for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Represents the 8 ray directions plus the 8 knight jumps, valued as
/// signed square-index deltas. Index 0 is a8, so moving north decreases
/// the index.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = -8, S = 8, W = -1, E = 1,
    NE = -7, NW = -9, SE = 9, SW = 7,
    NNE = -15, NNW = -17, NEE = -6, NWW = -10,
    SEE = 10, SWW = 6, SSE = 17, SSW = 15,
}

crate::impl_from_to_primitive!(Direction, i8);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Try to convert from i16 to a square (Returns error if out of bounds)
    pub const fn try_from(value: i16) -> Result<Self, &'static str> {
        if value >= 0 && value < 64 {
            Ok(unsafe { Square::from_unchecked(value as u8) })
        } else {
            Err("Square value out of bounds (0-63)")
        }
    }

    /// Try to add direction to a square
    #[inline]
    pub const fn add(self, rhs: Direction) -> Result<Self, SquareAddError> {
        let file = self.file() as u8;

        use Direction::*;
        let valid = match rhs {
            N | S => true,
            E | NE | NNE | SE | SSE if file < File::FileH as u8 => true,
            W | NW | NNW | SW | SSW if file > File::FileA as u8 => true,
            NEE | SEE if file < File::FileG as u8 => true,
            NWW | SWW if file > File::FileB as u8 => true,
            _ => false,
        };

        match valid {
            true => match Square::try_from(self as i16 + rhs as i16) {
                Ok(sq) => Ok(sq),
                Err(_) => Err(SquareAddError::OutOfBounds),
            },
            false => Err(SquareAddError::OutOfBounds),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (N => S, etc...)
    fn neg(self) -> Self::Output {
        Self::from_unchecked(-(self as i8))
    }
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
