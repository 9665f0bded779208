use std::fmt;

use super::{Direction, File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// Represents a 64-bit bitboard where each bit corresponds to a square.
/// Bit 0 is a8 and bit 63 is h1, matching the square index layout the
/// baked magic constants were generated for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);
crate::impl_bit_mani_ops!(Bitboard, u8);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!Self::EMPTY.0);

    /// A bitboard with only the a8 square set (bit 0).
    pub const A8: Bitboard = Bitboard(1);

    /// A bitboard representing all squares on the 1st rank (bits 56-63).
    pub const RANK_1: Bitboard = Bitboard(0xff00000000000000);

    /// A bitboard representing all squares on the 8th rank (bits 0-7).
    pub const RANK_8: Bitboard = Bitboard(0x00000000000000ff);

    /// A bitboard representing all squares on the 1st and 2nd ranks.
    pub const RANK_12: Bitboard = Bitboard(0xffff000000000000);

    /// A bitboard representing all squares on the 7th and 8th ranks.
    pub const RANK_78: Bitboard = Bitboard(0x000000000000ffff);

    /// A bitboard representing all squares on the A file.
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);

    /// A bitboard representing all squares on the H file.
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    /// A bitboard representing all squares on the A and B file.
    const FILE_AB: Bitboard = Bitboard(0x303030303030303);

    /// A bitboard representing all squares on the G and H file.
    const FILE_GH: Bitboard = Bitboard(0xC0C0C0C0C0C0C0C0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::A8.0 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_8.0 << (8 * (7 - *self as u8)))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for square in squares {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|         Bitboard Implementation          |
|==========================================|
\******************************************/

impl Bitboard {
    /// Finds the least significant bit (LSB) set in the bitboard and returns its corresponding `Square`.
    /// Returns `None` if the bitboard is empty.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => unsafe { Some(Square::from_unchecked(bits.trailing_zeros() as u8)) },
        }
    }

    /// Finds the least significant bit (LSB) set in the bitboard and returns its corresponding `Square`.
    ///
    /// # Panics
    /// Panics in debug mode if the bitboard is empty.
    pub const fn lsb_unchecked(&self) -> Square {
        debug_assert!(self.0 != 0, "Bitboard is empty");
        unsafe { Square::from_unchecked(self.0.trailing_zeros() as u8) }
    }

    /// Finds and removes (clears) the least significant bit (LSB) from the bitboard,
    /// returning its corresponding `Square`. Returns `None` if the bitboard was empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        match self.0 {
            0 => None,
            _ => {
                let lsb_square = self.lsb_unchecked();
                self.0 &= self.0 - 1;
                Some(lsb_square)
            }
        }
    }

    /// Finds and removes (clears) the least significant bit (LSB) from the bitboard,
    /// returning its corresponding `Square`.
    ///
    /// # Panics
    /// Panics in debug mode if the bitboard is empty.
    #[inline]
    pub const fn pop_lsb_unchecked(&mut self) -> Square {
        debug_assert!(self.0 != 0, "Bitboard is empty");
        let lsb_square = self.lsb_unchecked();
        self.0 &= self.0 - 1;
        lsb_square
    }

    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bitboard has at least one bit set.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & (1u64 << (square as u8 as u64))) != 0
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= 1u64 << (square as u8 as u64);
    }

    /// Clears the bit corresponding to the given `Square`.
    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << (square as u8 as u64));
    }

    /// Toggles the bit corresponding to the given `Square`.
    #[inline]
    pub const fn toggle(&mut self, square: Square) {
        self.0 ^= 1u64 << (square as u8 as u64);
    }

    /// Iterates over each set bit in the bitboard, calling the provided function `f` with the `Square` for each.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Square),
    {
        let mut bb = *self;
        while bb.0 != 0 {
            f(bb.pop_lsb_unchecked());
        }
    }

    // Const-context counterparts of the macro-generated operator impls.
    // Trait methods cannot be called from const fns, so table initializers
    // and the ray walker use these instead.

    /// Const `&` between two bitboards.
    #[inline]
    pub(crate) const fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }

    /// Const `|` between two bitboards.
    #[inline]
    pub(crate) const fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }

    /// Const `|=` between two bitboards.
    #[inline]
    pub(crate) const fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }

    /// Const `!` of a bitboard.
    #[inline]
    pub(crate) const fn not(self) -> Self {
        Bitboard(!self.0)
    }

    /// Rotates the board to the left/right based on the values sign, +ve means rotate left, -ve means rotate right
    #[inline]
    const fn rotate_left(&self, shift: i16) -> Bitboard {
        let bb = if shift >= 0 {
            self.0.rotate_left(shift as u32)
        } else {
            self.0.rotate_right(-shift as u32)
        };
        Bitboard(bb)
    }

    /// Shifts all set bits in the bitboard by one step in the given `Direction`. Bits shifted off the board are lost.
    #[inline]
    pub(crate) const fn shift(&self, dir: Direction) -> Bitboard {
        let bb = *self;

        Bitboard(bb.0 & Self::avoid_wrap(dir).0).rotate_left(dir as i16)
    }

    /// Returns a mask to prevent wrap-around when shifting in a given `Direction`.
    const fn avoid_wrap(dir: Direction) -> Bitboard {
        use Direction::*;
        let bb = match dir {
            N => Self::RANK_8.0,
            S => Self::RANK_1.0,
            E => Self::FILE_H.0,
            W => Self::FILE_A.0,

            NE => Self::RANK_8.0 | Self::FILE_H.0,
            NW => Self::RANK_8.0 | Self::FILE_A.0,
            SE => Self::RANK_1.0 | Self::FILE_H.0,
            SW => Self::RANK_1.0 | Self::FILE_A.0,

            NNE => Self::RANK_78.0 | Self::FILE_H.0,
            NNW => Self::RANK_78.0 | Self::FILE_A.0,
            NEE => Self::RANK_8.0 | Self::FILE_GH.0,
            NWW => Self::RANK_8.0 | Self::FILE_AB.0,
            SEE => Self::RANK_1.0 | Self::FILE_GH.0,
            SWW => Self::RANK_1.0 | Self::FILE_AB.0,
            SSE => Self::RANK_12.0 | Self::FILE_H.0,
            SSW => Self::RANK_12.0 | Self::FILE_A.0,
        };
        Bitboard(!bb)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank as u8 + 1)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{}|", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Bitboard: {:#x}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
