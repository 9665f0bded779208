use crate::core::{Bitboard, Direction, Side, Square};

use Direction::*;

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// Attack table for a single piece type indexed by square
type AttackTable = [Bitboard; Square::NUM];
/// Attack table for pawns indexed by side and square
type PawnAttackTable = [[Bitboard; Square::NUM]; Side::NUM];

/// Precomputed pawn attacks, indexed by `[Side][Square]`.
const PAWN_ATTACKS: PawnAttackTable = [
    init_pseudo_attacks(&[NE, NW]), // White pawn attacks (index 0)
    init_pseudo_attacks(&[SE, SW]), // Black pawn attacks (index 1)
];

/// Precomputed knight attacks, indexed by `[Square]`.
const KNIGHT_ATTACKS: AttackTable = init_pseudo_attacks(&[NNE, NNW, NEE, NWW, SEE, SWW, SSE, SSW]);

/// Precomputed king attacks, indexed by `[Square]`.
const KING_ATTACKS: AttackTable = init_pseudo_attacks(&[N, NE, NW, E, W, SE, SW, S]);

/// Builds an attack table for a leaping piece by shifting each origin
/// square in the given directions. The shifts mask off wrap-around, so
/// attacks never cross the board edge.
const fn init_pseudo_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;

    while i < Square::NUM {
        let sq_bb = unsafe { Square::from_unchecked(i as u8).bb() };

        let mut j = 0;
        while j < dirs.len() {
            attacks[i].bitor_assign(Bitboard::shift(&sq_bb, dirs[j]));
            j += 1;
        }

        i += 1;
    }

    attacks
}

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

#[inline]
pub fn pawn_attack(side: Side, sq: Square) -> Bitboard {
    unsafe {
        *PAWN_ATTACKS
            .get_unchecked(side.index())
            .get_unchecked(sq.index())
    }
}

#[inline]
pub fn knight_attack(sq: Square) -> Bitboard {
    unsafe { *KNIGHT_ATTACKS.get_unchecked(sq.index()) }
}

#[inline]
pub fn king_attack(sq: Square) -> Bitboard {
    unsafe { *KING_ATTACKS.get_unchecked(sq.index()) }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_attacks_match_square_distances() {
        for sq in Square::iter() {
            for to in Square::iter() {
                let rd = Square::rank_dist(sq, to);
                let fd = Square::file_dist(sq, to);
                let expected = (rd == 2 && fd == 1) || (rd == 1 && fd == 2);
                assert_eq!(
                    knight_attack(sq).contains(to),
                    expected,
                    "knight {sq} -> {to}"
                );
            }
        }
    }

    #[test]
    fn king_attacks_match_square_distances() {
        for sq in Square::iter() {
            for to in Square::iter() {
                let rd = Square::rank_dist(sq, to);
                let fd = Square::file_dist(sq, to);
                let expected = rd.max(fd) == 1;
                assert_eq!(king_attack(sq).contains(to), expected, "king {sq} -> {to}");
            }
        }
    }

    #[test]
    fn pawn_attacks_match_square_distances() {
        for sq in Square::iter() {
            for to in Square::iter() {
                let forward = to.rank() as i8 - sq.rank() as i8;
                let fd = Square::file_dist(sq, to);

                let white = forward == 1 && fd == 1;
                let black = forward == -1 && fd == 1;

                assert_eq!(
                    pawn_attack(Side::White, sq).contains(to),
                    white,
                    "white pawn {sq} -> {to}"
                );
                assert_eq!(
                    pawn_attack(Side::Black, sq).contains(to),
                    black,
                    "black pawn {sq} -> {to}"
                );
            }
        }
    }

    #[test]
    fn pawn_attack_examples() {
        use Square::*;

        assert_eq!(pawn_attack(Side::White, E4), Bitboard::from([D5, F5]));
        assert_eq!(pawn_attack(Side::White, A2), Bitboard::from([B3]));
        assert_eq!(pawn_attack(Side::White, H7), Bitboard::from([G8]));
        assert_eq!(pawn_attack(Side::White, E8), Bitboard::EMPTY);

        assert_eq!(pawn_attack(Side::Black, E4), Bitboard::from([D3, F3]));
        assert_eq!(pawn_attack(Side::Black, A7), Bitboard::from([B6]));
        assert_eq!(pawn_attack(Side::Black, E1), Bitboard::EMPTY);
    }

    #[test]
    fn knight_attack_examples() {
        use Square::*;

        assert_eq!(knight_attack(A8), Bitboard::from([B6, C7]));
        assert_eq!(knight_attack(H1), Bitboard::from([F2, G3]));
        assert_eq!(
            knight_attack(E4),
            Bitboard::from([C3, C5, D2, D6, F2, F6, G3, G5])
        );
    }

    #[test]
    fn king_attack_examples() {
        use Square::*;

        assert_eq!(king_attack(A1), Bitboard::from([A2, B1, B2]));
        assert_eq!(
            king_attack(E4),
            Bitboard::from([D3, D4, D5, E3, E5, F3, F4, F5])
        );
    }
}
