use crate::core::{Bitboard, Direction, Slider, Square};

/******************************************\
|==========================================|
|            Attacks on the fly            |
|==========================================|
\******************************************/

/// # Attacks on the fly
/// - Calculate the attacks of a sliding piece square by square (Slow
///   approach used as ground truth when verifying magic numbers).
/// - Each ray runs until it leaves the board or visits a blocker; the
///   blocker square itself is included (capture semantics).
pub const fn slider_attacks(slider: Slider, sq: Square, occ: Bitboard) -> Bitboard {
    use Direction::*;
    // Directions for rook and bishop
    let dirs: [Direction; 4] = match slider {
        Slider::Rook => [N, E, W, S],
        Slider::Bishop => [NE, NW, SE, SW],
    };

    let mut attacks = Bitboard::EMPTY;
    let mut i = 0;
    // Loop through the directions for the movement pattern
    while i < dirs.len() {
        let mut to = sq;
        // Keep stepping while the current square is unoccupied
        while !occ.contains(to) {
            to = match to.add(dirs[i]) {
                Ok(to) => to,
                Err(_) => break,
            };
            attacks.bitor_assign(to.bb());
        }
        // The last square visited is either occupied or at the border
        i += 1;
    }
    attacks
}

/******************************************\
|==========================================|
|              Relevant Masks              |
|==========================================|
\******************************************/

/// # Edge Mask
/// - The edge mask removes the border of the board from the attack mask.
/// - A blocker on the border never shortens a ray, so border squares do
///   not need to take part in the occupancy hashing.
/// - The origin's own rank and file are exempt, otherwise sliders on the
///   border would lose their whole mask.
pub const fn edge_mask(sq: Square) -> Bitboard {
    let rank_18bb = Bitboard::RANK_1.bitor(Bitboard::RANK_8);
    let file_ahbb = Bitboard::FILE_A.bitor(Bitboard::FILE_H);

    let sq_rank_bb = sq.rank().bb();
    let sq_file_bb = sq.file().bb();

    let rank_mask = rank_18bb.bitand(sq_rank_bb.not());
    let file_mask = file_ahbb.bitand(sq_file_bb.not());

    rank_mask.bitor(file_mask)
}

/// Relevant-occupancy mask for a slider on a square: the unblocked rays
/// minus the board edge. Only subsets of this mask are hashed.
pub const fn relevant_mask(slider: Slider, sq: Square) -> Bitboard {
    slider_attacks(slider, sq, Bitboard::EMPTY).bitand(edge_mask(sq).not())
}

/// Bit counts of the bishop relevant masks, indexed by square.
pub const BISHOP_RELEVANT_BITS: [u8; Square::NUM] = init_relevant_bits(Slider::Bishop);

/// Bit counts of the rook relevant masks, indexed by square.
pub const ROOK_RELEVANT_BITS: [u8; Square::NUM] = init_relevant_bits(Slider::Rook);

const fn init_relevant_bits(slider: Slider) -> [u8; Square::NUM] {
    let mut table = [0u8; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };
        table[i] = relevant_mask(slider, sq).count_bits() as u8;
        i += 1;
    }

    table
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{File, Rank};
    use crate::utils::PRNG;

    // Independent recomputation by rank/file stepping, used to cross-check
    // the direction-based ray walker.
    fn naive_slider_attacks(slider: Slider, sq: Square, occ: Bitboard) -> Bitboard {
        let deltas: [(i8, i8); 4] = match slider {
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        };

        let mut attacks = Bitboard::EMPTY;
        for (dr, df) in deltas {
            let mut r = sq.rank() as i8 + dr;
            let mut f = sq.file() as i8 + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let to = Square::from_parts(
                    unsafe { File::from_unchecked(f as u8) },
                    unsafe { Rank::from_unchecked(r as u8) },
                );
                attacks.set(to);
                if occ.contains(to) {
                    break;
                }
                r += dr;
                f += df;
            }
        }
        attacks
    }

    #[test]
    fn unblocked_attacks_match_naive_walk() {
        for slider in Slider::iter() {
            for sq in Square::iter() {
                assert_eq!(
                    slider_attacks(slider, sq, Bitboard::EMPTY),
                    naive_slider_attacks(slider, sq, Bitboard::EMPTY),
                    "{slider} on {sq}"
                );
            }
        }
    }

    #[test]
    fn blocked_attacks_match_naive_walk() {
        let mut rng = PRNG::default();

        for _ in 0..500 {
            let sq = unsafe { Square::from_unchecked((rng.random_u32() % 64) as u8) };
            let mut occ = Bitboard(rng.random_u64() & rng.random_u64());
            occ.clear(sq);

            for slider in Slider::iter() {
                assert_eq!(
                    slider_attacks(slider, sq, occ),
                    naive_slider_attacks(slider, sq, occ),
                    "{slider} on {sq} with occupancy {occ}"
                );
            }
        }
    }

    #[test]
    fn blockers_are_included_and_never_passed() {
        let mut rng = PRNG::default();

        for _ in 0..200 {
            let sq = unsafe { Square::from_unchecked((rng.random_u32() % 64) as u8) };
            let mut occ = Bitboard(rng.random_u64() & rng.random_u64() & rng.random_u64());
            occ.clear(sq);

            for slider in Slider::iter() {
                let attacks = slider_attacks(slider, sq, occ);
                let blockers = attacks & occ;

                // Every attacked blocker ends its ray: the squares behind it
                // must be unreachable.
                blockers.for_each(|blocker| {
                    let without = {
                        let mut o = occ;
                        o.clear(blocker);
                        slider_attacks(slider, sq, o)
                    };
                    // Removing the blocker can only extend the attack set.
                    assert_eq!(without & attacks, attacks);
                });
            }
        }
    }

    #[test]
    fn relevant_masks_exclude_edges() {
        for slider in Slider::iter() {
            for sq in Square::iter() {
                let mask = relevant_mask(slider, sq);
                assert!(
                    mask.bitand(edge_mask(sq)).is_empty(),
                    "{slider} mask on {sq} touches the edge"
                );
                assert!(!mask.contains(sq));
            }
        }
    }

    #[test]
    fn rook_corner_mask_and_attacks() {
        use Square::*;

        // Rook on a1: mask stops one short of a8 and h1, but includes a7/g1.
        let mask = relevant_mask(Slider::Rook, A1);
        let expected = Bitboard::from([A2, A3, A4, A5, A6, A7, B1, C1, D1, E1, F1, G1]);
        assert_eq!(mask, expected);
        assert_eq!(mask.count_bits(), 12);

        // A single blocker on b1 cuts the east ray; the north ray runs to a8.
        let occ = Bitboard::from([B1]);
        let attacks = slider_attacks(Slider::Rook, A1, occ);
        let expected = Bitboard::from([A2, A3, A4, A5, A6, A7, A8, B1]);
        assert_eq!(attacks, expected);
    }

    #[test]
    fn bishop_corner_mask() {
        use Square::*;

        let mask = relevant_mask(Slider::Bishop, A8);
        let expected = Bitboard::from([B7, C6, D5, E4, F3, G2]);
        assert_eq!(mask, expected);
    }

    #[test]
    fn relevant_bit_tables() {
        #[rustfmt::skip]
        const BISHOP_EXPECTED: [u8; Square::NUM] = [
            6, 5, 5, 5, 5, 5, 5, 6,
            5, 5, 5, 5, 5, 5, 5, 5,
            5, 5, 7, 7, 7, 7, 5, 5,
            5, 5, 7, 9, 9, 7, 5, 5,
            5, 5, 7, 9, 9, 7, 5, 5,
            5, 5, 7, 7, 7, 7, 5, 5,
            5, 5, 5, 5, 5, 5, 5, 5,
            6, 5, 5, 5, 5, 5, 5, 6,
        ];

        #[rustfmt::skip]
        const ROOK_EXPECTED: [u8; Square::NUM] = [
            12, 11, 11, 11, 11, 11, 11, 12,
            11, 10, 10, 10, 10, 10, 10, 11,
            11, 10, 10, 10, 10, 10, 10, 11,
            11, 10, 10, 10, 10, 10, 10, 11,
            11, 10, 10, 10, 10, 10, 10, 11,
            11, 10, 10, 10, 10, 10, 10, 11,
            11, 10, 10, 10, 10, 10, 10, 11,
            12, 11, 11, 11, 11, 11, 11, 12,
        ];

        assert_eq!(BISHOP_RELEVANT_BITS, BISHOP_EXPECTED);
        assert_eq!(ROOK_RELEVANT_BITS, ROOK_EXPECTED);
    }
}
