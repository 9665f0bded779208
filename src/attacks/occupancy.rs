use crate::core::Bitboard;

/// Maps an index in `[0, 2^bit_count)` to a subset of `mask`.
///
/// Walks the mask bits from least to most significant; mask bit `k` is
/// kept iff bit `k` of `index` is set. Index 0 is the empty board and
/// `2^bit_count - 1` is the full mask, so iterating the index range
/// enumerates every occupancy exactly once.
pub const fn set_occupancy(index: usize, bit_count: u32, mask: Bitboard) -> Bitboard {
    let mut occupancy = Bitboard::EMPTY;
    let mut rest = mask;

    let mut count = 0;
    while count < bit_count {
        let sq = match rest.pop_lsb() {
            Some(sq) => sq,
            None => break,
        };

        if index & (1 << count) != 0 {
            occupancy.set(sq);
        }

        count += 1;
    }

    occupancy
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::relevant_mask;
    use crate::core::{Slider, Square};
    use std::collections::HashSet;

    #[test]
    fn index_zero_is_empty_and_top_index_is_full() {
        for slider in Slider::iter() {
            for sq in [Square::A1, Square::E4, Square::H8] {
                let mask = relevant_mask(slider, sq);
                let bits = mask.count_bits();

                assert_eq!(set_occupancy(0, bits, mask), Bitboard::EMPTY);
                assert_eq!(set_occupancy((1 << bits) - 1, bits, mask), mask);
            }
        }
    }

    #[test]
    fn enumeration_is_a_bijection() {
        let mask = relevant_mask(Slider::Rook, Square::D4);
        let bits = mask.count_bits();
        assert_eq!(bits, 10);

        let mut seen = HashSet::new();
        for index in 0..1usize << bits {
            let occ = set_occupancy(index, bits, mask);

            // Every subset lies within the mask and appears exactly once.
            assert_eq!(occ & mask, occ);
            assert!(seen.insert(occ.0), "duplicate subset at index {index}");
        }

        assert_eq!(seen.len(), 1 << bits);
    }

    #[test]
    fn single_bit_indices_pick_mask_bits_in_order() {
        let mask = relevant_mask(Slider::Bishop, Square::E4);
        let bits = mask.count_bits();

        let mut rest = mask;
        for k in 0..bits {
            let occ = set_occupancy(1 << k, bits, mask);
            let sq = rest.pop_lsb().unwrap();
            assert_eq!(occ, sq.bb());
        }
    }
}
