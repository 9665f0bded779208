pub mod numbers;

use thiserror::Error;

use crate::attacks::{relevant_mask, set_occupancy, slider_attacks};
use crate::core::{Bitboard, Slider, Square};
use crate::utils::PRNG;

/******************************************\
|==========================================|
|               Magic Search               |
|==========================================|
\******************************************/

/// Candidates drawn per square before the search gives up.
pub const SEARCH_BUDGET: usize = 100_000_000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicSearchError {
    #[error("no magic number found for {slider} on {square} within {budget} candidates")]
    BudgetExhausted {
        slider: Slider,
        square: Square,
        budget: usize,
    },
}

/// Hashes an occupancy into a table slot:
/// `(occ * magic) >> (64 - bits)`, where `bits` is the size of the
/// relevant mask and `2^bits` the table size.
#[inline]
pub const fn magic_index(occ: Bitboard, magic: u64, bits: u32) -> usize {
    (occ.0.wrapping_mul(magic) >> (64 - bits)) as usize
}

/// Exhaustive (occupancy, true attack set) pairs for a square, indexed
/// by occupancy number.
fn occupancy_fixture(
    slider: Slider,
    sq: Square,
    mask: Bitboard,
    bits: u32,
) -> Vec<(Bitboard, Bitboard)> {
    (0..1usize << bits)
        .map(|index| {
            let occ = set_occupancy(index, bits, mask);
            (occ, slider_attacks(slider, sq, occ))
        })
        .collect()
}

/// Trial-maps every occupancy through `candidate`. Two occupancies may
/// share a slot only when their attack sets agree; any other collision
/// rejects the candidate.
fn admits(
    candidate: u64,
    bits: u32,
    fixture: &[(Bitboard, Bitboard)],
    used: &mut [Bitboard],
) -> bool {
    // A slider always attacks at least one square, so EMPTY marks an
    // unused slot.
    used.fill(Bitboard::EMPTY);

    for &(occ, attacks) in fixture {
        let idx = magic_index(occ, candidate, bits);

        if used[idx].is_empty() {
            used[idx] = attacks;
        } else if used[idx] != attacks {
            return false;
        }
    }

    true
}

/// Checks a single magic number against the full occupancy enumeration
/// of its square.
pub fn verify_magic(slider: Slider, sq: Square, magic: u64) -> bool {
    let mask = relevant_mask(slider, sq);
    let bits = mask.count_bits();
    let fixture = occupancy_fixture(slider, sq, mask, bits);
    let mut used = vec![Bitboard::EMPTY; fixture.len()];

    admits(magic, bits, &fixture, &mut used)
}

/// Randomized search for a magic number for `slider` on `sq`.
///
/// Draws sparse candidates from `rng` until one hashes every occupancy
/// collision-free. The generator is threaded by `&mut` so a fixed seed
/// reproduces the same constants square after square.
pub fn find_magic(rng: &mut PRNG, slider: Slider, sq: Square) -> Result<u64, MagicSearchError> {
    let mask = relevant_mask(slider, sq);
    let bits = mask.count_bits();
    let fixture = occupancy_fixture(slider, sq, mask, bits);
    let mut used = vec![Bitboard::EMPTY; fixture.len()];

    for _ in 0..SEARCH_BUDGET {
        let candidate = rng.random_sparse_u64();

        // Skip candidates that spread too few mask bits into the top
        // byte of the product; they nearly always collide.
        if (mask.0.wrapping_mul(candidate) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        if admits(candidate, bits, &fixture, &mut used) {
            return Ok(candidate);
        }
    }

    Err(MagicSearchError::BudgetExhausted {
        slider,
        square: sq,
        budget: SEARCH_BUDGET,
    })
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
