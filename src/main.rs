use lodestone::core::{Slider, Square};
use lodestone::magics::{MagicSearchError, find_magic};
use lodestone::utils::PRNG;

/// Searches magic numbers for every square and prints them as Rust
/// array entries, rook block first. One generator is shared across the
/// whole run, so the output is identical for a given seed.
fn main() -> Result<(), MagicSearchError> {
    let mut rng = PRNG::default();

    println!("rook magic numbers:");
    for sq in Square::iter() {
        println!("    {:#x},", find_magic(&mut rng, Slider::Rook, sq)?);
    }

    println!();
    println!("bishop magic numbers:");
    for sq in Square::iter() {
        println!("    {:#x},", find_magic(&mut rng, Slider::Bishop, sq)?);
    }

    Ok(())
}
