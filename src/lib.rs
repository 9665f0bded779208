//! # Lodestone
//!
//! Magic bitboard generation for 8x8 sliding-piece attacks: relevant
//! occupancy masks, exhaustive occupancy enumeration, ray-walked ground
//! truth, and the randomized search for per-square magic constants.
pub mod attacks;
pub mod core;
pub mod magics;
pub mod utils;

pub use crate::core::*;
