// Attack generation submodules

pub mod leapers;
pub mod occupancy;
pub mod sliders;

pub use leapers::{king_attack, knight_attack, pawn_attack};
pub use occupancy::set_occupancy;
pub use sliders::{
    BISHOP_RELEVANT_BITS, ROOK_RELEVANT_BITS, edge_mask, relevant_mask, slider_attacks,
};
