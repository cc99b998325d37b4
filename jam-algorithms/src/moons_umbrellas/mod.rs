pub mod neighbour_sweep;
pub use neighbour_sweep::solve_challenge;
