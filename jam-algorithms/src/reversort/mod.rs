pub mod simulate;
pub use simulate::solve_challenge;
