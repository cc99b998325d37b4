#[cfg(feature = "c001")]
pub mod moons_umbrellas;
#[cfg(feature = "c001")]
pub use moons_umbrellas as c001;
#[cfg(feature = "c002")]
pub mod reversort;
#[cfg(feature = "c002")]
pub use reversort as c002;
