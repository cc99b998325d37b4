macro_rules! conditional_pub {
    (fn $name:ident $($rest:tt)*) => {
        #[cfg(not(feature = "hide_verification"))]
        pub fn $name $($rest)*

        #[cfg(feature = "hide_verification")]
        fn $name $($rest)*
    };
}

mod error;
pub use error::*;

#[cfg(feature = "c001")]
pub mod moons_umbrellas;
#[cfg(feature = "c001")]
pub use moons_umbrellas as c001;
#[cfg(feature = "c002")]
pub mod reversort;
#[cfg(feature = "c002")]
pub use reversort as c002;
