mod batch;
pub use batch::*;
mod logging;
pub use logging::*;
mod settings;
pub use settings::*;
