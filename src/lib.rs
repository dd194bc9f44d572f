pub mod arch;
pub mod config;
pub mod error;
pub mod initialization;
mod neural;
mod training;

pub use config::{Activation, Config, ErrorMeasure, Mode, WeightInitializer};
pub use error::{NetErr, Result};
pub use neural::Neural;
pub use training::Training;
