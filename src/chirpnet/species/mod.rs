pub mod clean;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use error::{Result, SpeciesError};
