//! Utility modules

pub mod static_directory;
pub mod validation;

pub use static_directory::*;
pub use validation::*;
