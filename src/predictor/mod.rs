//! Predictor module containing input classification and candidate ranking

pub mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::*;
