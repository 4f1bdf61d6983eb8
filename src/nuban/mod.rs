//! NUBAN check-digit validation and bank matching

pub mod check_digit;
pub mod matcher;

pub use check_digit::*;
pub use matcher::*;
