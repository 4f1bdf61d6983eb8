//! # NUBAN Predictor
//!
//! Offline prediction of the likely bank behind a Nigerian NUBAN account
//! number, or the likely fintech behind a phone number.
//!
//! ## Features
//!
//! - **NUBAN check digits**: The weighted-sum check-digit algorithm for 3, 5 and 6 digit bank codes
//! - **Candidate matching**: Every bank whose code reproduces the account's check digit
//! - **Ranking**: Popular banks first, with prefix-based promotion for a microfinance bank
//! - **Phone numbers**: Fintech candidates for inputs that read as Nigerian mobile numbers
//! - **Static tables**: Bundled bank and fintech tables, replaceable from JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! let banks = nuban_predictor::predict("5600000011").unwrap();
//! assert_eq!(banks[0].name, "MONIEPOINT MICROFINANCE BANK");
//! ```
//!
//! A predictor over custom tables:
//!
//! ```rust
//! use nuban_predictor::{BankPredictor, Institution, StaticDirectory};
//!
//! let directory = StaticDirectory::new(
//!     vec![Institution::new("ACCESS BANK", "044")],
//!     vec![Institution::new("OPAY", "999992")],
//! )
//! .unwrap();
//! let predictor = BankPredictor::new(directory);
//!
//! assert_eq!(predictor.predict("0000000017").unwrap()[0].code, "044");
//! ```

use std::sync::OnceLock;

pub mod nuban;
pub mod predictor;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use nuban::*;
pub use predictor::*;
pub use traits::*;
pub use types::*;
pub use utils::{NigerianPhoneValidator, StaticDirectory};

static DEFAULT_PREDICTOR: OnceLock<Result<BankPredictor<StaticDirectory>, String>> =
    OnceLock::new();

/// Predictor over the bundled tables, built on first use
pub fn default_predictor() -> PredictorResult<&'static BankPredictor<StaticDirectory>> {
    DEFAULT_PREDICTOR
        .get_or_init(|| {
            StaticDirectory::bundled()
                .map(BankPredictor::new)
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| PredictorError::Data(e.clone()))
}

/// Ranked candidate banks or fintechs for a NUBAN or phone number
///
/// Fails only when `input` is empty.
pub fn predict(input: &str) -> PredictorResult<Vec<Institution>> {
    utils::validate_input(input)?;
    default_predictor()?.predict(input)
}
