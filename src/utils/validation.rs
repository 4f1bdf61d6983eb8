//! Validation utilities

use crate::nuban::normalize_bank_code;
use crate::traits::*;
use crate::types::*;

/// Length of a Nigerian mobile number in local form (`0` + 10 digits)
pub const LOCAL_PHONE_LENGTH: usize = 11;

/// Country calling code for Nigeria
pub const COUNTRY_CODE: &str = "234";

/// Mobile network prefixes in local form
pub const MOBILE_PREFIXES: [&str; 5] = ["070", "080", "081", "090", "091"];

/// Validate that a prediction input was supplied
pub fn validate_input(input: &str) -> PredictorResult<()> {
    if input.is_empty() {
        return Err(PredictorError::MissingInput);
    }
    Ok(())
}

/// Validate a single table entry
///
/// Only the shape is checked. Codes that cannot take part in check-digit
/// computation are kept; they simply never match.
pub fn validate_institution(institution: &Institution) -> PredictorResult<()> {
    if institution.name.trim().is_empty() {
        return Err(PredictorError::Data(format!(
            "Institution with code '{}' has an empty name",
            institution.code
        )));
    }

    if institution.code.trim().is_empty() {
        return Err(PredictorError::Data(format!(
            "Institution '{}' has an empty code",
            institution.name
        )));
    }

    Ok(())
}

/// Whether a bank code can be used for NUBAN check-digit computation
pub fn is_usable_bank_code(code: &str) -> bool {
    normalize_bank_code(code).is_some()
}

/// Nigerian mobile number format check
///
/// Accepts the 11-digit local form (`08012345678`) and the international
/// forms (`2348012345678`, `+2348012345678`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NigerianPhoneValidator {
    prefixes: Vec<String>,
}

impl NigerianPhoneValidator {
    /// Validator for the standard mobile prefixes
    pub fn new() -> Self {
        Self::with_prefixes(MOBILE_PREFIXES.iter().map(|p| p.to_string()).collect())
    }

    /// Validator for a custom set of local-form prefixes
    pub fn with_prefixes(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Convert a phone number to its 11-digit local form
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let digits = raw.strip_prefix('+').unwrap_or(raw);

        let local = match digits.strip_prefix(COUNTRY_CODE) {
            Some(rest) if rest.len() == LOCAL_PHONE_LENGTH - 1 => format!("0{}", rest),
            _ => digits.to_string(),
        };

        let well_formed = local.len() == LOCAL_PHONE_LENGTH
            && local.bytes().all(|b| b.is_ascii_digit())
            && self.prefixes.iter().any(|p| local.starts_with(p.as_str()));

        well_formed.then_some(local)
    }
}

impl Default for NigerianPhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberValidator for NigerianPhoneValidator {
    fn is_valid(&self, candidate: &str) -> bool {
        self.normalize(candidate).is_some()
    }
}
