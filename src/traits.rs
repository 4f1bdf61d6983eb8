//! Traits for the static data sources and phone validation the predictor depends on

use crate::types::*;

/// Read-only source of the bank and fintech tables
///
/// Implementations are expected to load their data once and hand out
/// borrowed views; the predictor never mutates either table.
pub trait InstitutionDirectory: Send + Sync {
    /// All known banks, in table order
    fn banks(&self) -> &[Institution];

    /// All known fintech providers, in table order
    fn fintechs(&self) -> &[Institution];

    /// Find a bank by exact code, falling back to a case-insensitive name match
    fn find_bank(&self, query: &str) -> Option<&Institution> {
        let query = query.trim();
        self.banks()
            .iter()
            .find(|bank| bank.code == query)
            .or_else(|| {
                self.banks()
                    .iter()
                    .find(|bank| bank.name.eq_ignore_ascii_case(query))
            })
    }

    /// Like [`InstitutionDirectory::find_bank`], returning an error when nothing matches
    fn find_bank_required(&self, query: &str) -> PredictorResult<&Institution> {
        self.find_bank(query)
            .ok_or_else(|| PredictorError::InstitutionNotFound(query.to_string()))
    }
}

/// Phone number format check used to route inputs to the fintech branch
pub trait PhoneNumberValidator: Send + Sync {
    /// Whether `candidate` is a well-formed phone number
    fn is_valid(&self, candidate: &str) -> bool;
}
