//! In-memory institution directory backed by JSON tables

use std::path::Path;
use tracing::{debug, warn};

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{is_usable_bank_code, validate_institution};

const BUNDLED_BANKS: &str = include_str!("../../data/banks.json");
const BUNDLED_FINTECHS: &str = include_str!("../../data/fintechs.json");

/// Immutable bank and fintech tables, loaded once
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDirectory {
    banks: Vec<Institution>,
    fintechs: Vec<Institution>,
}

impl StaticDirectory {
    /// Create a directory from already-loaded tables
    pub fn new(banks: Vec<Institution>, fintechs: Vec<Institution>) -> PredictorResult<Self> {
        for institution in banks.iter().chain(&fintechs) {
            validate_institution(institution)?;
        }

        for bank in banks.iter().filter(|b| !is_usable_bank_code(&b.code)) {
            warn!(
                code = %bank.code,
                name = %bank.name,
                "bank code cannot be normalized, it will never match"
            );
        }

        debug!(
            banks = banks.len(),
            fintechs = fintechs.len(),
            "institution directory loaded"
        );

        Ok(Self { banks, fintechs })
    }

    /// Directory built from the tables shipped with the crate
    pub fn bundled() -> PredictorResult<Self> {
        Self::from_json(BUNDLED_BANKS, BUNDLED_FINTECHS)
    }

    /// Parse both tables from `{ "data": [...] }` JSON documents
    pub fn from_json(banks_json: &str, fintechs_json: &str) -> PredictorResult<Self> {
        let banks: InstitutionTable = serde_json::from_str(banks_json)?;
        let fintechs: InstitutionTable = serde_json::from_str(fintechs_json)?;
        Self::new(banks.data, fintechs.data)
    }

    /// Load both tables from JSON files
    pub fn load(banks_path: &Path, fintechs_path: &Path) -> PredictorResult<Self> {
        let banks = std::fs::read_to_string(banks_path)?;
        let fintechs = std::fs::read_to_string(fintechs_path)?;
        Self::from_json(&banks, &fintechs)
    }

    /// Bundled tables with either side optionally replaced from a file
    pub fn load_or_bundled(
        banks_path: Option<&Path>,
        fintechs_path: Option<&Path>,
    ) -> PredictorResult<Self> {
        let banks = match banks_path {
            Some(path) => std::fs::read_to_string(path)?,
            None => BUNDLED_BANKS.to_string(),
        };
        let fintechs = match fintechs_path {
            Some(path) => std::fs::read_to_string(path)?,
            None => BUNDLED_FINTECHS.to_string(),
        };
        Self::from_json(&banks, &fintechs)
    }
}

impl InstitutionDirectory for StaticDirectory {
    fn banks(&self) -> &[Institution] {
        &self.banks
    }

    fn fintechs(&self) -> &[Institution] {
        &self.fintechs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_load() {
        let directory = StaticDirectory::bundled().unwrap();

        assert!(!directory.banks().is_empty());
        assert!(!directory.fintechs().is_empty());
        assert!(directory
            .banks()
            .iter()
            .any(|b| b.name == "MONIEPOINT MICROFINANCE BANK" && b.code == "50515"));
    }

    #[test]
    fn test_bundled_bank_codes_are_unique_and_usable() {
        let directory = StaticDirectory::bundled().unwrap();
        let banks = directory.banks();

        for bank in banks {
            assert!(is_usable_bank_code(&bank.code), "{} has code {}", bank.name, bank.code);
            assert_eq!(banks.iter().filter(|b| b.code == bank.code).count(), 1);
        }
    }

    #[test]
    fn test_from_json() {
        let directory = StaticDirectory::from_json(
            r#"{ "data": [ { "name": "ACCESS BANK", "code": "044" } ] }"#,
            r#"{ "data": [] }"#,
        )
        .unwrap();

        assert_eq!(directory.banks(), &[Institution::new("ACCESS BANK", "044")]);
        assert!(directory.fintechs().is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_name() {
        let result = StaticDirectory::from_json(
            r#"{ "data": [ { "name": "", "code": "044" } ] }"#,
            r#"{ "data": [] }"#,
        );
        assert!(matches!(result, Err(PredictorError::Data(_))));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let result = StaticDirectory::from_json(r#"[ "ACCESS BANK" ]"#, r#"{ "data": [] }"#);
        assert!(matches!(result, Err(PredictorError::Json(_))));
    }

    #[test]
    fn test_unusable_codes_are_kept() {
        let directory = StaticDirectory::new(
            vec![Institution::new("ODD BANK", "1234")],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(directory.banks().len(), 1);
    }

    #[test]
    fn test_find_bank_by_code_and_name() {
        let directory = StaticDirectory::bundled().unwrap();

        assert_eq!(directory.find_bank("058").unwrap().name, "GTBANK PLC");
        assert_eq!(directory.find_bank("gtbank plc").unwrap().code, "058");
        assert!(directory.find_bank("NOT A BANK").is_none());
        assert!(matches!(
            directory.find_bank_required("NOT A BANK"),
            Err(PredictorError::InstitutionNotFound(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = StaticDirectory::load(
            Path::new("/nonexistent/banks.json"),
            Path::new("/nonexistent/fintechs.json"),
        );
        assert!(matches!(result, Err(PredictorError::Io(_))));
    }
}
