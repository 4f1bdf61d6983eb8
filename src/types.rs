//! Core types and data structures for bank prediction

use serde::{Deserialize, Serialize};

/// A known institution: a bank (NUBAN table) or a fintech (phone table)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Institution {
    /// Display name, matched exactly by the ranking rules
    pub name: String,
    /// Institution code as published (3, 5 or 6 digits for banks)
    pub code: String,
}

impl Institution {
    /// Create a new institution entry
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// On-disk shape of a bank or fintech table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionTable {
    pub data: Vec<Institution>,
}

/// How an input string was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Looks like a local phone number once a leading zero is added
    PhoneNumber,
    /// Treated as a 10-digit NUBAN account number
    Nuban,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::PhoneNumber => "phone number",
            InputKind::Nuban => "NUBAN",
        }
    }
}

/// Result of a single prediction call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The input exactly as supplied
    pub input: String,
    /// Which branch produced the candidates
    pub kind: InputKind,
    /// Ranked candidates, most likely first. May be empty.
    pub institutions: Vec<Institution>,
}

impl Prediction {
    /// Most likely institution, if any matched
    pub fn best(&self) -> Option<&Institution> {
        self.institutions.first()
    }
}

/// Errors that can occur while loading tables or predicting
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("Input (NUBAN or phone number) is required")]
    MissingInput,
    #[error("Data error: {0}")]
    Data(String),
    #[error("Institution not found: {0}")]
    InstitutionNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for predictor operations
pub type PredictorResult<T> = Result<T, PredictorError>;
