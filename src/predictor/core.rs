//! Bank predictor that classifies inputs and ranks candidate institutions

use tracing::debug;

use crate::nuban::find_matching_banks;
use crate::predictor::ranking::PredictionRules;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_input, NigerianPhoneValidator};

/// Predicts likely banks or fintechs for a NUBAN or phone number
pub struct BankPredictor<D: InstitutionDirectory> {
    directory: D,
    phone_validator: Box<dyn PhoneNumberValidator>,
    rules: PredictionRules,
}

impl<D: InstitutionDirectory> BankPredictor<D> {
    /// Create a predictor with the Nigerian phone validator and default rules
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            phone_validator: Box::new(NigerianPhoneValidator::new()),
            rules: PredictionRules::default(),
        }
    }

    /// Create a predictor with a custom phone validator
    pub fn with_validator(directory: D, phone_validator: Box<dyn PhoneNumberValidator>) -> Self {
        Self {
            directory,
            phone_validator,
            rules: PredictionRules::default(),
        }
    }

    /// Replace the ranking rules
    pub fn with_rules(mut self, rules: PredictionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn rules(&self) -> &PredictionRules {
        &self.rules
    }

    /// Decide whether the input is a phone number or a NUBAN
    ///
    /// An input counts as a phone number when a leading `0` turns it into a
    /// valid one. This wins over NUBAN interpretation.
    pub fn classify(&self, input: &str) -> InputKind {
        if self.phone_validator.is_valid(&format!("0{}", input)) {
            InputKind::PhoneNumber
        } else {
            InputKind::Nuban
        }
    }

    /// Ranked candidate institutions for `input`
    ///
    /// Fails only for an empty input; anything else yields a possibly empty list.
    pub fn predict(&self, input: &str) -> PredictorResult<Vec<Institution>> {
        Ok(self.predict_detailed(input)?.institutions)
    }

    /// Like [`BankPredictor::predict`], also reporting how the input was read
    pub fn predict_detailed(&self, input: &str) -> PredictorResult<Prediction> {
        validate_input(input)?;

        let kind = self.classify(input);
        let institutions = match kind {
            InputKind::PhoneNumber => self.rules.rank_fintechs(input, self.directory.fintechs()),
            InputKind::Nuban => {
                let candidates = find_matching_banks(input, self.directory.banks());
                self.rules
                    .rank_candidates(input, &candidates)
                    .into_iter()
                    .cloned()
                    .collect()
            }
        };

        debug!(
            kind = kind.as_str(),
            candidates = institutions.len(),
            "prediction complete"
        );

        Ok(Prediction {
            input: input.to_string(),
            kind,
            institutions,
        })
    }
}
