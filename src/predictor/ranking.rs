//! Candidate ranking rules
//!
//! The rules are plain data so alternative tables (different naming, a
//! different promoted bank) can be loaded from JSON without touching the
//! ranking logic.

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Name of the microfinance bank that gets special handling
pub const MONIEPOINT: &str = "MONIEPOINT MICROFINANCE BANK";

/// Code appended to phone-number predictions for the promoted bank
pub const MONIEPOINT_CODE: &str = "50515";

const PROMOTED_PREFIXES: [&str; 13] = [
    "56", "54", "81", "50", "53", "55", "82", "63", "58", "57", "59", "65", "90",
];

const POPULAR_BANKS: [&str; 23] = [
    "OPAY",
    MONIEPOINT,
    "PAGA",
    "KUDA MICROFINANCE BANK",
    "PALMPAY",
    "UNITED BANK FOR AFRICA",
    "ECOBANK",
    "CARBON",
    "PROVIDUS BANK",
    "UNION BANK OF NIGERIA",
    "POLARIS BANK",
    "STERLING BANK",
    "TITAN-PAYSTACK",
    "9 Payment Service Bank",
    "ZENITH BANK",
    "FIRST BANK OF NIGERIA",
    "Fairmoney Microfinance Bank",
    "ACCESS BANK",
    "ACCESS(DIAMOND) BANK",
    "GTBANK PLC",
    "WEMA BANK",
    "SMARTCASH PAYMENT SERVICE BANK",
    "TITAN TRUST BANK",
];

const PHONE_EXTRA_PREFIXES: [&str; 2] = ["90", "81"];

/// Ranking and appendix rules applied on top of the raw candidate sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionRules {
    /// Bank moved to the front of NUBAN candidates for matching prefixes
    pub promoted_bank: String,
    /// Account prefixes that trigger the promotion
    pub promoted_prefixes: Vec<String>,
    /// Priority list of bank names, most popular first
    pub popular_banks: Vec<String>,
    /// Phone prefixes that add `phone_extra` to the fintech list
    pub phone_extra_prefixes: Vec<String>,
    /// Entry appended to fintech predictions for `phone_extra_prefixes`
    pub phone_extra: Institution,
}

impl Default for PredictionRules {
    fn default() -> Self {
        Self {
            promoted_bank: MONIEPOINT.to_string(),
            promoted_prefixes: PROMOTED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            popular_banks: POPULAR_BANKS.iter().map(|n| n.to_string()).collect(),
            phone_extra_prefixes: PHONE_EXTRA_PREFIXES.iter().map(|p| p.to_string()).collect(),
            phone_extra: Institution::new(MONIEPOINT, MONIEPOINT_CODE),
        }
    }
}

impl PredictionRules {
    /// Parse rules from JSON; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> PredictorResult<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject rules that could never be applied sensibly
    pub fn validate(&self) -> PredictorResult<()> {
        if self.promoted_bank.trim().is_empty() && !self.promoted_prefixes.is_empty() {
            return Err(PredictorError::Validation(
                "Promoted bank name cannot be empty when promotion prefixes are set".to_string(),
            ));
        }

        if !self.phone_extra_prefixes.is_empty() && self.phone_extra.name.trim().is_empty() {
            return Err(PredictorError::Validation(
                "Phone appendix entry needs a name when phone prefixes are set".to_string(),
            ));
        }

        if self
            .promoted_prefixes
            .iter()
            .chain(&self.phone_extra_prefixes)
            .any(|p| p.trim().is_empty())
        {
            return Err(PredictorError::Validation(
                "Rule prefixes cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the NUBAN input qualifies for the promoted bank
    pub fn is_promoted_prefix(&self, input: &str) -> bool {
        self.promoted_prefixes.iter().any(|p| input.starts_with(p.as_str()))
    }

    /// Whether the phone input qualifies for the appended entry
    pub fn wants_phone_extra(&self, input: &str) -> bool {
        self.phone_extra_prefixes.iter().any(|p| input.starts_with(p.as_str()))
    }

    /// Build the phone-number prediction from the fintech table
    pub fn rank_fintechs(&self, input: &str, fintechs: &[Institution]) -> Vec<Institution> {
        let mut ranked = fintechs.to_vec();
        if self.wants_phone_extra(input) {
            ranked.push(self.phone_extra.clone());
        }
        ranked
    }

    /// Order NUBAN candidates for presentation
    ///
    /// Output is popular banks in priority order, then the promoted bank if
    /// it qualified and was not already placed by popularity, then everything
    /// else in table order. A promoted bank that is also popular lands at its
    /// popularity rank, so promotion only pins it to the front when nothing
    /// more popular matched.
    pub fn rank_candidates<'a>(
        &self,
        input: &str,
        candidates: &[&'a Institution],
    ) -> Vec<&'a Institution> {
        let mut taken = vec![false; candidates.len()];
        let mut ranked = Vec::with_capacity(candidates.len());

        let promoted = if self.is_promoted_prefix(input) {
            candidates.iter().position(|b| b.name == self.promoted_bank)
        } else {
            None
        };

        // A promoted entry sits at the front of the working list, so name
        // lookups for it must find that entry before any same-named one.
        let lookup_order: Vec<usize> = promoted
            .into_iter()
            .chain((0..candidates.len()).filter(|&i| Some(i) != promoted))
            .collect();

        for name in &self.popular_banks {
            if let Some(&i) = lookup_order
                .iter()
                .find(|&&i| !taken[i] && candidates[i].name == *name)
            {
                taken[i] = true;
                ranked.push(candidates[i]);
            }
        }

        ranked.extend(
            lookup_order
                .iter()
                .filter(|&&i| !taken[i])
                .map(|&i| candidates[i]),
        );

        ranked
    }
}
