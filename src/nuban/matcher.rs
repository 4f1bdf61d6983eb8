//! Candidate bank matching by check digit

use tracing::trace;

use crate::nuban::check_digit::is_account_valid;
use crate::types::Institution;

/// Collect every bank whose code reproduces the account's check digit
///
/// Banks are returned in table order. Check digits collide across unrelated
/// codes, so zero, one or many matches are all normal outcomes.
pub fn find_matching_banks<'a>(
    account_number: &str,
    banks: &'a [Institution],
) -> Vec<&'a Institution> {
    banks
        .iter()
        .filter(|bank| is_account_valid(account_number, &bank.code))
        .inspect(|bank| trace!(code = %bank.code, name = %bank.name, "check digit matched"))
        .collect()
}
