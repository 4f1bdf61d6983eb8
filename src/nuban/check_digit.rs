//! NUBAN check-digit algorithm
//!
//! The check digit is derived from a 15-digit cipher made of the bank code
//! (normalized to 6 digits) followed by the 9-digit serial number:
//!
//! ```text
//! sum   = A*3 + B*7 + C*3 + D*3 + E*7 + F*3 + ... + N*7 + O*3
//! digit = 10 - (sum mod 10), or 0 when that is 10
//! ```

/// Length of a full NUBAN account number
pub const NUBAN_LENGTH: usize = 10;

/// Length of the serial part of a NUBAN (everything but the check digit)
pub const SERIAL_LENGTH: usize = 9;

/// Length of a bank code after normalization
pub const BANK_CODE_LENGTH: usize = 6;

/// Weights applied to each digit of the cipher
pub const WEIGHTS: [u32; BANK_CODE_LENGTH + SERIAL_LENGTH] =
    [3, 7, 3, 3, 7, 3, 3, 7, 3, 3, 7, 3, 3, 7, 3];

/// Normalize a bank code to the 6-digit form used in the cipher
///
/// Non-digit characters are dropped first. 3-digit codes (commercial banks)
/// get a `000` prefix, 5-digit codes (microfinance and other institutions)
/// get a `9` prefix, 6-digit codes pass through. Anything else is `None`.
pub fn normalize_bank_code(bank_code: &str) -> Option<String> {
    let cleaned: String = bank_code.chars().filter(|c| c.is_ascii_digit()).collect();

    let normalized = match cleaned.len() {
        3 => format!("000{}", cleaned),
        5 => format!("9{}", cleaned),
        _ => cleaned,
    };

    (normalized.len() == BANK_CODE_LENGTH).then_some(normalized)
}

/// Compute the expected check digit for a serial number under a bank code
///
/// Returns `None` when the bank code cannot be normalized or the serial is
/// not exactly nine ASCII digits. `None` never equals a real check digit, so
/// callers can treat it as a non-match.
pub fn compute_check_digit(serial_number: &str, bank_code: &str) -> Option<u8> {
    if serial_number.len() != SERIAL_LENGTH
        || !serial_number.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let code = normalize_bank_code(bank_code)?;

    let sum: u32 = code
        .bytes()
        .chain(serial_number.bytes())
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    let check_digit = (10 - sum % 10) % 10;
    Some(check_digit as u8)
}

/// Check whether `account_number` is a valid NUBAN for `bank_code`
///
/// The account must be exactly ten characters. A non-digit in the check
/// position is a mismatch, not an error.
pub fn is_account_valid(account_number: &str, bank_code: &str) -> bool {
    if account_number.chars().count() != NUBAN_LENGTH {
        return false;
    }

    let mut chars = account_number.chars();
    let serial: String = chars.by_ref().take(SERIAL_LENGTH).collect();
    let actual = chars.next().and_then(|c| c.to_digit(10));

    match (compute_check_digit(&serial, bank_code), actual) {
        (Some(expected), Some(actual)) => u32::from(expected) == actual,
        _ => false,
    }
}
