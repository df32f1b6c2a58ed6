use metrics::counter;

use crate::bank::Bank;
use crate::error::ValidationError;

const VALIDATIONS: &str = "bank_account.validations";
const REJECTIONS: &str = "bank_account.rejections";

/// Counts a checksum verdict, labelled by bank and result.
pub fn record_verdict(bank: Bank, is_valid: bool) {
    let result = if is_valid { "valid" } else { "invalid" };
    counter!(VALIDATIONS, "bank" => bank.name(), "result" => result).increment(1);
}

/// Counts input that never reached a checksum, labelled by error kind.
pub fn record_rejection(error: &ValidationError) {
    counter!(REJECTIONS, "reason" => error.kind()).increment(1);
}
