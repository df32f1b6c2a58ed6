use crate::checksums::{full_account_sum, BankChecksum, ACCOUNT_TAIL_WEIGHTS};
use crate::digits::{scalar_product, window};

/// Used for Beinleumi and Poalei Agudat Israel accounts.
///
/// Older accounts only balance over their last six digits, so that sum is tried when
/// the full nine digit sum fails.
pub struct BeinleumiChecksum;

impl BankChecksum for BeinleumiChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], _: &[u32]) -> bool {
        if matches!(full_account_sum(account_digits) % 11, 0 | 6) {
            return true;
        }
        let sum = scalar_product(window(account_digits, 3..9), ACCOUNT_TAIL_WEIGHTS);
        matches!(sum % 11, 0 | 6)
    }
}
