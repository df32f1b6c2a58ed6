use crate::checksums::{full_account_sum, BankChecksum};

/// Used for Discount and Mercantile accounts.
pub struct DiscountChecksum;

impl BankChecksum for DiscountChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], _: &[u32]) -> bool {
        matches!(full_account_sum(account_digits) % 11, 0 | 2 | 4)
    }
}
