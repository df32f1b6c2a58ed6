use crate::checksums::{full_account_sum, BankChecksum};

pub struct IsraelPostChecksum;

impl BankChecksum for IsraelPostChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], _: &[u32]) -> bool {
        full_account_sum(account_digits) % 10 == 0
    }
}
