use crate::checksums::{branch_and_account_remainder, BankChecksum};

pub struct HapoalimChecksum;

impl BankChecksum for HapoalimChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], branch_digits: &[u32]) -> bool {
        matches!(
            branch_and_account_remainder(account_digits, branch_digits),
            0 | 2 | 4 | 6
        )
    }
}
