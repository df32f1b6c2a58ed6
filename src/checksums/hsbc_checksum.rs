use crate::checksums::BankChecksum;

/// HSBC accounts carry no check digit; only two branches restrict which accounts exist.
pub struct HsbcChecksum;

impl BankChecksum for HsbcChecksum {
    fn is_valid_account(&self, branch_number: u64, account_digits: &[u32], _: &[u32]) -> bool {
        match branch_number {
            101 => account_digits.get(3) == Some(&4),
            // account 001 is the only account at this branch
            102 => account_digits.ends_with(&[0, 0, 1]),
            _ => true,
        }
    }
}
