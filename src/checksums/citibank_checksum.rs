use crate::checksums::BankChecksum;
use crate::digits::{scalar_product, window};

pub struct CitibankChecksum;

const WEIGHTS: &[u32] = &[3, 2, 7, 6, 5, 4, 3, 2];

impl BankChecksum for CitibankChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], _: &[u32]) -> bool {
        let Some(&check_digit) = account_digits.get(8) else {
            return false;
        };
        let sum = scalar_product(window(account_digits, 0..8), WEIGHTS);
        (11 - sum % 11) % 10 == check_digit
    }
}
