use crate::checksums::BankChecksum;
use crate::digits::{scalar_product, two_digit_number, window};

pub struct IgudChecksum;

const ACCOUNT_WEIGHTS: &[u32] = &[7, 6, 5, 4, 3, 2];
const BRANCH_WEIGHTS: &[u32] = &[10, 9, 8];
const VALID_REMAINDERS: &[u32] = &[90, 72, 70, 60, 20];

impl BankChecksum for IgudChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], branch_digits: &[u32]) -> bool {
        // The control digits are the last two account digits and are added as a number.
        let Some(control_digits) = two_digit_number(account_digits, 7) else {
            return false;
        };
        let sum = scalar_product(window(account_digits, 1..9), ACCOUNT_WEIGHTS)
            + scalar_product(window(branch_digits, 0..3), BRANCH_WEIGHTS)
            + control_digits;
        VALID_REMAINDERS.contains(&(sum % 100))
    }
}
