use crate::checksums::BankChecksum;
use crate::digits::{two_digit_number, window};

pub struct OneZeroChecksum;

impl BankChecksum for OneZeroChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], branch_digits: &[u32]) -> bool {
        let Some(control_digits) = two_digit_number(account_digits, 7) else {
            return false;
        };
        // Branch digits followed by the account digits without the two control digits,
        // read as a single number, reduced mod 97 as it is read.
        let remainder = branch_digits
            .iter()
            .chain(window(account_digits, 0..7))
            .fold(0, |acc, digit| (acc * 10 + digit) % 97);
        98 - remainder == control_digits
    }
}
