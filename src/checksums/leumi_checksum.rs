use crate::checksums::BankChecksum;
use crate::digits::{scalar_product, two_digit_number, window};

/// Used for Leumi and Arab-Israel Bank accounts.
///
/// A Leumi account has eight digits: six body digits followed by two control digits.
/// The control digits complete the weighted sum of the branch and body digits plus
/// the account type code to a multiple of 100, for one of the known account types.
pub struct LeumiChecksum;

const ACCOUNT_WEIGHTS: &[u32] = &[7, 6, 5, 4, 3, 2];
const BRANCH_WEIGHTS: &[u32] = &[10, 9, 8];

const ACCOUNT_TYPE_110: u32 = 110;
const ACCOUNT_TYPES: &[u32] = &[ACCOUNT_TYPE_110, 128, 180, 330, 340];

const HEAD_OFFICE_BRANCHES: &[u64] = &[800, 864];
// Values of body digits 4 and 5 (as a two digit number) for which type 110 is tried.
const HEAD_OFFICE_TYPE_110_MARKERS: &[u32] = &[20, 23, 0];
const TYPE_110_MARKERS: &[u32] = &[0];

impl BankChecksum for LeumiChecksum {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool {
        let digits = match account_digits {
            [0, rest @ ..] => rest,
            _ => account_digits,
        };
        let Some(control_digits) = two_digit_number(digits, digits.len().saturating_sub(2)) else {
            return false;
        };

        let total = scalar_product(window(digits, 0..6), ACCOUNT_WEIGHTS)
            + scalar_product(branch_digits, BRANCH_WEIGHTS);
        let try_type_110 = is_type_110_eligible(branch_number, digits);

        ACCOUNT_TYPES
            .iter()
            .filter(|&&account_type| account_type != ACCOUNT_TYPE_110 || try_type_110)
            .any(|account_type| (100 - (total + account_type) % 100) % 100 == control_digits)
    }
}

fn is_type_110_eligible(branch_number: u64, digits: &[u32]) -> bool {
    let Some(marker) = two_digit_number(digits, 4) else {
        return false;
    };
    if HEAD_OFFICE_BRANCHES.contains(&branch_number) {
        HEAD_OFFICE_TYPE_110_MARKERS.contains(&marker)
    } else {
        TYPE_110_MARKERS.contains(&marker)
    }
}
