use crate::checksums::{branch_and_account_remainder, BankChecksum};

pub struct OtsarHahayalChecksum;

/// Branches where a remainder of 2 is also accepted.
const REMAINDER_2_BRANCHES: &[u64] = &[385, 384, 365, 347, 363, 362, 361];
/// Branches where a remainder of 4 is also accepted.
const REMAINDER_4_BRANCHES: &[u64] = &[363, 362, 361];

impl BankChecksum for OtsarHahayalChecksum {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool {
        match branch_and_account_remainder(account_digits, branch_digits) {
            0 => true,
            2 => REMAINDER_2_BRANCHES.contains(&branch_number),
            4 => REMAINDER_4_BRANCHES.contains(&branch_number),
            _ => false,
        }
    }
}
