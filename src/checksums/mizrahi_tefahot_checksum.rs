use std::ops::RangeInclusive;

use crate::checksums::{branch_and_account_remainder, BankChecksum};
use crate::digits::DigitArray;

pub struct MizrahiTefahotChecksum;

/// Branches in this range are checked as if they were numbered `BRANCH_OFFSET` lower.
const OFFSET_BRANCHES: RangeInclusive<u64> = 401..=799;
const BRANCH_OFFSET: u64 = 400;

impl BankChecksum for MizrahiTefahotChecksum {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool {
        let shifted;
        let branch_digits: &[u32] = if OFFSET_BRANCHES.contains(&branch_number) {
            shifted = DigitArray::branch(branch_number - BRANCH_OFFSET);
            &shifted
        } else {
            branch_digits
        };
        matches!(
            branch_and_account_remainder(account_digits, branch_digits),
            0 | 2 | 4
        )
    }
}
