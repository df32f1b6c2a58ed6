use crate::checksums::{branch_and_account_remainder, BankChecksum};

pub struct MasadChecksum;

/// Branches where a remainder of 2 is also accepted.
const SPECIAL_BRANCHES: &[u64] = &[
    154, 166, 178, 181, 183, 191, 192, 503, 505, 507, 515, 516, 527, 539,
];

impl BankChecksum for MasadChecksum {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool {
        match branch_and_account_remainder(account_digits, branch_digits) {
            0 => true,
            2 => SPECIAL_BRANCHES.contains(&branch_number),
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::checksums::test_utils::check;
    use crate::checksums::*;

    #[test]
    fn test_valid_masad_accounts() {
        let valid_accounts = vec![(154, 123404), (154, 123406), (200, 123408)];
        for (branch, account) in valid_accounts {
            assert!(check(&MasadChecksum, branch, account), "{branch}/{account}");
        }
    }

    #[test]
    fn test_invalid_masad_accounts() {
        let invalid_accounts = vec![
            (154, 123405),
            (200, 123406),
            // remainder 2 outside the special branches
            (200, 123418),
        ];
        for (branch, account) in invalid_accounts {
            assert!(!check(&MasadChecksum, branch, account), "{branch}/{account}");
        }
    }
}
