use crate::checksums::{branch_and_account_remainder, BankChecksum};

pub struct YahavChecksum;

impl BankChecksum for YahavChecksum {
    fn is_valid_account(&self, _: u64, account_digits: &[u32], branch_digits: &[u32]) -> bool {
        matches!(
            branch_and_account_remainder(account_digits, branch_digits),
            0 | 2
        )
    }
}

#[cfg(test)]
mod test {
    use crate::checksums::test_utils::check;
    use crate::checksums::*;

    #[test]
    fn test_valid_yahav_accounts() {
        let valid_accounts = vec![
            // remainder 0
            (284, 50067),
            // remainder 2
            (284, 50069),
            (284, 50008),
        ];
        for (branch, account) in valid_accounts {
            assert!(check(&YahavChecksum, branch, account), "{branch}/{account}");
        }
    }

    #[test]
    fn test_invalid_yahav_accounts() {
        let invalid_accounts = vec![(284, 50068), (284, 50060), (285, 50067)];
        for (branch, account) in invalid_accounts {
            assert!(!check(&YahavChecksum, branch, account), "{branch}/{account}");
        }
    }
}
