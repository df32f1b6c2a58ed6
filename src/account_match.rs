use crate::validation::validate_bank_account;

/// Checks a piece of text that was matched as a possible identifier.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Validates text such as `12-600-123456` or `bank 12 branch 600 account 123456`: the
/// match must hold exactly three digit groups, read as bank, branch and account.
/// Anything that cannot be validated counts as no match.
pub struct IsraeliBankAccountChecksum;

impl Validator for IsraeliBankAccountChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let mut groups = regex_match
            .split(|c: char| !c.is_ascii_digit())
            .filter(|group| !group.is_empty());

        let (Some(bank), Some(branch), Some(account), None) =
            (groups.next(), groups.next(), groups.next(), groups.next())
        else {
            return false;
        };
        validate_bank_account(bank, branch, account).unwrap_or(false)
    }
}
