use serde::{Deserialize, Serialize};

use crate::bank::Bank;
use crate::checksums::BankChecksum;
use crate::digits::{ACCOUNT_WIDTH, BRANCH_WIDTH};
use crate::error::ValidationError;
use crate::input::{non_negative, FieldInput, NonNegativeInteger};
use crate::stats;

/// A bank account identifier whose fields have been normalized and whose bank is supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankAccount {
    pub bank: Bank,
    pub branch_number: NonNegativeInteger,
    pub account_number: NonNegativeInteger,
}

impl BankAccount {
    /// Normalizes the three fields.
    ///
    /// All fields are parsed before any is range checked, and the bank is looked up
    /// before the branch and account signs are checked, so the error reported for
    /// input with several problems is stable. No field has an upper bound: a bank
    /// number too large for any code is simply unsupported.
    pub fn parse(
        bank_number: &FieldInput,
        branch_number: &FieldInput,
        account_number: &FieldInput,
    ) -> Result<BankAccount, ValidationError> {
        let bank_number = bank_number
            .parse()
            .map_err(ValidationError::BankNumberInvalid)?;
        let branch_number = branch_number
            .parse()
            .map_err(ValidationError::BranchNumberInvalid)?;
        let account_number = account_number
            .parse()
            .map_err(ValidationError::AccountNumberInvalid)?;

        let bank_code = non_negative(bank_number).map_err(ValidationError::BankNumberInvalid)?;
        let Some(bank) = bank_code.to_u64().and_then(Bank::from_code) else {
            return Err(ValidationError::UnsupportedBank(bank_code));
        };

        Ok(BankAccount {
            bank,
            branch_number: non_negative(branch_number)
                .map_err(ValidationError::BranchNumberInvalid)?,
            account_number: non_negative(account_number)
                .map_err(ValidationError::AccountNumberInvalid)?,
        })
    }

    /// Runs the bank's checksum over the account.
    pub fn is_valid(&self) -> bool {
        let account_digits = self.account_number.to_digit_array(ACCOUNT_WIDTH);
        let branch_digits = self.branch_number.to_digit_array(BRANCH_WIDTH);
        // Branch-conditioned rules only name three digit branches, so saturating is safe.
        let branch_number = self.branch_number.saturating_u64();
        let is_valid = self
            .bank
            .is_valid_account(branch_number, &account_digits, &branch_digits);

        tracing::debug!(
            bank = self.bank.name(),
            branch_number = %self.branch_number,
            account_number = %self.account_number,
            is_valid,
            "Checked bank account"
        );
        stats::record_verdict(self.bank, is_valid);
        is_valid
    }
}

/// Checks a bank, branch and account number triple against the bank's check digit scheme.
///
/// Each field may be given as an integer or as decimal text. Returns `Ok(false)` when the
/// numbers are well formed but do not satisfy the checksum, and an error when a field is
/// not a non-negative integer or the bank is not supported.
pub fn validate_bank_account(
    bank_number: impl Into<FieldInput>,
    branch_number: impl Into<FieldInput>,
    account_number: impl Into<FieldInput>,
) -> Result<bool, ValidationError> {
    validate_fields(
        &bank_number.into(),
        &branch_number.into(),
        &account_number.into(),
    )
}

fn validate_fields(
    bank_number: &FieldInput,
    branch_number: &FieldInput,
    account_number: &FieldInput,
) -> Result<bool, ValidationError> {
    match BankAccount::parse(bank_number, branch_number, account_number) {
        Ok(account) => Ok(account.is_valid()),
        Err(err) => {
            tracing::warn!(
                ?bank_number,
                ?branch_number,
                ?account_number,
                error = %err,
                "Rejected bank account"
            );
            stats::record_rejection(&err);
            Err(err)
        }
    }
}

/// A validation request in the shape used by JSON test fixtures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationRequest {
    pub bank_number: FieldInput,
    #[serde(alias = "bank_branch_number")]
    pub branch_number: FieldInput,
    pub account_number: FieldInput,
}

impl ValidationRequest {
    pub fn new(
        bank_number: impl Into<FieldInput>,
        branch_number: impl Into<FieldInput>,
        account_number: impl Into<FieldInput>,
    ) -> Self {
        Self {
            bank_number: bank_number.into(),
            branch_number: branch_number.into(),
            account_number: account_number.into(),
        }
    }

    pub fn validate(&self) -> Result<bool, ValidationError> {
        validate_fields(&self.bank_number, &self.branch_number, &self.account_number)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::InvalidFieldReason;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;
    use strum::IntoEnumIterator;

    #[test]
    fn known_accounts() {
        assert_eq!(validate_bank_account(11, 111, 32018), Ok(true));
        assert_eq!(validate_bank_account(11, 111, 32019), Ok(false));
        assert_eq!(validate_bank_account(20, 6, 160778), Ok(true));
        assert_eq!(validate_bank_account(20, 6, 160779), Ok(false));
        assert_eq!(validate_bank_account(4, 284, 50067), Ok(true));
        assert_eq!(validate_bank_account(9, 0, 59121900), Ok(true));
    }

    #[test]
    fn text_and_integer_fields_agree() {
        for (bank, branch, account) in [(11, 111, 32018), (11, 111, 32019), (10, 912, 12345678)]
        {
            let expected = validate_bank_account(bank, branch, account);
            assert_eq!(
                validate_bank_account(bank.to_string(), branch.to_string(), account.to_string()),
                expected
            );
            assert_eq!(
                validate_bank_account(bank, branch.to_string(), account),
                expected
            );
        }
        assert_eq!(validate_bank_account("11", "0111", "000032018"), Ok(true));
        assert_eq!(validate_bank_account(Bank::Discount, 111, 32018), Ok(true));
    }

    #[test]
    fn unsupported_banks() {
        for code in [0, 1, 5, 99, 1000] {
            assert_eq!(
                validate_bank_account(code, 111, 32018),
                Err(ValidationError::UnsupportedBank(NonNegativeInteger::from(
                    code as u64
                )))
            );
        }
        // the bank is looked up before the branch and account signs are checked
        assert_eq!(
            validate_bank_account(99, -1, -1),
            Err(ValidationError::UnsupportedBank(NonNegativeInteger::from(99)))
        );
    }

    #[test]
    fn field_errors() {
        assert_eq!(
            validate_bank_account(-11, 111, 32018),
            Err(ValidationError::BankNumberInvalid(InvalidFieldReason::Negative))
        );
        assert_eq!(
            validate_bank_account("eleven", 111, 32018),
            Err(ValidationError::BankNumberInvalid(
                InvalidFieldReason::NotAnInteger
            ))
        );
        assert_eq!(
            validate_bank_account(11, -111, 32018),
            Err(ValidationError::BranchNumberInvalid(
                InvalidFieldReason::Negative
            ))
        );
        assert_eq!(
            validate_bank_account(11, "1a1", 32018),
            Err(ValidationError::BranchNumberInvalid(
                InvalidFieldReason::NotAnInteger
            ))
        );
        assert_eq!(
            validate_bank_account(11, 111, "-32018"),
            Err(ValidationError::AccountNumberInvalid(
                InvalidFieldReason::Negative
            ))
        );
        assert_eq!(
            validate_bank_account(11, 111, "32O18"),
            Err(ValidationError::AccountNumberInvalid(
                InvalidFieldReason::NotAnInteger
            ))
        );
    }

    #[test]
    fn unparseable_fields_are_reported_before_range_errors() {
        assert_eq!(
            validate_bank_account(-1, "x", 32018),
            Err(ValidationError::BranchNumberInvalid(
                InvalidFieldReason::NotAnInteger
            ))
        );
        assert_eq!(
            validate_bank_account(99, 111, "x"),
            Err(ValidationError::AccountNumberInvalid(
                InvalidFieldReason::NotAnInteger
            ))
        );
    }

    #[test]
    fn bank_numbers_have_no_upper_bound() {
        let err = validate_bank_account("18446744073709551616", 1, 1).unwrap_err();
        assert_eq!(err.kind(), "unsupported_bank");
        assert_eq!(err.to_string(), "Unsupported bank number 18446744073709551616");
        assert_eq!(
            validate_bank_account(u64::MAX, 1, 1).unwrap_err().kind(),
            "unsupported_bank"
        );
        // leading zeros do not make a code unsupported
        assert_eq!(
            validate_bank_account("000000000000000000000011", 111, 32018),
            Ok(true)
        );
    }

    #[test]
    fn branch_and_account_numbers_have_no_upper_bound() {
        assert_eq!(validate_bank_account(54, 1, "99999999999999999999"), Ok(true));
        assert_eq!(
            validate_bank_account(54, "99999999999999999999", "99999999999999999999"),
            Ok(true)
        );
        // Digit arrays are not truncated: the nine digit weights apply to the leading digits.
        assert_eq!(
            validate_bank_account(11, 111, "100100000000000000000"),
            Ok(true)
        );
        assert_eq!(
            validate_bank_account(11, 111, "100100001000000000000"),
            Ok(false)
        );
        // a huge branch never matches a special branch
        assert_eq!(
            validate_bank_account(23, "100000000000000000101", 500000),
            Ok(true)
        );
        assert_eq!(
            validate_bank_account(11, 111, u64::MAX),
            validate_bank_account(11, 111, "18446744073709551615")
        );
    }

    #[test]
    fn normalized_fields_can_be_validated_again() {
        let account = BankAccount::parse(
            &FieldInput::from(20),
            &FieldInput::from("006"),
            &FieldInput::from("160778"),
        )
        .unwrap();
        let branch = account.branch_number.to_u64().unwrap();
        let number = account.account_number.to_u64().unwrap();
        assert_eq!(validate_bank_account(account.bank, branch, number), Ok(true));
    }

    #[test]
    fn jerusalem_accepts_everything() {
        for (branch, account) in [(0, 0), (1, 1), (999, 999999999), (12345, u32::MAX)] {
            assert_eq!(validate_bank_account(54, branch, account), Ok(true));
        }
    }

    #[test]
    fn results_do_not_depend_on_earlier_calls() {
        let first = validate_bank_account(20, 6, 160778);
        for bank in Bank::iter() {
            let _ = validate_bank_account(bank, 123, 456789);
        }
        let _ = validate_bank_account(99, 1, 1);
        assert_eq!(validate_bank_account(20, 6, 160778), first);
    }

    #[test]
    fn request_from_fixture_json() {
        let request: ValidationRequest = serde_json::from_str(
            r#"{"bank_number": 11, "bank_branch_number": "111", "account_number": 32018}"#,
        )
        .unwrap();
        assert_eq!(request, ValidationRequest::new(11, "111", 32018));
        assert_eq!(request.validate(), Ok(true));
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            validate_bank_account(11, 111, 32018).unwrap();
            validate_bank_account(11, 111, 32018).unwrap();
            validate_bank_account(11, 111, 32019).unwrap();
            validate_bank_account(99, 111, 32019).unwrap_err();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let valid_key = Key::from_parts(
            "bank_account.validations",
            vec![Label::new("bank", "DISCOUNT"), Label::new("result", "valid")],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, valid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

        let invalid_key = Key::from_parts(
            "bank_account.validations",
            vec![Label::new("bank", "DISCOUNT"), Label::new("result", "invalid")],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, invalid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let rejected_key = Key::from_parts(
            "bank_account.rejections",
            vec![Label::new("reason", "unsupported_bank")],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, rejected_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }
}
