use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bank::Bank;
use crate::digits::DigitArray;
use crate::error::InvalidFieldReason;

/// A bank, branch or account number as supplied by the caller, either as an
/// integer or as its decimal text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldInput {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

/// A non-negative integer of any size, kept as its decimal digits without leading zeros.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonNegativeInteger(String);

impl NonNegativeInteger {
    /// `digits` must be ASCII digits only.
    fn from_ascii_digits(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            NonNegativeInteger("0".to_string())
        } else {
            NonNegativeInteger(significant.to_string())
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The value as a `u64`, or `u64::MAX` when it does not fit.
    pub fn saturating_u64(&self) -> u64 {
        self.to_u64().unwrap_or(u64::MAX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_digit_array(&self, width: usize) -> DigitArray {
        DigitArray::from_decimal(&self.0, width)
    }
}

impl From<u64> for NonNegativeInteger {
    fn from(value: u64) -> Self {
        NonNegativeInteger(value.to_string())
    }
}

impl fmt::Display for NonNegativeInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A field read as an integer but not yet checked for its sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignedInteger {
    negative: bool,
    magnitude: NonNegativeInteger,
}

impl SignedInteger {
    fn new(negative: bool, magnitude: NonNegativeInteger) -> Self {
        // -0 is zero
        let negative = negative && !magnitude.is_zero();
        SignedInteger {
            negative,
            magnitude,
        }
    }
}

impl FieldInput {
    /// First normalization stage: read the field as a (possibly negative) integer.
    pub(crate) fn parse(&self) -> Result<SignedInteger, InvalidFieldReason> {
        match self {
            FieldInput::Number(value) => Ok(SignedInteger::new(
                *value < 0,
                NonNegativeInteger::from(value.unsigned_abs()),
            )),
            FieldInput::Unsigned(value) => {
                Ok(SignedInteger::new(false, NonNegativeInteger::from(*value)))
            }
            FieldInput::Text(text) => {
                let text = text.trim();
                let (negative, digits) = match text.strip_prefix('-') {
                    Some(digits) => (true, digits),
                    None => (false, text.strip_prefix('+').unwrap_or(text)),
                };
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(InvalidFieldReason::NotAnInteger);
                }
                Ok(SignedInteger::new(
                    negative,
                    NonNegativeInteger::from_ascii_digits(digits),
                ))
            }
        }
    }
}

/// Second normalization stage: only non-negative values are accepted. There is no upper bound.
pub(crate) fn non_negative(value: SignedInteger) -> Result<NonNegativeInteger, InvalidFieldReason> {
    if value.negative {
        return Err(InvalidFieldReason::Negative);
    }
    Ok(value.magnitude)
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_owned())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<&String> for FieldInput {
    fn from(value: &String) -> Self {
        FieldInput::Text(value.clone())
    }
}

impl From<i64> for FieldInput {
    fn from(value: i64) -> Self {
        FieldInput::Number(value)
    }
}

impl From<u64> for FieldInput {
    fn from(value: u64) -> Self {
        FieldInput::Unsigned(value)
    }
}

impl From<usize> for FieldInput {
    fn from(value: usize) -> Self {
        FieldInput::Unsigned(value as u64)
    }
}

impl From<i32> for FieldInput {
    fn from(value: i32) -> Self {
        FieldInput::Number(i64::from(value))
    }
}

impl From<u32> for FieldInput {
    fn from(value: u32) -> Self {
        FieldInput::Number(i64::from(value))
    }
}

impl From<u16> for FieldInput {
    fn from(value: u16) -> Self {
        FieldInput::Number(i64::from(value))
    }
}

impl From<u8> for FieldInput {
    fn from(value: u8) -> Self {
        FieldInput::Number(i64::from(value))
    }
}

impl From<Bank> for FieldInput {
    fn from(bank: Bank) -> Self {
        FieldInput::Number(i64::from(bank.code()))
    }
}
