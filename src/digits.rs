use std::ops::{Deref, Range};

/// Number of digits a branch number is expanded to.
pub const BRANCH_WIDTH: usize = 3;
/// Number of digits an account number is expanded to.
pub const ACCOUNT_WIDTH: usize = 9;

/// Decimal digits of a number, most significant first, left padded with zeros.
///
/// The padding only ever adds digits: a value wider than the requested width keeps
/// all of its digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitArray(Vec<u32>);

impl DigitArray {
    pub fn new(value: u64, width: usize) -> Self {
        let mut digits = Vec::with_capacity(width);
        let mut remaining = value;
        loop {
            digits.push((remaining % 10) as u32);
            remaining /= 10;
            if remaining == 0 {
                break;
            }
        }
        while digits.len() < width {
            digits.push(0);
        }
        digits.reverse();
        DigitArray(digits)
    }

    /// Digits of a decimal string of any length. Characters other than ASCII digits are skipped.
    pub fn from_decimal(decimal: &str, width: usize) -> Self {
        let digits: Vec<u32> = decimal.chars().filter_map(|c| c.to_digit(10)).collect();
        let padding = width.saturating_sub(digits.len());
        let mut padded = vec![0; padding];
        padded.extend(digits);
        if padded.is_empty() {
            padded.push(0);
        }
        DigitArray(padded)
    }

    pub fn branch(branch_number: u64) -> Self {
        Self::new(branch_number, BRANCH_WIDTH)
    }

    pub fn account(account_number: u64) -> Self {
        Self::new(account_number, ACCOUNT_WIDTH)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Deref for DigitArray {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

/// Weighted sum of `digits` and `weights`. Extra elements of the longer side are ignored.
#[inline]
pub fn scalar_product(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Sub-slice of `digits` clamped to its length.
#[inline]
pub(crate) fn window(digits: &[u32], range: Range<usize>) -> &[u32] {
    let end = range.end.min(digits.len());
    let start = range.start.min(end);
    &digits[start..end]
}

/// The two-digit number formed by `digits[index]` and `digits[index + 1]`.
#[inline]
pub(crate) fn two_digit_number(digits: &[u32], index: usize) -> Option<u32> {
    let tens = digits.get(index)?;
    let ones = digits.get(index + 1)?;
    Some(tens * 10 + ones)
}
