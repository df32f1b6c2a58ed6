mod beinleumi_checksum;
mod citibank_checksum;
mod discount_checksum;
mod hapoalim_checksum;
mod hsbc_checksum;
mod igud_checksum;
mod israel_post_checksum;
mod jerusalem_checksum;
mod leumi_checksum;
mod masad_checksum;
mod mizrahi_tefahot_checksum;
mod one_zero_checksum;
mod otsar_hahayal_checksum;
mod yahav_checksum;

pub use crate::checksums::beinleumi_checksum::BeinleumiChecksum;
pub use crate::checksums::citibank_checksum::CitibankChecksum;
pub use crate::checksums::discount_checksum::DiscountChecksum;
pub use crate::checksums::hapoalim_checksum::HapoalimChecksum;
pub use crate::checksums::hsbc_checksum::HsbcChecksum;
pub use crate::checksums::igud_checksum::IgudChecksum;
pub use crate::checksums::israel_post_checksum::IsraelPostChecksum;
pub use crate::checksums::jerusalem_checksum::JerusalemChecksum;
pub use crate::checksums::leumi_checksum::LeumiChecksum;
pub use crate::checksums::masad_checksum::MasadChecksum;
pub use crate::checksums::mizrahi_tefahot_checksum::MizrahiTefahotChecksum;
pub use crate::checksums::one_zero_checksum::OneZeroChecksum;
pub use crate::checksums::otsar_hahayal_checksum::OtsarHahayalChecksum;
pub use crate::checksums::yahav_checksum::YahavChecksum;

use crate::digits::{scalar_product, window};

/// A bank specific account number check.
///
/// `account_digits` and `branch_digits` are the zero padded expansions of the account
/// (9 digits) and branch (3 digits) numbers; `branch_number` is the raw branch for
/// rules that depend on which branch holds the account.
pub trait BankChecksum: Send + Sync {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool;
}

const ACCOUNT_TAIL_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 1];
const BRANCH_WEIGHTS: &[u32] = &[9, 8, 7];
const FULL_ACCOUNT_WEIGHTS: &[u32] = &[9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Remainder mod 11 of the last six account digits weighted 6..1 plus the branch
/// digits weighted 9, 8, 7. Shared by most of the "branch + account" schemes.
fn branch_and_account_remainder(account_digits: &[u32], branch_digits: &[u32]) -> u32 {
    let sum = scalar_product(window(account_digits, 3..9), ACCOUNT_TAIL_WEIGHTS)
        + scalar_product(window(branch_digits, 0..3), BRANCH_WEIGHTS);
    sum % 11
}

/// Sum of the nine account digits weighted 9..1.
fn full_account_sum(account_digits: &[u32]) -> u32 {
    scalar_product(window(account_digits, 0..9), FULL_ACCOUNT_WEIGHTS)
}
