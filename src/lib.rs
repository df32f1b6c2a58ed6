// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod account_match;
mod bank;
mod checksums;
mod digits;
mod error;
mod input;
mod stats;
mod validation;

// This is the public API of the validator library
pub use account_match::{IsraeliBankAccountChecksum, Validator};
pub use bank::{is_supported_bank, supported_banks, Bank};
pub use checksums::{
    BankChecksum, BeinleumiChecksum, CitibankChecksum, DiscountChecksum, HapoalimChecksum,
    HsbcChecksum, IgudChecksum, IsraelPostChecksum, JerusalemChecksum, LeumiChecksum,
    MasadChecksum, MizrahiTefahotChecksum, OneZeroChecksum, OtsarHahayalChecksum,
    YahavChecksum,
};
pub use digits::{scalar_product, DigitArray, ACCOUNT_WIDTH, BRANCH_WIDTH};
pub use error::{InvalidFieldReason, ValidationError};
pub use input::{FieldInput, NonNegativeInteger};
pub use validation::{validate_bank_account, BankAccount, ValidationRequest};
