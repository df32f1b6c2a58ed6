use std::collections::BTreeMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::checksums::{
    BankChecksum, BeinleumiChecksum, CitibankChecksum, DiscountChecksum, HapoalimChecksum,
    HsbcChecksum, IgudChecksum, IsraelPostChecksum, JerusalemChecksum, LeumiChecksum,
    MasadChecksum, MizrahiTefahotChecksum, OneZeroChecksum, OtsarHahayalChecksum,
    YahavChecksum,
};

/// The banks whose account numbers can be validated. The discriminant is the bank code.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(u16)]
pub enum Bank {
    Yahav = 4,
    IsraelPost = 9,
    Leumi = 10,
    Discount = 11,
    Hapoalim = 12,
    Igud = 13,
    OtsarHahayal = 14,
    Mercantile = 17,
    OneZero = 18,
    MizrahiTefahot = 20,
    #[serde(alias = "CITYBANK")]
    #[strum(to_string = "CITIBANK", serialize = "CITYBANK")]
    Citibank = 22,
    Hsbc = 23,
    Beinleumi = 31,
    #[serde(alias = "ARAVEI_ISRAELI")]
    #[strum(to_string = "ARAB_ISRAEL_BANK", serialize = "ARAVEI_ISRAELI")]
    ArabIsraelBank = 34,
    Masad = 46,
    PoaleiAgudatIsrael = 52,
    Jerusalem = 54,
}

lazy_static! {
    static ref BANKS_BY_CODE: BTreeMap<u64, Bank> = Bank::iter()
        .map(|bank| (u64::from(bank.code()), bank))
        .collect();
}

impl Bank {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Registry name of the bank, e.g. `MIZRAHI_TEFAHOT`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn from_code(code: u64) -> Option<Bank> {
        BANKS_BY_CODE.get(&code).copied()
    }

    /// Looks a bank up by its registry name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Bank> {
        Bank::from_str(name.trim()).ok()
    }

    /// The checksum algorithm for accounts of this bank.
    ///
    /// Mercantile shares Discount's algorithm, Arab-Israel Bank shares Leumi's and
    /// Poalei Agudat Israel shares Beinleumi's.
    pub fn checksum(self) -> &'static dyn BankChecksum {
        match self {
            Bank::Yahav => &YahavChecksum,
            Bank::IsraelPost => &IsraelPostChecksum,
            Bank::Leumi | Bank::ArabIsraelBank => &LeumiChecksum,
            Bank::Discount | Bank::Mercantile => &DiscountChecksum,
            Bank::Hapoalim => &HapoalimChecksum,
            Bank::Igud => &IgudChecksum,
            Bank::OtsarHahayal => &OtsarHahayalChecksum,
            Bank::OneZero => &OneZeroChecksum,
            Bank::MizrahiTefahot => &MizrahiTefahotChecksum,
            Bank::Citibank => &CitibankChecksum,
            Bank::Hsbc => &HsbcChecksum,
            Bank::Beinleumi | Bank::PoaleiAgudatIsrael => &BeinleumiChecksum,
            Bank::Masad => &MasadChecksum,
            Bank::Jerusalem => &JerusalemChecksum,
        }
    }
}

impl BankChecksum for Bank {
    fn is_valid_account(
        &self,
        branch_number: u64,
        account_digits: &[u32],
        branch_digits: &[u32],
    ) -> bool {
        self.checksum()
            .is_valid_account(branch_number, account_digits, branch_digits)
    }
}

/// Whether `code` belongs to a supported bank.
pub fn is_supported_bank(code: u64) -> bool {
    BANKS_BY_CODE.contains_key(&code)
}

/// The registry of supported banks as `(name, code)` pairs, ordered by code.
pub fn supported_banks() -> impl Iterator<Item = (&'static str, u16)> {
    BANKS_BY_CODE
        .values()
        .map(|bank| (bank.name(), bank.code()))
}
