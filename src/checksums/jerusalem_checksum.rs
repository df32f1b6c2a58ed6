use crate::checksums::BankChecksum;

/// Bank of Jerusalem publishes no check digit scheme, every account is accepted.
pub struct JerusalemChecksum;

impl BankChecksum for JerusalemChecksum {
    fn is_valid_account(&self, _: u64, _: &[u32], _: &[u32]) -> bool {
        true
    }
}
