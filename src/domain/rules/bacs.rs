use super::SchemeRule;
use crate::domain::account::{Account, Amount};
use crate::domain::payment::PaymentScheme;

/// Bacs is a pre-authorised batch scheme: only the allowed schemes are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacsRule;

impl SchemeRule for BacsRule {
    fn validate(&self, account: &Account, _amount: Amount) -> bool {
        account.allowed_schemes.allows(PaymentScheme::Bacs)
    }
}
