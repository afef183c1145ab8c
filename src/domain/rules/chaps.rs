use super::SchemeRule;
use crate::domain::account::{Account, AccountStatus, Amount};
use crate::domain::payment::PaymentScheme;

/// Chaps requires the scheme to be allowed and the account to be live.
///
/// Available funds are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapsRule;

impl SchemeRule for ChapsRule {
    fn validate(&self, account: &Account, _amount: Amount) -> bool {
        account.allowed_schemes.allows(PaymentScheme::Chaps) && account.status == AccountStatus::Live
    }
}
