use super::SchemeRule;
use crate::domain::account::{Account, Amount};
use crate::domain::payment::PaymentScheme;

/// Faster Payments settles immediately, so the account must hold strictly more
/// than a non-zero requested amount. Status is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FasterPaymentsRule;

impl SchemeRule for FasterPaymentsRule {
    fn validate(&self, account: &Account, amount: Amount) -> bool {
        account.allowed_schemes.allows(PaymentScheme::FasterPayments)
            && !amount.is_zero()
            && account.balance.exceeds(amount)
    }
}
