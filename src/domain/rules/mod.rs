//! Per-scheme payment rules and the registry that dispatches to them.
//!
//! Each [`PaymentScheme`] has its own [`SchemeRule`]. The rules deliberately
//! differ in what they check: Bacs only looks at the allowed schemes, Faster
//! Payments also checks funds, and Chaps also checks the account status.

mod bacs;
mod chaps;
mod faster_payments;

pub use bacs::BacsRule;
pub use chaps::ChapsRule;
pub use faster_payments::FasterPaymentsRule;

use super::account::{Account, Amount};
use super::payment::PaymentScheme;

/// A stateless predicate deciding whether an account may be debited through a scheme.
pub trait SchemeRule: Send + Sync {
    fn validate(&self, account: &Account, amount: Amount) -> bool;
}

impl<F> SchemeRule for F
where
    F: Fn(&Account, Amount) -> bool + Send + Sync,
{
    fn validate(&self, account: &Account, amount: Amount) -> bool {
        self(account, amount)
    }
}

/// Registry holding exactly one rule per payment scheme.
///
/// Every scheme always resolves: lookup is an exhaustive match, so adding a
/// scheme without a rule fails to compile. Individual rules can be replaced
/// with [`SchemeRules::with_rule`].
pub struct SchemeRules {
    bacs: Box<dyn SchemeRule>,
    faster_payments: Box<dyn SchemeRule>,
    chaps: Box<dyn SchemeRule>,
}

impl Default for SchemeRules {
    fn default() -> Self {
        Self {
            bacs: Box::new(BacsRule),
            faster_payments: Box::new(FasterPaymentsRule),
            chaps: Box::new(ChapsRule),
        }
    }
}

impl SchemeRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rule registered for `scheme`.
    pub fn rule(&self, scheme: PaymentScheme) -> &dyn SchemeRule {
        match scheme {
            PaymentScheme::Bacs => self.bacs.as_ref(),
            PaymentScheme::FasterPayments => self.faster_payments.as_ref(),
            PaymentScheme::Chaps => self.chaps.as_ref(),
        }
    }

    /// Replaces the rule registered for `scheme`.
    pub fn set_rule(&mut self, scheme: PaymentScheme, rule: Box<dyn SchemeRule>) {
        let slot = match scheme {
            PaymentScheme::Bacs => &mut self.bacs,
            PaymentScheme::FasterPayments => &mut self.faster_payments,
            PaymentScheme::Chaps => &mut self.chaps,
        };
        *slot = rule;
    }

    pub fn with_rule(mut self, scheme: PaymentScheme, rule: Box<dyn SchemeRule>) -> Self {
        self.set_rule(scheme, rule);
        self
    }

    /// Validates `account` for a debit of `amount` through `scheme`.
    ///
    /// Pass [`Amount::ZERO`] to check scheme eligibility alone.
    pub fn validate(&self, scheme: PaymentScheme, account: &Account, amount: Amount) -> bool {
        self.rule(scheme).validate(account, amount)
    }
}
