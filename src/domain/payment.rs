use super::account::{AllowedPaymentSchemes, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payment rail a request is settled through.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    Bacs,
    FasterPayments,
    Chaps,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [Self::Bacs, Self::FasterPayments, Self::Chaps];
}

impl From<PaymentScheme> for AllowedPaymentSchemes {
    fn from(scheme: PaymentScheme) -> Self {
        match scheme {
            PaymentScheme::Bacs => Self::BACS,
            PaymentScheme::FasterPayments => Self::FASTER_PAYMENTS,
            PaymentScheme::Chaps => Self::CHAPS,
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bacs => write!(f, "bacs"),
            Self::FasterPayments => write!(f, "faster_payments"),
            Self::Chaps => write!(f, "chaps"),
        }
    }
}

/// A single debit attempt against a debtor account.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub debtor_account_number: String,
    pub payment_scheme: PaymentScheme,
    pub amount: Amount,
}

impl PaymentRequest {
    pub fn new(
        debtor_account_number: impl Into<String>,
        payment_scheme: PaymentScheme,
        amount: Amount,
    ) -> Self {
        Self {
            debtor_account_number: debtor_account_number.into(),
            payment_scheme,
            amount,
        }
    }
}

/// Outcome of a payment attempt.
///
/// A missing account and a failed rule both yield `success == false`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct PaymentResult {
    pub success: bool,
}

impl PaymentResult {
    pub const fn rejected() -> Self {
        Self { success: false }
    }

    pub const fn accepted() -> Self {
        Self { success: true }
    }
}
