use super::payment::PaymentScheme;
use crate::error::PaymentError;
use bitflags::bitflags;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the signed monetary balance of an account.
///
/// This is a wrapper around `rust_decimal::Decimal`. Balances may go negative:
/// only some schemes check available funds before a debit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub Decimal);

/// Represents a non-negative monetary amount requested by a payment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns true when the balance strictly exceeds `amount`.
    pub fn exceeds(&self, amount: Amount) -> bool {
        self.0 > amount.0
    }

    /// Subtracts `amount`, returning `None` if the result is out of range.
    pub fn checked_sub(&self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.0).map(Self)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Live,
    Disabled,
}

bitflags! {
    /// The set of payment schemes an account may be debited through.
    ///
    /// Serialized by flag name in human-readable formats, e.g. `BACS | CHAPS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AllowedPaymentSchemes: u8 {
        const BACS = 1 << 0;
        const FASTER_PAYMENTS = 1 << 1;
        const CHAPS = 1 << 2;
    }
}

impl AllowedPaymentSchemes {
    pub fn allows(&self, scheme: PaymentScheme) -> bool {
        self.contains(scheme.into())
    }
}

impl Serialize for AllowedPaymentSchemes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for AllowedPaymentSchemes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bitflags::serde::deserialize(deserializer)
    }
}

/// A debtor account as seen by the payment core.
///
/// Status and allowed schemes are managed elsewhere; the core only ever
/// changes the balance, and only through [`Account::debit`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// The unique account number.
    pub number: String,
    /// Current balance, possibly negative.
    pub balance: Balance,
    /// Operational status (Live or Disabled).
    pub status: AccountStatus,
    /// Schemes this account may be debited through.
    pub allowed_schemes: AllowedPaymentSchemes,
}

impl Account {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            balance: Balance::ZERO,
            status: AccountStatus::Live,
            allowed_schemes: AllowedPaymentSchemes::empty(),
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Balance::new(balance);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_schemes(mut self, schemes: AllowedPaymentSchemes) -> Self {
        self.allowed_schemes = schemes;
        self
    }

    /// Debits the balance by `amount` without any funds check.
    ///
    /// Callers must have validated the payment against the scheme rules first.
    /// The balance is left untouched when the debit would overflow.
    pub fn debit(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            PaymentError::ValidationError(format!(
                "Debit of {} overflows balance of account {}",
                amount.0, self.number
            ))
        })?;
        Ok(())
    }
}
