use crate::domain::account::Account;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::AccountStoreBox;
use crate::domain::rules::SchemeRules;
use crate::error::Result;

/// The entry point for debit payments.
///
/// `PaymentService` owns the account store and the scheme rules. Each call
/// reads the debtor account exactly once and writes it back only when the
/// payment was accepted.
pub struct PaymentService {
    account_store: AccountStoreBox,
    rules: SchemeRules,
}

impl PaymentService {
    /// Creates a new `PaymentService` instance.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store debtor accounts are read from and written to.
    /// * `rules` - The per-scheme validation rules.
    pub fn new(account_store: AccountStoreBox, rules: SchemeRules) -> Self {
        Self {
            account_store,
            rules,
        }
    }

    /// Creates a service with the default rule for every scheme.
    pub fn with_default_rules(account_store: AccountStoreBox) -> Self {
        Self::new(account_store, SchemeRules::default())
    }

    /// Validates and applies a debit payment.
    ///
    /// An unknown account or a failed scheme rule yields an unsuccessful
    /// result. Errors are returned when the account store fails or when the
    /// debit would overflow the balance; nothing is written in either case.
    #[tracing::instrument(
        skip(self, request),
        fields(debtor = %request.debtor_account_number, scheme = %request.payment_scheme)
    )]
    pub fn make_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let Some(mut account) = self.account_store.get(&request.debtor_account_number)? else {
            tracing::debug!("debtor account not found");
            return Ok(PaymentResult::rejected());
        };

        if !self
            .rules
            .validate(request.payment_scheme, &account, request.amount)
        {
            tracing::debug!(
                status = ?account.status,
                balance = %account.balance.0,
                amount = %request.amount.value(),
                "payment rejected by scheme rule"
            );
            return Ok(PaymentResult::rejected());
        }

        account.debit(request.amount)?;
        self.account_store.update(account)?;

        tracing::info!(amount = %request.amount.value(), "payment accepted");
        Ok(PaymentResult::accepted())
    }

    /// Consumes the service and returns every account in its store.
    pub fn into_accounts(self) -> Result<Vec<Account>> {
        self.account_store.all_accounts()
    }
}
