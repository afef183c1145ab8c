use crate::domain::account::Account;
use crate::domain::payment::PaymentRequest;
use crate::error::{PaymentError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads accounts or payment requests from a CSV source.
///
/// This reader wraps `csv::Reader` and yields one `Result` per row, so a
/// malformed row does not stop the rest of the stream. Whitespace around
/// fields is trimmed.
pub struct CsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvReader<R> {
    /// Creates a new `CsvReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads rows with the `number, balance, status, allowed_schemes` header.
    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.records()
    }

    /// Lazily reads rows with the `debtor_account_number, payment_scheme, amount` header.
    pub fn payment_requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.records()
    }

    fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountStatus, AllowedPaymentSchemes, Amount, Balance};
    use crate::domain::payment::PaymentScheme;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_payment_requests() {
        let data = "debtor_account_number, payment_scheme, amount\n\
                    1001, bacs, 100\n\
                    1002, chaps, 0.5";
        let reader = CsvReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.payment_requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.debtor_account_number, "1001");
        assert_eq!(first.payment_scheme, PaymentScheme::Bacs);
        assert_eq!(first.amount, Amount::new(dec!(100)).unwrap());
    }

    #[test]
    fn test_reader_accounts() {
        let data = "number, balance, status, allowed_schemes\n\
                    1001, 500, live, BACS | CHAPS\n\
                    1002, -20.5, disabled, ";
        let reader = CsvReader::new(data.as_bytes());
        let accounts: Vec<Account> = reader.accounts().map(|r| r.unwrap()).collect();

        assert_eq!(accounts[0].balance, Balance::new(dec!(500)));
        assert_eq!(
            accounts[0].allowed_schemes,
            AllowedPaymentSchemes::BACS | AllowedPaymentSchemes::CHAPS
        );
        assert_eq!(accounts[1].status, AccountStatus::Disabled);
        assert_eq!(accounts[1].balance, Balance::new(dec!(-20.5)));
        assert!(accounts[1].allowed_schemes.is_empty());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "debtor_account_number, payment_scheme, amount\n\
                    1001, swift, 1.0\n\
                    1001, bacs, 1.0";
        let reader = CsvReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.payment_requests().collect();

        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
        assert!(results[1].is_ok());
    }
}
