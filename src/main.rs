use clap::Parser;
use miette::{IntoDiagnostic, Result};
use scheme_payments::application::service::PaymentService;
use scheme_payments::domain::ports::AccountStore;
use scheme_payments::infrastructure::factory::{DataStoreFactory, DataStoreType};
use scheme_payments::interfaces::csv::account_writer::AccountWriter;
use scheme_payments::interfaces::csv::reader::CsvReader;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    payments: PathBuf,

    /// Accounts CSV file loaded into the selected store before processing
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Which account store to read from and write to; only `backup` selects the backup store
    #[arg(long, env = "DATA_STORE_TYPE", default_value_t = DataStoreType::Primary)]
    data_store_type: DataStoreType,

    /// Path to the primary persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Path to the backup persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    backup_db_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let factory = DataStoreFactory::from_paths(cli.db_path, cli.backup_db_path);
    let store = factory
        .get_data_store(cli.data_store_type)
        .into_diagnostic()?;
    tracing::info!(data_store_type = %cli.data_store_type, "account store ready");

    if let Some(path) = cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in CsvReader::new(file).accounts() {
            match account {
                Ok(account) => store.update(account).into_diagnostic()?,
                Err(e) => tracing::warn!("Error reading account: {}", e),
            }
        }
    }

    let service = PaymentService::with_default_rules(store);

    let file = File::open(cli.payments).into_diagnostic()?;
    for request in CsvReader::new(file).payment_requests() {
        match request {
            Ok(request) => {
                let result = service.make_payment(&request).into_diagnostic()?;
                tracing::info!(
                    debtor = %request.debtor_account_number,
                    scheme = %request.payment_scheme,
                    amount = %request.amount.value(),
                    success = result.success,
                    "payment processed"
                );
            }
            Err(e) => {
                tracing::warn!("Error reading payment request: {}", e);
            }
        }
    }

    let accounts = service.into_accounts().into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
