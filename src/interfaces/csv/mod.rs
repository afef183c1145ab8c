//! CSV adapters for seeding accounts, reading payment requests and reporting accounts.

pub mod account_writer;
pub mod reader;
