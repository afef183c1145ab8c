//! Application layer orchestrating account lookup, rule validation and persistence.
//!
//! This module defines the `PaymentService`, the single entry point for debit
//! payments. It is synchronous and holds no mutable state of its own, so one
//! instance can serve many threads.

pub mod service;
