//! Domain types, scheme rules, and the persistence port.

pub mod account;
pub mod payment;
pub mod ports;
pub mod rules;
