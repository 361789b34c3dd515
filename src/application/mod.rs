//! Application layer orchestrating checkout.
//!
//! [`service::TransactionService`] ties the catalog, the pricing rules and the
//! ledger together and is the entry point for every checkout operation.

pub mod service;
