//! bankgen-core: synthetic banking CSV dataset generator.
//!
//! Produces ten related CSV files (customers, accounts, merchants, cards,
//! transactions, alerts, fraud cases, devices, customer segments, customer
//! lifetime value) for bulk import into a relational store. Stages run
//! strictly in dependency order so that every id column references an id
//! generated by an earlier stage. All randomness is seeded; the same
//! configuration and seed produce byte-identical files.

pub mod account_stage;
pub mod alert_stage;
pub mod card_stage;
pub mod clv_stage;
pub mod config;
pub mod customer_stage;
pub mod dates;
pub mod device_stage;
pub mod error;
pub mod fraud_case_stage;
pub mod identity;
pub mod merchant_stage;
pub mod pipeline;
pub mod records;
pub mod reference;
pub mod rng;
pub mod segment_stage;
pub mod transaction_stage;
pub mod writer;
