//! Receipt Points Service
//!
//! This crate scores purchase receipts with loyalty points using a fixed set
//! of rules, records each score under a generated identifier, and serves
//! both operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
