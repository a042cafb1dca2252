//! nav-gap: ETF premium/discount alert bot for NSE-listed ETFs
//!
//! This library provides the core components for:
//! - NAV lookups from the AMFI mutual-fund API
//! - Market prices from the Yahoo Finance chart API
//! - Gap evaluation and premium/discount classification
//! - Telegram alert dispatch
//! - Daily gap journal with end-of-day summary
//! - Cooperative scheduling for unattended operation
//! - Observability via tracing and Prometheus metrics

pub mod cli;
pub mod config;
pub mod notify;
pub mod quote;
pub mod scan;
pub mod schedule;
pub mod telemetry;
