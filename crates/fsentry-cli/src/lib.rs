//! # fsentry-cli
//!
//! Thin presentation layer over `fsentry-core`.
//!
//! ## Features
//!
//! - **check**: scan a tree, diff against the baseline, append the audit
//!   trail, replace the baseline
//! - **scan**: dry run -- same report, no state written
//! - **Multiple output formats**: colored pretty output or JSON
//! - **Config file**: default ignore sets and artifact paths in TOML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
