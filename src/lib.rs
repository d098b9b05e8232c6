//! Core library for the `timeline-e2e` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, a thin JSON-over-HTTP client, and the
//! end-to-end workflow suite that drives the event timeline API. The primary
//! user-facing interface is the `timeline-e2e` command-line application.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
mod report;
pub mod suite;
