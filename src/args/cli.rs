use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_MAX_WAIT, DEFAULT_PAGE_SIZE, DEFAULT_POLL_INTERVAL};
use super::parsers::{parse_duration_arg, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "End-to-end workflow checker for the event timeline API: regions, async timeline generation, consistency, and cleanup."
)]
pub struct E2eArgs {
    /// API base URL
    #[arg(long, short, env = "TIMELINE_E2E_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Verbose output (debug-level logs)
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to a config file (.toml or .json)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Delay between generation progress checks (supports ms/s/m/h)
    #[arg(long = "poll-interval", default_value = DEFAULT_POLL_INTERVAL, value_parser = parse_duration_arg)]
    pub poll_interval: Duration,

    /// Total time to wait for timeline generation (supports ms/s/m/h)
    #[arg(long = "max-wait", default_value = DEFAULT_MAX_WAIT, value_parser = parse_duration_arg)]
    pub max_wait: Duration,

    /// Page size used for list endpoints
    #[arg(long = "page-size", default_value = DEFAULT_PAGE_SIZE, value_parser = parse_positive_u64)]
    pub page_size: PositiveU64,

    /// Per-request timeout (supports ms/s/m/h); unset uses the client default
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<String>,
}
