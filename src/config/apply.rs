use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{E2eArgs, PositiveU64};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through the environment win.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(args: &mut E2eArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.as_ref()
    {
        args.url.clone_from(url);
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_explicit(matches, "poll_interval")
        && let Some(value) = config.poll_interval.as_ref()
    {
        args.poll_interval = to_duration(value, "poll_interval")?;
    }

    if !is_explicit(matches, "max_wait")
        && let Some(value) = config.max_wait.as_ref()
    {
        args.max_wait = to_duration(value, "max_wait")?;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(value) = config.timeout.as_ref()
    {
        args.request_timeout = Some(to_duration(value, "timeout")?);
    }

    if !is_explicit(matches, "page_size")
        && let Some(page_size) = config.page_size
    {
        args.page_size = PositiveU64::try_from(page_size)
            .map_err(|_err| AppError::config(ConfigError::MustBePositive { field: "page_size" }))?;
    }

    if !is_explicit(matches, "report")
        && let Some(report) = config.report.as_ref()
    {
        args.report = Some(report.clone());
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
