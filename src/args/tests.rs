use std::time::Duration;

use clap::Parser;

use super::*;
use crate::error::{AppError, AppResult};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = E2eArgs::try_parse_from(["timeline-e2e"])
        .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))?;

    // The env override would leak into this assertion.
    if std::env::var_os("TIMELINE_E2E_URL").is_none() && args.url != defaults::DEFAULT_BASE_URL {
        return Err(AppError::validation(format!("Unexpected url: {}", args.url)));
    }
    if args.verbose || args.no_color {
        return Err(AppError::validation("Flags should default to off"));
    }
    if args.poll_interval != Duration::from_secs(5) || args.max_wait != Duration::from_secs(60) {
        return Err(AppError::validation("Unexpected poll defaults"));
    }
    if args.page_size.get() != 10 {
        return Err(AppError::validation("Unexpected page size"));
    }
    if args.request_timeout.is_some() || args.report.is_some() || args.config.is_some() {
        return Err(AppError::validation("Optional flags should be unset"));
    }
    Ok(())
}

#[test]
fn parse_args_short_flags() -> AppResult<()> {
    let args = E2eArgs::try_parse_from(["timeline-e2e", "-u", "http://api.test/v1", "-v"])
        .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))?;
    if args.url != "http://api.test/v1" {
        return Err(AppError::validation("Unexpected url"));
    }
    if !args.verbose {
        return Err(AppError::validation("Expected verbose"));
    }
    Ok(())
}

#[test]
fn parse_args_polling_and_timeouts() -> AppResult<()> {
    let args = E2eArgs::try_parse_from([
        "timeline-e2e",
        "--poll-interval",
        "250ms",
        "--max-wait",
        "2m",
        "--timeout",
        "30",
        "--page-size",
        "50",
        "--report",
        "out.json",
    ])
    .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))?;
    if args.poll_interval != Duration::from_millis(250) {
        return Err(AppError::validation("Unexpected poll interval"));
    }
    if args.max_wait != Duration::from_secs(120) {
        return Err(AppError::validation("Unexpected max wait"));
    }
    if args.request_timeout != Some(Duration::from_secs(30)) {
        return Err(AppError::validation("Unexpected timeout"));
    }
    if args.page_size.get() != 50 || args.report.as_deref() != Some("out.json") {
        return Err(AppError::validation("Unexpected page size or report"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_page_size_and_durations() -> AppResult<()> {
    for flags in [
        ["timeline-e2e", "--page-size", "0"],
        ["timeline-e2e", "--poll-interval", "0s"],
        ["timeline-e2e", "--max-wait", "5d"],
    ] {
        if E2eArgs::try_parse_from(flags).is_ok() {
            return Err(AppError::validation(format!("Expected rejection for {:?}", flags)));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("15", Duration::from_secs(15)),
        ("15s", Duration::from_secs(15)),
        ("40ms", Duration::from_millis(40)),
        ("3m", Duration::from_secs(180)),
        ("1h", Duration::from_secs(3600)),
        (" 7s ", Duration::from_secs(7)),
    ];
    for (raw, expected) in cases {
        let parsed = parse_duration(raw)?;
        if parsed != expected {
            return Err(AppError::validation(format!("Unexpected duration for {}", raw)));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_errors() -> AppResult<()> {
    use crate::error::ValidationError;

    if !matches!(parse_duration(""), Err(ValidationError::DurationEmpty)) {
        return Err(AppError::validation("Expected DurationEmpty"));
    }
    if !matches!(parse_duration("s"), Err(ValidationError::InvalidDurationFormat { .. })) {
        return Err(AppError::validation("Expected InvalidDurationFormat"));
    }
    if !matches!(parse_duration("0ms"), Err(ValidationError::DurationZero)) {
        return Err(AppError::validation("Expected DurationZero"));
    }
    if !matches!(parse_duration("2w"), Err(ValidationError::InvalidDurationUnit { .. })) {
        return Err(AppError::validation("Expected InvalidDurationUnit"));
    }
    if !matches!(
        parse_duration("18446744073709551615h"),
        Err(ValidationError::DurationOverflow)
    ) {
        return Err(AppError::validation("Expected DurationOverflow"));
    }
    Ok(())
}
