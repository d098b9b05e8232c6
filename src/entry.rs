use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::args::E2eArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::http::ApiClient;
use crate::report::{export_json, print_summary};
use crate::suite::{Suite, SuiteSettings, SystemClock};

/// Exit code for configuration or startup failures, matching clap's usage
/// errors.
const EXIT_USAGE: u8 = 2;

#[must_use]
pub fn run() -> ExitCode {
    match try_run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn try_run() -> AppResult<u8> {
    let args = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);
    if args.verbose {
        info!("API base URL: {}", args.url);
    }

    let settings = SuiteSettings::try_from(&args)?;
    let client = ApiClient::new(&args.url, args.request_timeout)?;
    let base_url = client.base_url().to_owned();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut suite = Suite::new(client, SystemClock, settings);
        let report = suite.run_all(&base_url).await;
        print_summary(&report);

        if let Some(path) = args.report.as_deref() {
            match export_json(path, &report).await {
                Ok(()) => info!("Report written to {}", path),
                Err(err) => error!("Failed to write report to {}: {}", path, err),
            }
        }
        Ok(report.exit_code())
    })
}

fn parse_args() -> AppResult<E2eArgs> {
    let matches = E2eArgs::command().get_matches();
    let mut args = E2eArgs::from_arg_matches(&matches)?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    Ok(args)
}
