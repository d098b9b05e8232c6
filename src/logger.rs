use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "TIMELINE_E2E_LOG";

const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info,timeline_e2e=debug"
    } else {
        "info"
    }
}

/// Picks the filter directive: `TIMELINE_E2E_LOG`, then `RUST_LOG`, then the
/// verbosity default. Blank variables are ignored.
fn filter_directive(verbose: bool, app_log: Option<String>, rust_log: Option<String>) -> String {
    app_log
        .into_iter()
        .chain(rust_log)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_directive(verbose).to_owned())
}

pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = filter_directive(
        verbose,
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color && std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
