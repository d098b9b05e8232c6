pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub(crate) const DEFAULT_POLL_INTERVAL: &str = "5s";
pub(crate) const DEFAULT_MAX_WAIT: &str = "60s";
pub(crate) const DEFAULT_PAGE_SIZE: &str = "10";

/// Config files picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["timeline-e2e.toml", "timeline-e2e.json"];
