mod app;
mod config;
mod http;
mod suite;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use suite::SuiteError;
pub use validation::ValidationError;
