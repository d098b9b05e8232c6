//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::E2eArgs;
pub use types::PositiveU64;

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
pub(crate) use parsers::parse_duration;
