//! The end-to-end workflow suite: ordered cases sharing a [`TestContext`],
//! generation polling, cleanup, and the final report.
mod cases;
mod cleanup;
mod clock;
mod context;
mod envelope;
mod poll;
mod result;
mod runner;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, SystemClock};
pub use context::TestContext;
pub use poll::{GenerationStatus, PollOutcome, PollPolicy, wait_for_generation};
pub use result::{SuiteReport, TestResult};
pub use runner::{Case, RETURNED_FALSE, Suite, SuiteSettings};
