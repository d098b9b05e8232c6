use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{AppError, ValidationError};
use crate::http::{ApiRequest, ApiTransport};

use super::clock::Clock;
use super::envelope::Envelope;

/// Generation state reported by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Other(String),
}

impl GenerationStatus {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "PENDING" => GenerationStatus::Pending,
            "RUNNING" => GenerationStatus::Running,
            "COMPLETED" => GenerationStatus::Completed,
            "FAILED" => GenerationStatus::Failed,
            other => GenerationStatus::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, GenerationStatus::Completed | GenerationStatus::Failed)
    }
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStatus::Pending => f.write_str("PENDING"),
            GenerationStatus::Running => f.write_str("RUNNING"),
            GenerationStatus::Completed => f.write_str("COMPLETED"),
            GenerationStatus::Failed => f.write_str("FAILED"),
            GenerationStatus::Other(value) => f.write_str(value),
        }
    }
}

/// Fixed-interval polling budget: at most `max_wait / interval` attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_wait: Duration,
}

impl PollPolicy {
    /// # Errors
    ///
    /// Returns an error when `interval` is zero or longer than `max_wait`.
    pub fn new(interval: Duration, max_wait: Duration) -> Result<Self, AppError> {
        if interval.is_zero() {
            return Err(AppError::validation(ValidationError::DurationZero));
        }
        if max_wait < interval {
            return Err(AppError::validation(ValidationError::PollBudgetTooSmall {
                interval_ms: interval.as_millis(),
                max_wait_ms: max_wait.as_millis(),
            }));
        }
        Ok(Self { interval, max_wait })
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn max_wait(&self) -> Duration {
        self.max_wait
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        let attempts = self
            .max_wait
            .as_nanos()
            .checked_div(self.interval.as_nanos())
            .unwrap_or(0);
        u32::try_from(attempts).unwrap_or(u32::MAX)
    }
}

/// How a poll ended. Never a pass/fail signal on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    pub attempts: u32,
    pub last_status: Option<GenerationStatus>,
}

impl PollOutcome {
    #[must_use]
    pub fn terminal(&self) -> bool {
        self.last_status
            .as_ref()
            .is_some_and(GenerationStatus::is_terminal)
    }
}

/// Waits for timeline generation to reach a terminal state or for the
/// budget to run out, whichever comes first.
pub async fn wait_for_generation<T, C>(
    transport: &T,
    clock: &C,
    policy: PollPolicy,
    timeline_id: &str,
) -> PollOutcome
where
    T: ApiTransport + ?Sized,
    C: Clock + ?Sized,
{
    let path = format!("/timelines/{}/generation-progress", timeline_id);
    let mut outcome = PollOutcome {
        attempts: 0,
        last_status: None,
    };

    while outcome.attempts < policy.max_attempts() {
        clock.sleep(policy.interval()).await;
        outcome.attempts = outcome.attempts.saturating_add(1);

        let response = match transport.send(ApiRequest::get(path.as_str())).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Generation progress request failed: {}", err);
                continue;
            }
        };
        if !response.is_ok() {
            debug!("Generation progress returned {}", response.status());
            continue;
        }
        let envelope = Envelope::from_response(&response);
        if !envelope.success {
            continue;
        }
        let Some(status) = envelope.data.get("status").and_then(Value::as_str) else {
            continue;
        };
        let status = GenerationStatus::parse(status);
        debug!("Timeline generation status: {}", status);
        let terminal = status.is_terminal();
        outcome.last_status = Some(status);
        if terminal {
            break;
        }
    }

    if outcome.terminal() {
        info!(
            "Timeline generation finished after {} poll(s)",
            outcome.attempts
        );
    } else {
        warn!(
            "Timeline generation still pending after {}s; continuing",
            policy.max_wait().as_secs()
        );
    }
    outcome
}
