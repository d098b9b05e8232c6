use tracing::{error, info};

use crate::args::{E2eArgs, PositiveU64};
use crate::error::{AppError, AppResult};
use crate::http::{ApiRequest, ApiResponse, ApiTransport};

use super::clock::Clock;
use super::context::TestContext;
use super::poll::PollPolicy;
use super::result::{SuiteReport, TestResult};

/// Recorded when a case reports failure without an error.
pub const RETURNED_FALSE: &str = "test returned false";

/// The workflow cases, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Health,
    RegionWorkflow,
    TimelineWorkflow,
    DataConsistency,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Health,
        Case::RegionWorkflow,
        Case::TimelineWorkflow,
        Case::DataConsistency,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Case::Health => "System health check",
            Case::RegionWorkflow => "Region management workflow",
            Case::TimelineWorkflow => "Timeline management workflow",
            Case::DataConsistency => "Data consistency check",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SuiteSettings {
    pub page_size: PositiveU64,
    pub poll: PollPolicy,
}

impl TryFrom<&E2eArgs> for SuiteSettings {
    type Error = AppError;

    fn try_from(args: &E2eArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            page_size: args.page_size,
            poll: PollPolicy::new(args.poll_interval, args.max_wait)?,
        })
    }
}

/// Runs the cases in order against one transport, then cleans up.
pub struct Suite<T, C> {
    pub(super) transport: T,
    pub(super) clock: C,
    pub(super) settings: SuiteSettings,
    pub(super) context: TestContext,
    results: Vec<TestResult>,
}

impl<T, C> Suite<T, C>
where
    T: ApiTransport,
    C: Clock,
{
    #[must_use]
    pub const fn new(transport: T, clock: C, settings: SuiteSettings) -> Self {
        Self {
            transport,
            clock,
            settings,
            context: TestContext {
                region_id: None,
                timeline_id: None,
            },
            results: Vec::new(),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &TestContext {
        &self.context
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Runs every case, always followed by exactly one cleanup pass.
    pub async fn run_all(&mut self, base_url: &str) -> SuiteReport {
        info!("Starting end-to-end tests...");
        for case in Case::ALL {
            self.run_case(case).await;
        }
        self.cleanup().await;
        SuiteReport::new(base_url.to_owned(), std::mem::take(&mut self.results))
    }

    pub async fn run_case(&mut self, case: Case) {
        let name = case.name();
        info!("Starting test: {}", name);

        let outcome = match case {
            Case::Health => Ok(self.check_health().await),
            Case::RegionWorkflow => self.region_workflow().await,
            Case::TimelineWorkflow => self.timeline_workflow().await,
            Case::DataConsistency => self.data_consistency().await,
        };

        let result = match outcome {
            Ok(true) => {
                info!("✓ {} - passed", name);
                TestResult::pass(name)
            }
            Ok(false) => {
                error!("✗ {} - failed", name);
                TestResult::fail(name, RETURNED_FALSE.to_owned())
            }
            Err(err) => {
                error!("✗ {} - error: {}", name, err);
                let message = err.to_string();
                if message.is_empty() {
                    TestResult::fail(name, "unknown error".to_owned())
                } else {
                    TestResult::fail(name, message)
                }
            }
        };
        self.results.push(result);
    }

    pub(super) async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        Ok(self.transport.send(request).await?)
    }

    /// Sends `request` and reports whether it came back 200.
    pub(super) async fn expect_ok(&self, request: ApiRequest) -> AppResult<bool> {
        let method = request.method;
        let response = self.send(request).await?;
        if response.is_ok() {
            return Ok(true);
        }
        error!(
            "{} {} returned {} (expected 200)",
            method,
            response.path(),
            response.status()
        );
        Ok(false)
    }
}
