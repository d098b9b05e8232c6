use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use clap::Parser;

use crate::args::E2eArgs;
use crate::error::HttpError;
use crate::http::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};

use super::clock::Clock;
use super::runner::SuiteSettings;

pub(super) const FAKE_BASE_URL: &str = "http://api.test";

/// A real reqwest error produced without touching the network: a URL with
/// no host fails while the request is being built.
fn unreachable_host() -> Option<reqwest::Error> {
    reqwest::Client::new().get("http://").build().err()
}

#[derive(Debug, Clone)]
pub(super) enum Reply {
    Json(u16, String),
    TransportError,
}

impl Reply {
    pub(super) fn ok(body: &str) -> Self {
        Reply::Json(200, body.to_owned())
    }

    pub(super) fn status(status: u16) -> Self {
        Reply::Json(status, "{}".to_owned())
    }
}

/// Scripted in-memory API. Each route replays its queue and then keeps
/// returning the last reply; unknown routes answer 404.
#[derive(Default)]
pub(super) struct FakeApi {
    routes: Mutex<BTreeMap<(&'static str, String), VecDeque<Reply>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl FakeApi {
    /// All endpoints succeed, region `r1` and timeline `t1` are created,
    /// and generation completes on the second poll.
    pub(super) fn happy() -> Self {
        let api = Self::default();
        api.route("GET", "/actuator/health", Reply::ok(r#"{"status":"UP"}"#));
        api.route("GET", "/regions", Reply::ok(r#"{"success":true,"data":[]}"#));
        api.route(
            "POST",
            "/regions",
            Reply::ok(r#"{"success":true,"data":{"id":"r1"}}"#),
        );
        api.route("GET", "/regions/r1", Reply::ok(r#"{"success":true,"data":{"id":"r1"}}"#));
        api.route("PUT", "/regions/r1", Reply::ok(r#"{"success":true}"#));
        api.route("GET", "/regions/r1/items", Reply::ok(r#"{"success":true,"data":[]}"#));
        api.route("DELETE", "/regions/r1", Reply::ok(r#"{"success":true}"#));
        api.route("GET", "/timelines", Reply::ok(r#"{"success":true,"data":[]}"#));
        api.route(
            "POST",
            "/timelines/generate/async",
            Reply::ok(r#"{"success":true,"data":{"id":"t1"}}"#),
        );
        api.script(
            "GET",
            "/timelines/t1/generation-progress",
            vec![
                Reply::ok(r#"{"success":true,"data":{"status":"RUNNING"}}"#),
                Reply::ok(r#"{"success":true,"data":{"status":"COMPLETED"}}"#),
            ],
        );
        api.route(
            "GET",
            "/timelines/t1",
            Reply::ok(r#"{"success":true,"data":{"timeline":{"eventCount":2}}}"#),
        );
        api.route("GET", "/timelines/t1/regions", Reply::ok(r#"{"success":true,"data":[]}"#));
        api.route(
            "GET",
            "/timelines/t1/events",
            Reply::ok(r#"{"success":true,"data":[{"id":1},{"id":2}]}"#),
        );
        api.route("GET", "/timelines/t1/graph", Reply::ok(r#"{"success":true,"data":{}}"#));
        api.route("DELETE", "/timelines/t1", Reply::ok(r#"{"success":true}"#));
        api
    }

    pub(super) fn route(&self, method: &'static str, path: &str, reply: Reply) {
        self.script(method, path, vec![reply]);
    }

    pub(super) fn script(&self, method: &'static str, path: &str, replies: Vec<Reply>) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert((method, path.to_owned()), replies.into());
        }
    }

    pub(super) fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    /// `"METHOD path"` for every request, in order.
    pub(super) fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.path))
            .collect()
    }

    pub(super) fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|seen| seen.as_str() == call).count()
    }

    fn next_reply(&self, method: HttpMethod, path: &str) -> Option<Reply> {
        let mut routes = self.routes.lock().ok()?;
        let queue = routes.get_mut(&(method.as_str(), path.to_owned()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl ApiTransport for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        match self.next_reply(request.method, &request.path) {
            Some(Reply::Json(status, body)) => Ok(ApiResponse::new(request.path, status, body)),
            Some(Reply::TransportError) => match unreachable_host() {
                Some(source) => Err(HttpError::Transport {
                    method: request.method.as_str(),
                    url: format!("{}{}", FAKE_BASE_URL, request.path),
                    source,
                }),
                None => Ok(ApiResponse::new(request.path, 503, "{}")),
            },
            None => Ok(ApiResponse::new(request.path, 404, "{}")),
        }
    }
}

/// Frozen clock that records requested sleeps instead of waiting.
pub(super) struct FakeClock {
    now: DateTime<Local>,
    sleeps: Mutex<Vec<Duration>>,
}

impl FakeClock {
    pub(super) fn new() -> Self {
        Self {
            now: Local::now(),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().map(|sleeps| sleeps.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
    }
}

pub(super) fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("runtime build failed: {}", err))?;
    Ok(runtime.block_on(future))
}

/// Settings exactly as the CLI produces them when no flags are given.
pub(super) fn default_settings() -> Result<SuiteSettings, String> {
    let args = E2eArgs::try_parse_from(["timeline-e2e"]).map_err(|err| err.to_string())?;
    SuiteSettings::try_from(&args).map_err(|err| err.to_string())
}
