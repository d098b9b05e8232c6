use chrono::{NaiveDateTime, TimeDelta};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::http::{ApiRequest, ApiTransport};

use super::clock::Clock;
use super::envelope::Envelope;
use super::poll::wait_for_generation;
use super::runner::Suite;

const REGION_TYPE: &str = "CUSTOM";
const GENERATION_WINDOW_DAYS: i64 = 30;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn iso_local(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

impl<T, C> Suite<T, C>
where
    T: ApiTransport,
    C: Clock,
{
    fn list_request(&self, path: &str) -> ApiRequest {
        ApiRequest::get(path)
            .with_query("page", "1")
            .with_query("size", self.settings.page_size.get().to_string())
    }

    /// Transport and decode failures count as "not healthy", never as errors.
    pub(super) async fn check_health(&self) -> bool {
        let response = match self.transport.send(ApiRequest::get("/actuator/health")).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Health check request failed: {}", err);
                return false;
            }
        };
        if !response.is_ok() {
            warn!("Health check returned {}", response.status());
            return false;
        }
        match response.json() {
            Ok(body) => {
                let status = body.get("status").and_then(Value::as_str);
                debug!("Health status: {:?}", status);
                status == Some("UP")
            }
            Err(err) => {
                warn!("Health check body unreadable: {}", err);
                false
            }
        }
    }

    pub(super) async fn region_workflow(&mut self) -> AppResult<bool> {
        if !self.expect_ok(self.list_request("/regions")).await? {
            return Ok(false);
        }

        let created = self
            .send(ApiRequest::post(
                "/regions",
                json!({
                    "name": format!("E2E Region_{}", self.clock.now().timestamp()),
                    "type": REGION_TYPE,
                    "description": "Region created by the end-to-end suite",
                    "dictionaryIds": [],
                }),
            ))
            .await?;
        if !created.is_ok() {
            warn!("Region creation returned {}", created.status());
            return Ok(false);
        }
        let envelope = Envelope::from_response(&created);
        if !envelope.success {
            warn!("Region creation was not successful");
            return Ok(false);
        }
        let region_id = envelope.resource_id(created.path())?;
        debug!("Created region id: {}", region_id);
        self.context.region_id = Some(region_id.clone());

        let region_path = format!("/regions/{}", region_id);
        if !self.expect_ok(ApiRequest::get(region_path.as_str())).await? {
            return Ok(false);
        }

        let update = json!({
            "id": region_id,
            "name": format!("E2E Region_updated_{}", self.clock.now().timestamp()),
            "type": REGION_TYPE,
            "description": "Region updated by the end-to-end suite",
            "dictionaryIds": [],
        });
        if !self
            .expect_ok(ApiRequest::put(region_path.as_str(), update))
            .await?
        {
            return Ok(false);
        }

        self.expect_ok(ApiRequest::get(format!("{}/items", region_path)))
            .await
    }

    pub(super) async fn timeline_workflow(&mut self) -> AppResult<bool> {
        let Some(region_id) = self.context.region_id.clone() else {
            warn!("No region available, skipping timeline workflow");
            return Ok(true);
        };

        if !self.expect_ok(self.list_request("/timelines")).await? {
            return Ok(false);
        }

        let now = self.clock.now();
        let end = now.naive_local();
        let start = end
            .checked_sub_signed(TimeDelta::days(GENERATION_WINDOW_DAYS))
            .unwrap_or(end);
        let generated = self
            .send(ApiRequest::post(
                "/timelines/generate/async",
                json!({
                    "name": format!("E2E Timeline_{}", now.timestamp()),
                    "description": "Timeline generated by the end-to-end suite",
                    "regionIds": [region_id],
                    "startTime": iso_local(start),
                    "endTime": iso_local(end),
                }),
            ))
            .await?;
        if !generated.is_ok() {
            warn!("Timeline generation returned {}", generated.status());
            return Ok(false);
        }
        let envelope = Envelope::from_response(&generated);
        if !envelope.success {
            warn!("Timeline generation was not successful");
            return Ok(false);
        }
        let timeline_id = envelope.resource_id(generated.path())?;
        debug!("Generated timeline id: {}", timeline_id);
        self.context.timeline_id = Some(timeline_id.clone());

        info!("Waiting for timeline generation...");
        wait_for_generation(
            &self.transport,
            &self.clock,
            self.settings.poll,
            &timeline_id,
        )
        .await;

        let timeline_path = format!("/timelines/{}", timeline_id);
        for suffix in ["", "/regions", "/events", "/graph"] {
            let request = ApiRequest::get(format!("{}{}", timeline_path, suffix));
            if !self.expect_ok(request).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Event counts may lag behind on the server, so a mismatch only warns.
    pub(super) async fn data_consistency(&mut self) -> AppResult<bool> {
        let Some(timeline_id) = self.context.timeline_id.clone() else {
            warn!("No timeline available, skipping data consistency check");
            return Ok(true);
        };
        let timeline_path = format!("/timelines/{}", timeline_id);

        let detail = self.send(ApiRequest::get(timeline_path.as_str())).await?;
        if !detail.is_ok() {
            return Ok(false);
        }
        let detail = detail.json()?;

        let events = self
            .send(ApiRequest::get(format!("{}/events", timeline_path)))
            .await?;
        if !events.is_ok() {
            return Ok(false);
        }
        let events = events.json()?;

        let expected = detail
            .pointer("/data/timeline/eventCount")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        let actual = events
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        if u64::try_from(actual).ok() == Some(expected) {
            debug!("Event count consistent: {}", actual);
        } else {
            warn!(
                "Event count mismatch: expected {}, actual {}",
                expected, actual
            );
        }
        Ok(true)
    }
}
