//! Upstream HTTP API client: mirrors alarms, device status, and metrics to
//! the external backend the orchestrator feeds. Every call swallows its own
//! errors and logs — the database remains the source of truth, and a
//! downed backend must never interrupt a polling cycle.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value as JsonValue, json};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::Alarm;

/// Configuration for the upstream API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the backend that alarms and metrics are mirrored to.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Build a client from configuration. Fails only if the underlying
    /// `reqwest` client cannot be constructed (e.g. invalid TLS config).
    pub fn new(config: ApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build configured HTTP client, using defaults");
                Client::new()
            });

        Self {
            base_url: config.base_url,
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url.trim_end_matches('/'))
    }

    /// Mirror a newly created alarm. Returns the backend's response body on
    /// success, `None` on any failure.
    pub async fn create_alarm(&self, alarm: &Alarm) -> Option<JsonValue> {
        let payload = json!({
            "device_id": alarm.device_id,
            "device_name": alarm.device_name,
            "type": alarm.alarm_type.as_str(),
            "severity": alarm.severity.as_str(),
            "message": alarm.message,
            "metadata": alarm.metadata,
        });

        let response = self
            .client
            .post(self.url("/alarms"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| warn!(error = %e, "api call failed for create_alarm"))
            .ok()?;

        if response.status().is_success() {
            response.json().await.ok()
        } else {
            warn!(status = %response.status(), "api alarm creation failed");
            None
        }
    }

    /// Fetch active alarms, optionally scoped to a device.
    pub async fn get_active_alarms(&self, device_id: Option<Uuid>) -> Option<JsonValue> {
        let mut request = self.client.get(self.url("/alarms")).query(&[("resolved", "false")]);
        if let Some(device_id) = device_id {
            request = request.query(&[("device_id", device_id.to_string())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| warn!(error = %e, "api call failed for get_active_alarms"))
            .ok()?;

        if response.status().is_success() {
            response.json().await.ok()
        } else {
            warn!(status = %response.status(), "api alarm retrieval failed");
            None
        }
    }

    /// Acknowledge an alarm upstream.
    pub async fn acknowledge_alarm(&self, alarm_id: Uuid, acknowledged_by: &str) -> bool {
        let payload = json!({ "acknowledged_by": acknowledged_by });
        let path = format!("/alarms/{alarm_id}/acknowledge");

        match self.client.patch(self.url(&path)).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(alarm_id = %alarm_id, "acknowledged alarm via api");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "api acknowledge failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "api call failed for acknowledge_alarm");
                false
            }
        }
    }

    /// Mirror a device's reachability status (`"online"` or `"offline"`).
    pub async fn update_device_status(&self, device_id: Uuid, status: &str) -> bool {
        let payload = json!({ "connection_status": status });
        let path = format!("/devices/{device_id}");

        match self.client.patch(self.url(&path)).json(&payload).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = %response.status(), "api device status update failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "api call failed for update_device_status");
                false
            }
        }
    }

    /// Mirror a batch of metric data (`metric_type` is `"interface"`,
    /// `"health"`, or `"inventory"`).
    pub async fn send_metrics(
        &self,
        device_id: Uuid,
        metric_type: &str,
        data: &JsonValue,
    ) -> Option<JsonValue> {
        let payload = json!({
            "device_id": device_id,
            "type": metric_type,
            "data": data,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let response = self
            .client
            .post(self.url("/metrics"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| warn!(error = %e, "api call failed for send_metrics"))
            .ok()?;

        if response.status().is_success() {
            response.json().await.ok()
        } else {
            warn!(status = %response.status(), metric_type, "api metrics send failed");
            None
        }
    }

    /// Liveness probe against the backend's `GET /health`.
    pub async fn health_check(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "api health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://example.com/".to_string(),
            ..ApiClientConfig::default()
        });
        assert_eq!(client.url("/alarms"), "http://example.com/api/alarms");
    }

    #[tokio::test]
    async fn health_check_against_unreachable_host_returns_false() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
        });
        assert!(!client.health_check().await);
    }
}
