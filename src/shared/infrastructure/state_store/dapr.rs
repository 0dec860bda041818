use crate::shared::infrastructure::state_store::{StateStore, StateStoreError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

/// StateStore backed by the sidecar's HTTP state API (`/v1.0/state/{store}`).
#[derive(Debug, Clone)]
pub struct DaprStateStore {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct StateItem<'a> {
    key: &'a str,
    value: &'a str,
}

impl DaprStateStore {
    pub fn new(dapr_host: &str, dapr_http_port: u16) -> Result<Self, StateStoreError> {
        let base_url = Url::parse(&format!("http://{dapr_host}:{dapr_http_port}/"))
            .map_err(|err| StateStoreError::Backend(format!("invalid sidecar address: {err}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn state_url(&self, segments: &[&str]) -> Result<Url, StateStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StateStoreError::Backend("sidecar address cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1.0", "state"])
            .extend(segments);
        Ok(url)
    }
}

// The sidecar returns stored values JSON-encoded; a counter saved as "3" comes
// back as `"3"`, a bare number as `3`.
fn decode_state_value(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(Value::String(value)) => Some(value),
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(String::from_utf8_lossy(body).into_owned()),
    }
}

#[async_trait]
impl StateStore for DaprStateStore {
    async fn get(&self, store_name: &str, key: &str) -> Result<Option<String>, StateStoreError> {
        let url = self.state_url(&[store_name, key])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| StateStoreError::Unavailable(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StateStoreError::Backend(format!(
                "get {store_name}/{key} returned {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| StateStoreError::Unavailable(err.to_string()))?;
        Ok(decode_state_value(&body))
    }

    async fn set(&self, store_name: &str, key: &str, value: &str) -> Result<(), StateStoreError> {
        let url = self.state_url(&[store_name])?;
        let response = self
            .client
            .post(url)
            .json(&[StateItem { key, value }])
            .send()
            .await
            .map_err(|err| StateStoreError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(store_name, key, %status, "sidecar rejected state save");
            return Err(StateStoreError::Backend(format!(
                "save {store_name}/{key} returned {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod dapr_state_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", None)]
    #[case(b"null", None)]
    #[case(b"\"3\"", Some("3"))]
    #[case(b"3", Some("3"))]
    #[case(b"not json", Some("not json"))]
    fn it_should_decode_state_values(#[case] body: &[u8], #[case] expected: Option<&str>) {
        assert_eq!(decode_state_value(body).as_deref(), expected);
    }

    #[rstest]
    fn it_should_build_an_escaped_state_url() {
        let store = DaprStateStore::new("127.0.0.1", 3500).unwrap();
        let url = store.state_url(&["statestore", "Ann Marie/2"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3500/v1.0/state/statestore/Ann%20Marie%2F2"
        );
    }

    #[rstest]
    fn it_should_reject_an_invalid_sidecar_host() {
        let result = DaprStateStore::new("not a host", 3500);
        assert!(matches!(result, Err(StateStoreError::Backend(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unreachable_sidecar_as_unavailable() {
        // Port 9 (discard) is not expected to run an HTTP server locally.
        let store = DaprStateStore::new("127.0.0.1", 9).unwrap();
        let result = store.get("statestore", "Alice").await;
        assert!(matches!(result, Err(StateStoreError::Unavailable(_))));
    }

    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn integration_it_should_round_trip_through_the_sidecar() {
        let port = std::env::var("DAPR_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3500);
        let store = DaprStateStore::new("127.0.0.1", port).unwrap();
        store
            .set("statestore", "integration-name", "7")
            .await
            .expect("save failed");
        let value = store
            .get("statestore", "integration-name")
            .await
            .expect("get failed");
        assert_eq!(value.as_deref(), Some("7"));
    }
}
