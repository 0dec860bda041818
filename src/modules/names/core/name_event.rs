use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEvent {
    pub name: String,
}

impl NameEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Cloud event envelope as delivered by the pub/sub sidecar. Only `data` is
/// used for handling; the metadata is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudEvent<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specversion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubsubname: Option<String>,
    pub data: Option<T>,
}

impl<T> CloudEvent<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            id: None,
            source: None,
            event_type: None,
            specversion: None,
            datacontenttype: None,
            topic: None,
            pubsubname: None,
            data: Some(data),
        }
    }
}
