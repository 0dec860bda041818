use serde::Serialize;

/// Programmatic subscription the sidecar reads on startup to route topic
/// deliveries to this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub pubsubname: String,
    pub topic: String,
    pub route: String,
}

impl Subscription {
    pub fn new(
        pubsubname: impl Into<String>,
        topic: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            pubsubname: pubsubname.into(),
            topic: topic.into(),
            route: route.into(),
        }
    }
}
