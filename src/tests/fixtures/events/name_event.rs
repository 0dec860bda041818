use crate::modules::names::core::name_event::{CloudEvent, NameEvent};

pub fn make_name_event(name: &str) -> NameEvent {
    NameEvent::new(name)
}

/// A cloud event body shaped like the ones the pub/sub sidecar delivers.
pub fn make_cloud_event_body(name: &str) -> String {
    let envelope = CloudEvent {
        id: Some("5929aaac-a5e2-4ca1-859c-edfe73f11565".into()),
        source: Some("front-app".into()),
        event_type: Some("com.dapr.event.sent".into()),
        specversion: Some("1.0".into()),
        datacontenttype: Some("application/json".into()),
        topic: Some("names".into()),
        pubsubname: Some("pubsub".into()),
        ..CloudEvent::with_data(make_name_event(name))
    };
    serde_json::to_string(&envelope).unwrap()
}
