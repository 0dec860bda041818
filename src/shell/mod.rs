// Composition root for the names subscriber.
//
// Responsibilities
// - Read config from environment.
// - Wire the state store adapter into the use case handlers.
// - Expose the HTTP routes the sidecar delivers to.

pub mod config;
pub mod http;
pub mod state;
