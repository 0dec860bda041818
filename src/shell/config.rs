use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

const SIDECAR_VARS: [&str; 4] = ["app_host", "app_port", "dapr_host", "dapr_http_port"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    pub app_host: String,
    pub app_port: u16,
    pub dapr_host: String,
    pub dapr_http_port: u16,
    pub state_store_name: String,
    pub pubsub_name: String,
    pub topic: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: "0.0.0.0".to_string(),
            app_port: 8080,
            dapr_host: "127.0.0.1".to_string(),
            dapr_http_port: 3500,
            state_store_name: "statestore".to_string(),
            pubsub_name: "pubsub".to_string(),
            topic: "names".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the sidecar's `APP_*`/`DAPR_*` variables, then
    /// `NAMES_`-prefixed overrides for every field.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::raw().only(&SIDECAR_VARS))
            .merge(Env::prefixed("NAMES_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
