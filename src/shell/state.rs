use crate::modules::names::use_cases::count_name_occurrence::handler::CountNameOccurrenceHandler;
use crate::modules::names::use_cases::subscribe_to_names::subscription::Subscription;
use crate::shared::infrastructure::state_store::StateStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub const NAMES_ROUTE: &str = "/names";

#[derive(Clone)]
pub struct AppState {
    pub count_handler: Arc<CountNameOccurrenceHandler<dyn StateStore>>,
    pub subscriptions: Arc<Vec<Subscription>>,
}

impl AppState {
    pub fn new(config: &AppConfig, state_store: Arc<dyn StateStore>) -> Self {
        let count_handler = Arc::new(CountNameOccurrenceHandler::new(
            config.state_store_name.clone(),
            state_store,
        ));
        let subscriptions = Arc::new(vec![Subscription::new(
            config.pubsub_name.clone(),
            config.topic.clone(),
            NAMES_ROUTE,
        )]);
        Self {
            count_handler,
            subscriptions,
        }
    }
}
