use crate::modules::names::core::name_event::NameEvent;
use crate::modules::names::core::occurrence::{
    OccurrenceError, encode_occurrences, next_occurrences, parse_occurrences,
};
use crate::shared::infrastructure::state_store::{StateStore, StateStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("event delivery failed: {0}")]
    EventDelivery(String),

    #[error(transparent)]
    StateStoreUnavailable(#[from] StateStoreError),

    #[error("state for {key:?} is corrupt: {source}")]
    StateCorruption {
        key: String,
        #[source]
        source: OccurrenceError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub name: String,
    pub occurrences: u64,
}

impl Acknowledgment {
    pub const SUCCESS: &'static str = "SUCCESS";
}

/// Counts name events in the state store with a read-increment-write.
///
/// The sequence is not atomic: two concurrent events for the same name may
/// both read the same count and one increment is lost.
pub struct CountNameOccurrenceHandler<TStateStore>
where
    TStateStore: StateStore + ?Sized + 'static,
{
    store_name: String,
    state_store: Arc<TStateStore>,
}

impl<TStateStore> CountNameOccurrenceHandler<TStateStore>
where
    TStateStore: StateStore + ?Sized + 'static,
{
    pub fn new(store_name: impl Into<String>, state_store: Arc<TStateStore>) -> Self {
        Self {
            store_name: store_name.into(),
            state_store,
        }
    }

    pub async fn handle(
        &self,
        event: Option<NameEvent>,
    ) -> Result<Acknowledgment, ApplicationError> {
        let Some(NameEvent { name }) = event else {
            return Err(ApplicationError::EventDelivery("no name event in delivery".into()));
        };
        if name.is_empty() {
            return Err(ApplicationError::EventDelivery("name is empty".into()));
        }

        tracing::info!(name = %name, "subscriber received name event");
        let occurrences = self.retrieve_increment_save(&name).await?;
        tracing::info!(
            name = %name,
            occurrences,
            "name has occurred {occurrences} times"
        );

        Ok(Acknowledgment { name, occurrences })
    }

    async fn retrieve_increment_save(&self, name: &str) -> Result<u64, ApplicationError> {
        let corrupt = |source: OccurrenceError| ApplicationError::StateCorruption {
            key: name.to_string(),
            source,
        };

        let previous = self.state_store.get(&self.store_name, name).await?;
        let next = next_occurrences(previous.as_deref()).map_err(corrupt)?;

        self.state_store
            .set(&self.store_name, name, &encode_occurrences(next))
            .await?;

        // Report what the store holds now rather than the local value.
        let stored = self
            .state_store
            .get(&self.store_name, name)
            .await?
            .ok_or(OccurrenceError::Missing)
            .map_err(corrupt)?;
        parse_occurrences(&stored).map_err(corrupt)
    }
}
