mod in_memory_storage;
#[cfg(test)]
pub mod fixtures;

use crate::event::{Event, EventPage};

pub use in_memory_storage::InMemoryStorage;

/// Reasons a candidate event is refused on creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Event has not required fields")]
    MissingRequiredFields,

    #[error("Event time is conflicted")]
    TimeConflict,
}

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Event with specified id not found")]
    NotFound { id: String },
}

/// Error type for building a store from seed data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("Seed event id '{0}' is used more than once")]
    DuplicateId(String),

    #[error("Seed event '{0}' has not required fields")]
    MissingRequiredFields(String),
}

/// Storage trait for calendar events.
#[async_trait::async_trait]
pub trait EventStorage {
    /// Validates and appends a new event with a freshly generated id.
    async fn create_event(
        &self,
        start_date: &str,
        end_date: &str,
        title: &str,
    ) -> Result<Event, StoreError>;

    async fn get_event(&self, id: &str) -> Result<Event, StoreError>;

    /// Lists events lying fully inside `[date_from, date_to]`.
    ///
    /// Page `offset` skips `offset * limit` matches.
    async fn get_events(
        &self,
        date_from: &str,
        date_to: &str,
        offset: usize,
        limit: usize,
    ) -> EventPage;

    /// Removes the event and returns its id.
    async fn remove_event(&self, id: &str) -> Result<String, StoreError>;
}
