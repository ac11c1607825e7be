use ahash::AHashSet;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    date::not_before,
    event::{Event, EventPage},
    storage::{EventStorage, SeedError, StoreError, ValidationError},
};

/// Keeps events in insertion order. Every query is a linear scan.
pub struct InMemoryStorage {
    // One lock for the whole collection so that validating a candidate and appending it
    // happen under the same write guard.
    events: RwLock<Vec<Event>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store holding `seed` in the given order.
    ///
    /// Seed events must have unique ids and no empty fields. They are not checked for
    /// time conflicts.
    pub fn with_events(seed: Vec<Event>) -> Result<Self, SeedError> {
        check_seed(&seed)?;
        debug!("Seeded store with {} events", seed.len());
        Ok(Self {
            events: RwLock::new(seed),
        })
    }

    /// Number of events currently held.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Checks a candidate against the required-field and conflict rules without storing it.
    #[instrument(skip_all)]
    pub async fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        let events_guard = self.events.read().await;
        validate_against(&events_guard, event)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn has_required_fields(event: &Event) -> bool {
    !event.title.is_empty() && !event.start_date.is_empty() && !event.end_date.is_empty()
}

fn check_seed(seed: &[Event]) -> Result<(), SeedError> {
    let mut seen_ids = AHashSet::with_capacity(seed.len());
    for event in seed {
        if event.id.is_empty() || !has_required_fields(event) {
            return Err(SeedError::MissingRequiredFields(event.id.clone()));
        }
        if !seen_ids.insert(event.id.as_str()) {
            return Err(SeedError::DuplicateId(event.id.clone()));
        }
    }
    Ok(())
}

/// Events lying fully inside `[date_from, date_to]`, in insertion order.
fn within_range<'a>(
    events: &'a [Event],
    date_from: &'a str,
    date_to: &'a str,
) -> impl Iterator<Item = &'a Event> + 'a {
    events.iter().filter(move |event| {
        not_before(&event.start_date, date_from) && not_before(date_to, &event.end_date)
    })
}

/// Page `offset` starts at match number `offset * limit`.
fn paginate<'a>(
    matches: impl Iterator<Item = &'a Event>,
    offset: usize,
    limit: usize,
) -> EventPage {
    let events: Vec<Event> = matches
        .skip(offset.saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();
    EventPage {
        total_count: events.len(),
        events,
    }
}

/// A candidate conflicts with a stored event that lies inside the candidate's window and
/// ends no later than the candidate starts.
fn validate_against(events: &[Event], candidate: &Event) -> Result<(), ValidationError> {
    if !has_required_fields(candidate) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let conflicted = within_range(events, &candidate.start_date, &candidate.end_date)
        .any(|event| not_before(&candidate.start_date, &event.end_date));
    if conflicted {
        return Err(ValidationError::TimeConflict);
    }
    Ok(())
}

#[async_trait::async_trait]
impl EventStorage for InMemoryStorage {
    #[instrument(skip_all)]
    async fn create_event(
        &self,
        start_date: &str,
        end_date: &str,
        title: &str,
    ) -> Result<Event, StoreError> {
        debug!("Creating event");
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };

        let mut events_guard = self.events.write().await;
        validate_against(&events_guard, &event)?;
        events_guard.push(event.clone());

        debug!("Created event {}", event.id);
        Ok(event)
    }

    #[instrument(skip_all)]
    async fn get_event(&self, id: &str) -> Result<Event, StoreError> {
        debug!("Getting event {id}");
        let events_guard = self.events.read().await;
        events_guard
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    #[instrument(skip_all)]
    async fn get_events(
        &self,
        date_from: &str,
        date_to: &str,
        offset: usize,
        limit: usize,
    ) -> EventPage {
        debug!("Getting events");
        let events_guard = self.events.read().await;
        let page = paginate(within_range(&events_guard, date_from, date_to), offset, limit);

        debug!("Found {} events", page.total_count);
        page
    }

    #[instrument(skip_all)]
    async fn remove_event(&self, id: &str) -> Result<String, StoreError> {
        debug!("Removing event {id}");
        let mut events_guard = self.events.write().await;
        let Some(position) = events_guard.iter().position(|event| event.id == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        events_guard.remove(position);
        Ok(id.to_string())
    }
}
