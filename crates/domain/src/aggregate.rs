//! Core aggregate and domain event traits.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::DomainError;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// This is used for serialization and event routing.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregate roots.
///
/// An aggregate is a cluster of domain objects that can be treated as a
/// single unit. The aggregate root ensures consistency of changes being made
/// within the aggregate.
///
/// State is held directly on the aggregate (not rebuilt from events).
/// Mutations validate first, then update state, then record an event in an
/// internal buffer. The orchestrating caller reads the buffer after
/// persisting the aggregate, publishes the events, and clears it.
pub trait AggregateRoot: Send + Sync + Sized {
    /// The type of this aggregate's unique identifier.
    type Id: Copy + Eq + Hash + Display + Send + Sync;

    /// The type of events this aggregate records.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    ///
    /// Used for error reporting and event routing.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> Self::Id;

    /// Returns the events recorded since the buffer was last cleared,
    /// in the order they were recorded.
    fn domain_events(&self) -> &[Self::Event];

    /// Clears the recorded events.
    ///
    /// Called by the orchestrating layer after the events have been
    /// published.
    fn clear_domain_events(&mut self);

    /// Removes and returns the recorded events in one step.
    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        let events = self.domain_events().to_vec();
        self.clear_domain_events();
        events
    }
}

/// Append-only buffer of domain events recorded by an aggregate.
///
/// The buffer is part of the aggregate's in-memory state but not of its
/// persistent state: aggregates mark their buffer field with
/// `#[serde(skip)]`, so a rehydrated aggregate always starts with an empty
/// buffer.
#[derive(Debug, Clone)]
pub struct EventBuffer<E> {
    events: Vec<E>,
}

impl<E> EventBuffer<E> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event to the buffer.
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Returns the buffered events in recording order.
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    /// Removes and returns all buffered events.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// Discards all buffered events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of buffered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are buffered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rehydrates an aggregate from its JSON representation.
///
/// Rehydration trusts the stored state and performs no validation. The
/// returned aggregate has an empty event buffer.
pub fn rehydrate<A>(json: &str) -> Result<A, DomainError>
where
    A: AggregateRoot + DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| {
        DomainError::validation(format!(
            "Failed to rehydrate {}: {e}",
            A::aggregate_type()
        ))
    })
}
