//! Command handling infrastructure.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::aggregate::{AggregateRoot, DomainEvent};
use crate::error::DomainError;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandOutcome<A: AggregateRoot> {
    /// The aggregate after the command, with its event buffer drained.
    pub aggregate: A,

    /// The events that were recorded and published.
    pub events: Vec<A::Event>,
}

/// Trait for commands that can be executed against an aggregate.
///
/// Commands represent an intention to perform an action. They may be rejected
/// if the aggregate's current state doesn't allow the action.
pub trait Command: Send + Sync {
    /// The type of aggregate this command targets.
    type Aggregate: AggregateRoot;

    /// Returns the ID of the aggregate this command targets.
    fn aggregate_id(&self) -> <Self::Aggregate as AggregateRoot>::Id;
}

/// Storage seam for aggregates.
///
/// Implementations persist aggregate state only; the event buffer is not
/// part of that state and must not survive a round trip.
#[async_trait]
pub trait Repository<A: AggregateRoot>: Send + Sync {
    /// Loads an aggregate by ID, or `None` if it was never saved.
    async fn load(&self, aggregate_id: A::Id) -> Result<Option<A>, DomainError>;

    /// Persists the aggregate's current state.
    async fn save(&self, aggregate: &A) -> Result<(), DomainError>;
}

/// Outbound seam for drained domain events.
#[async_trait]
pub trait EventPublisher<E: DomainEvent>: Send + Sync {
    /// Publishes the events in recording order.
    async fn publish(&self, events: &[E]) -> Result<(), DomainError>;
}

/// Handler for executing commands against aggregates.
///
/// The handler is responsible for:
/// 1. Loading the aggregate from the repository
/// 2. Running the command against it
/// 3. Persisting the mutated aggregate
/// 4. Draining the event buffer and publishing the events
///
/// Save and publish are two steps, not one transaction. A crash between
/// them loses the publication, which callers accept.
pub struct CommandHandler<R, P, A>
where
    A: AggregateRoot,
    R: Repository<A>,
    P: EventPublisher<A::Event>,
{
    repository: R,
    publisher: P,
    _phantom: PhantomData<A>,
}

impl<R, P, A> CommandHandler<R, P, A>
where
    A: AggregateRoot,
    R: Repository<A>,
    P: EventPublisher<A::Event>,
{
    /// Creates a new command handler over a repository and a publisher.
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository,
            publisher,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns a reference to the underlying publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Runs a factory to create an aggregate, then saves and publishes.
    ///
    /// A factory error propagates without touching the repository or the
    /// publisher.
    pub async fn create<F>(&self, factory: F) -> Result<CommandOutcome<A>, DomainError>
    where
        F: FnOnce() -> Result<A, DomainError>,
    {
        let mut aggregate = factory()?;

        self.repository.save(&aggregate).await?;
        let events = aggregate.take_domain_events();
        self.publisher.publish(&events).await?;

        Ok(CommandOutcome { aggregate, events })
    }

    /// Executes a command against an existing aggregate.
    ///
    /// The command function mutates the loaded aggregate; on success the
    /// aggregate is saved and its recorded events are published. A missing
    /// aggregate is a `NotFound` error. A rejected command propagates
    /// without saving, so the stored state is unchanged.
    pub async fn execute<F>(
        &self,
        aggregate_id: A::Id,
        command_fn: F,
    ) -> Result<CommandOutcome<A>, DomainError>
    where
        F: FnOnce(&mut A) -> Result<(), DomainError>,
    {
        let mut aggregate = self
            .repository
            .load(aggregate_id)
            .await?
            .ok_or_else(|| DomainError::not_found(A::aggregate_type(), aggregate_id))?;

        command_fn(&mut aggregate)?;

        self.repository.save(&aggregate).await?;
        let events = aggregate.take_domain_events();
        self.publisher.publish(&events).await?;

        Ok(CommandOutcome { aggregate, events })
    }

    /// Loads an aggregate by ID.
    ///
    /// Returns `None` if the aggregate doesn't exist.
    pub async fn load(&self, aggregate_id: A::Id) -> Result<Option<A>, DomainError> {
        self.repository.load(aggregate_id).await
    }
}

/// In-memory repository for tests and examples.
///
/// Stored copies have their event buffers cleared, matching what a real
/// storage round trip produces.
pub struct InMemoryRepository<A: AggregateRoot> {
    aggregates: Arc<RwLock<HashMap<A::Id, A>>>,
}

impl<A: AggregateRoot> InMemoryRepository<A> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            aggregates: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored aggregates.
    pub async fn count(&self) -> usize {
        self.aggregates.read().await.len()
    }

    /// Returns true if an aggregate with the given ID is stored.
    pub async fn contains(&self, aggregate_id: A::Id) -> bool {
        self.aggregates.read().await.contains_key(&aggregate_id)
    }

    /// Removes all stored aggregates.
    pub async fn clear(&self) {
        self.aggregates.write().await.clear();
    }
}

impl<A: AggregateRoot> Clone for InMemoryRepository<A> {
    fn clone(&self) -> Self {
        Self {
            aggregates: Arc::clone(&self.aggregates),
        }
    }
}

impl<A: AggregateRoot> Default for InMemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<A> Repository<A> for InMemoryRepository<A>
where
    A: AggregateRoot + Clone,
{
    async fn load(&self, aggregate_id: A::Id) -> Result<Option<A>, DomainError> {
        Ok(self.aggregates.read().await.get(&aggregate_id).cloned())
    }

    async fn save(&self, aggregate: &A) -> Result<(), DomainError> {
        let mut stored = aggregate.clone();
        stored.clear_domain_events();
        self.aggregates.write().await.insert(stored.id(), stored);
        Ok(())
    }
}

/// In-memory event publisher that collects everything it is given.
pub struct InMemoryEventPublisher<E> {
    published: Arc<RwLock<Vec<E>>>,
}

impl<E: DomainEvent> InMemoryEventPublisher<E> {
    /// Creates an empty publisher.
    pub fn new() -> Self {
        Self {
            published: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the number of published events.
    pub async fn count(&self) -> usize {
        self.published.read().await.len()
    }

    /// Returns a copy of everything published so far, in order.
    pub async fn published(&self) -> Vec<E> {
        self.published.read().await.clone()
    }

    /// Returns the event type names in publication order.
    pub async fn published_types(&self) -> Vec<&'static str> {
        self.published
            .read()
            .await
            .iter()
            .map(|event| event.event_type())
            .collect()
    }

    /// Discards everything published so far.
    pub async fn clear(&self) {
        self.published.write().await.clear();
    }
}

impl<E> Clone for InMemoryEventPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            published: Arc::clone(&self.published),
        }
    }
}

impl<E: DomainEvent> Default for InMemoryEventPublisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: DomainEvent> EventPublisher<E> for InMemoryEventPublisher<E> {
    async fn publish(&self, events: &[E]) -> Result<(), DomainError> {
        self.published.write().await.extend_from_slice(events);
        Ok(())
    }
}
