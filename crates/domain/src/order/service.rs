//! Order service providing a simplified API for order operations.

use hotplate_common::{MenuItemId, Money, OrderId};

use crate::aggregate::AggregateRoot;
use crate::command::{CommandHandler, CommandOutcome, EventPublisher, Repository};
use crate::error::DomainError;

use super::{
    AddItem, AssignRider, CancelOrder, CompleteDelivery, CompletePreparation, ConfirmOrder,
    CreateOrder, Order, OrderEvent, PlaceOrder, RemoveItem, StartPreparation, UpdateItemQuantity,
};

/// Service for managing orders.
///
/// Provides a high-level API for order operations, wrapping the command
/// handler and providing convenient methods for common operations.
pub struct OrderService<R, P>
where
    R: Repository<Order>,
    P: EventPublisher<OrderEvent>,
{
    handler: CommandHandler<R, P, Order>,
}

impl<R, P> OrderService<R, P>
where
    R: Repository<Order>,
    P: EventPublisher<OrderEvent>,
{
    /// Creates a new order service over a repository and a publisher.
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            handler: CommandHandler::new(repository, publisher),
        }
    }

    /// Returns a reference to the underlying command handler.
    pub fn handler(&self) -> &CommandHandler<R, P, Order> {
        &self.handler
    }

    /// Opens a new order for a customer.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(
        &self,
        cmd: CreateOrder,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        let outcome = self
            .handler
            .create(|| {
                Ok(Order::create(
                    cmd.customer_id,
                    cmd.restaurant_id,
                    cmd.delivery_address,
                    cmd.special_instructions.as_deref(),
                ))
            })
            .await?;

        tracing::info!(order_id = %outcome.aggregate.id(), "order created");
        Ok(outcome)
    }

    /// Adds an item to an order.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(&self, cmd: AddItem) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| {
                order.add_item(
                    cmd.menu_item_id,
                    &cmd.item_name,
                    cmd.unit_price,
                    cmd.quantity,
                    cmd.special_requests.as_deref(),
                )
            })
            .await
    }

    /// Removes an item from an order.
    #[tracing::instrument(skip(self))]
    pub async fn remove_item(&self, cmd: RemoveItem) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| order.remove_item(cmd.menu_item_id))
            .await
    }

    /// Updates the quantity of an item in an order.
    #[tracing::instrument(skip(self))]
    pub async fn update_item_quantity(
        &self,
        cmd: UpdateItemQuantity,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| {
                order.update_item_quantity(cmd.menu_item_id, cmd.new_quantity)
            })
            .await
    }

    /// Places an order, locking its items and computing the final price.
    #[tracing::instrument(skip(self))]
    pub async fn place_order(&self, cmd: PlaceOrder) -> Result<CommandOutcome<Order>, DomainError> {
        let outcome = self
            .handler
            .execute(cmd.order_id, |order| {
                order.place(cmd.delivery_fee, cmd.tax_rate)
            })
            .await?;

        tracing::info!(
            order_id = %cmd.order_id,
            total = %outcome.aggregate.total_amount(),
            "order placed"
        );
        Ok(outcome)
    }

    /// Confirms an order on behalf of the restaurant.
    #[tracing::instrument(skip(self))]
    pub async fn confirm_order(
        &self,
        cmd: ConfirmOrder,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| {
                order.confirm_by_restaurant(cmd.estimated_preparation_minutes)
            })
            .await
    }

    /// Starts preparing an order.
    #[tracing::instrument(skip(self))]
    pub async fn start_preparation(
        &self,
        cmd: StartPreparation,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| order.start_preparation())
            .await
    }

    /// Marks an order ready for pickup.
    #[tracing::instrument(skip(self))]
    pub async fn complete_preparation(
        &self,
        cmd: CompletePreparation,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| order.complete_preparation())
            .await
    }

    /// Hands an order to a rider.
    #[tracing::instrument(skip(self))]
    pub async fn assign_rider(
        &self,
        cmd: AssignRider,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| order.assign_to_rider(cmd.rider_id))
            .await
    }

    /// Marks an order as delivered.
    #[tracing::instrument(skip(self))]
    pub async fn complete_delivery(
        &self,
        cmd: CompleteDelivery,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.handler
            .execute(cmd.order_id, |order| order.complete_delivery())
            .await
    }

    /// Cancels an order.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        cmd: CancelOrder,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        let outcome = self
            .handler
            .execute(cmd.order_id, |order| order.cancel(&cmd.reason))
            .await?;

        tracing::info!(order_id = %cmd.order_id, "order cancelled");
        Ok(outcome)
    }

    /// Loads an order by ID.
    ///
    /// Returns None if the order doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Option<Order>, DomainError> {
        self.handler.load(order_id).await
    }

    /// Adds an item using individual fields.
    pub async fn add_item_to_order(
        &self,
        order_id: OrderId,
        menu_item_id: MenuItemId,
        item_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<CommandOutcome<Order>, DomainError> {
        self.add_item(AddItem::new(
            order_id,
            menu_item_id,
            item_name,
            unit_price,
            quantity,
            None,
        ))
        .await
    }
}
