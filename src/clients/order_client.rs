use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::{ProductClient, UserClient};
use crate::clock::Clock;
use crate::domain::{order_total, Order, OrderCreate, OrderStatus, Role};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::scheduler::{Scheduler, Transition};

/// Client for the Order actor.
///
/// Owns the order side of the lifecycle: validates the buyer, reserves stock,
/// creates Pending orders and schedules their acceptance.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
    scheduler: Scheduler,
    clock: Arc<dyn Clock>,
    accept_delay: Duration,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
        scheduler: Scheduler,
        clock: Arc<dyn Clock>,
        accept_delay: Duration,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
            scheduler,
            clock,
            accept_delay,
        }
    }

    /// Places an order for `quantity` kg of a product.
    ///
    /// Stock is reserved before the order exists, in one step inside the
    /// product actor. The new order is Pending and gets auto-accepted after the
    /// configured delay.
    ///
    /// # Errors
    /// - `NotFound` for an unknown buyer or product.
    /// - `InvalidState` for a zero quantity or more than the current stock.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        product_id: String,
        buyer_id: String,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        if quantity == 0 {
            return Err(OrderError::InvalidState("Order quantity must be positive".to_string()));
        }

        // Step 1: Validate buyer
        let buyer = self.user_client.require_user(buyer_id.clone()).await.map_err(|e| {
            error!(error = %e, "Buyer validation failed");
            OrderError::from(e)
        })?;
        info!(buyer_name = %buyer.name, "Buyer validation successful");

        // Step 2: Reserve stock (fails for unknown products too)
        let product = self
            .product_client
            .reserve_stock(product_id.clone(), quantity)
            .await
            .map_err(|e| {
                error!(error = %e, "Stock reservation failed");
                OrderError::from(e)
            })?;
        info!(product_name = %product.name, remaining = product.quantity, "Stock reserved successfully");

        // Step 3: Create order
        let payload = OrderCreate {
            product_id: product_id.clone(),
            product_name: product.name,
            buyer_id,
            seller_id: product.farmer_id,
            quantity,
            total_price: order_total(quantity, product.price),
            order_date: self.clock.now(),
        };
        let order = match self.inner.create(payload).await {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Order creation failed, releasing reserved stock");
                if let Err(release) = self.product_client.release_stock(product_id, quantity).await {
                    error!(error = %release, "Stock release failed");
                }
                return Err(e.into());
            }
        };
        info!(order_id = %order.id, total_price = order.total_price, "Order created successfully");

        // Step 4: Farmer acceptance happens later, on its own
        self.scheduler
            .schedule(self.accept_delay, Transition::AcceptOrder(order.id.clone()));

        Ok(order)
    }

    /// Sets the status without checking the transition table.
    ///
    /// This is the manual override; overwrites that skip or reverse the
    /// lifecycle are logged but allowed. Entering Delivered stamps the delivery
    /// date, leaving it clears the date.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: String,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let (result, order) = self
            .inner
            .perform_action(order_id, OrderAction::Overwrite { status, at: self.clock.now() })
            .await?;
        if let OrderActionResult::Moved { from } = result {
            if from != status && !from.can_transition_to(status) {
                warn!(%from, to = %status, "Order status overwritten outside the lifecycle");
            } else {
                info!(%from, to = %status, "Order status updated");
            }
        }
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: String) -> Result<Order, OrderError> {
        let (_, order) = self.inner.perform_action(order_id, OrderAction::Cancel).await?;
        info!("Order cancelled");
        Ok(order)
    }

    /// Guarded Pending → Accepted. Anything but a Pending order is left alone.
    #[instrument(skip(self))]
    pub async fn accept_order(&self, order_id: String) -> Result<(OrderActionResult, Order), OrderError> {
        Ok(self.inner.perform_action(order_id, OrderAction::Accept).await?)
    }

    /// Accepted → Shipped. This is the step that claims the order for a shipment.
    #[instrument(skip(self))]
    pub async fn mark_shipped(&self, order_id: String) -> Result<Order, OrderError> {
        let (_, order) = self.inner.perform_action(order_id, OrderAction::Ship).await?;
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn attach_shipment(&self, order_id: String, shipping_id: String) -> Result<Order, OrderError> {
        let (_, order) = self
            .inner
            .perform_action(order_id, OrderAction::AttachShipment(shipping_id))
            .await?;
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, order_id: String, at: DateTime<Utc>) -> Result<Order, OrderError> {
        let (_, order) = self
            .inner
            .perform_action(order_id, OrderAction::Deliver { at })
            .await?;
        Ok(order)
    }

    /// Like `get_order`, but an unknown id is an error.
    pub async fn require_order(&self, order_id: String) -> Result<Order, OrderError> {
        self.get_order(order_id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(format!("order {}", order_id)))
    }

    #[instrument(skip(self))]
    pub async fn get_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|o| o.status == status).collect())
    }

    /// Orders visible to a user in the given role, newest first.
    ///
    /// Farmers see orders on their products, wholesalers and retailers their own
    /// purchases, logistics every order that is Accepted or Shipped.
    #[instrument(skip(self))]
    pub async fn get_orders_by_role(&self, user_id: String, role: Role) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        let mut visible: Vec<Order> = orders
            .into_iter()
            .rev()
            .filter(|o| match role {
                Role::Farmer => o.seller_id == user_id,
                Role::Wholesaler | Role::Retailer => o.buyer_id == user_id,
                Role::Logistics => matches!(o.status, OrderStatus::Accepted | OrderStatus::Shipped),
            })
            .collect();
        visible.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(visible)
    }

    /// Sum of delivered order totals for a farmer.
    #[instrument(skip(self))]
    pub async fn revenue_for_seller(&self, farmer_id: String) -> Result<f64, OrderError> {
        let orders = self.list_orders().await?;
        let total: f64 = orders
            .iter()
            .filter(|o| o.seller_id == farmer_id && o.status == OrderStatus::Delivered)
            .map(|o| o.total_price)
            .sum();
        Ok((total * 100.0).round() / 100.0)
    }
}
