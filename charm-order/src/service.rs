use std::sync::Arc;

use charm_catalog::{ItemError, ItemRepository};
use charm_core::repository::MemberRepository;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Delivery, Order, OrderError, OrderItem};
use crate::repository::{OrderRepository, OrderSearch};

/// Places and cancels orders across the member, catalog and order stores.
///
/// Every fallible load runs before the first write, so a rejected operation
/// leaves all three stores untouched.
pub struct OrderService {
    members: Arc<dyn MemberRepository>,
    items: Arc<dyn ItemRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        items: Arc<dyn ItemRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            members,
            items,
            orders,
        }
    }

    /// Place an order of `count` units of one catalog item for one member,
    /// shipping to the member's address.
    pub async fn place_order(
        &self,
        member_id: Uuid,
        item_id: Uuid,
        count: i32,
    ) -> Result<Uuid, OrderServiceError> {
        let mut member = self
            .members
            .find_one(member_id)
            .await?
            .ok_or(OrderServiceError::MemberNotFound(member_id))?;
        let mut item = self
            .items
            .find_one(item_id)
            .await?
            .ok_or(OrderServiceError::ItemNotFound(item_id))?;
        let address = member
            .address
            .clone()
            .ok_or(OrderServiceError::NoDeliveryAddress(member_id))?;

        let price = item.price;
        let line = OrderItem::create(&mut item, price, count)?;
        let delivery = Delivery::new(address);
        let order = Order::place(&mut member, delivery, vec![line], Utc::now());

        self.items.save(&item).await?;
        self.members.save(&member).await?;
        let order_id = self.orders.save(&order).await?;

        tracing::info!(%order_id, %member_id, %item_id, count, "order placed");
        Ok(order_id)
    }

    /// Cancel an order, restoring the stock its lines had taken.
    pub async fn cancel_order(&self, order_id: Uuid) -> Result<(), OrderServiceError> {
        let mut order = self
            .orders
            .find_one(order_id)
            .await?
            .ok_or(OrderServiceError::OrderNotFound(order_id))?;

        // Load every affected catalog item before the first write.
        let mut restocks = Vec::with_capacity(order.items.len());
        for line in &order.items {
            let item = self
                .items
                .find_one(line.item_id)
                .await?
                .ok_or(OrderServiceError::ItemNotFound(line.item_id))?;
            restocks.push((item, line.count));
        }

        order.cancel()?;

        for (mut item, count) in restocks {
            item.add_stock(count);
            self.items.save(&item).await?;
        }
        self.orders.save(&order).await?;

        tracing::info!(%order_id, "order cancelled");
        Ok(())
    }

    pub async fn find_order(&self, order_id: Uuid) -> Result<Order, OrderServiceError> {
        self.orders
            .find_one(order_id)
            .await?
            .ok_or(OrderServiceError::OrderNotFound(order_id))
    }

    /// Look up orders by owner name and/or status.
    pub async fn find_orders(&self, search: OrderSearch) -> Result<Vec<Order>, OrderServiceError> {
        let mut orders = match &search.member_name {
            Some(name) => {
                let members = self.members.find_by_name(name).await?;
                let mut found = Vec::new();
                for member in members {
                    found.extend(self.orders.find_by_member(member.id).await?);
                }
                found
            }
            None => self.orders.find_all().await?,
        };

        if let Some(status) = search.status {
            orders.retain(|order| order.status == status);
        }
        Ok(orders)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("member not found: {0}")]
    MemberNotFound(Uuid),

    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("member {0} has no delivery address on file")]
    NoDeliveryAddress(Uuid),

    #[error("stock update rejected: {0}")]
    Item(#[from] ItemError),

    #[error("order state transition rejected: {0}")]
    Order(#[from] OrderError),

    #[error("order storage failed: {0}")]
    Storage(#[from] Box<dyn std::error::Error + Send + Sync>),
}
