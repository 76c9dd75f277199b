use charm_catalog::{Item, ItemError};
use charm_core::member::{Address, Member};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Order,
    Cancel,
}

/// Delivery status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Ready,
    Comp,
}

/// Order line status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderItemStatus {
    Active,
    Cancelled,
}

/// Shipment record owned by exactly one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    /// Back-reference to the owning order, set when the order is placed.
    pub order_id: Option<Uuid>,
    pub address: Address,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn new(address: Address) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: None,
            address,
            status: DeliveryStatus::Ready,
        }
    }
}

/// One line of an order: a catalog item snapshot plus quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    /// Back-reference to the owning order, set when the line is attached.
    pub order_id: Option<Uuid>,
    pub item_id: Uuid,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
    pub status: OrderItemStatus,
}

impl OrderItem {
    /// Create a line for `count` units of `item`, taking the stock up front.
    pub fn create(item: &mut Item, order_price: i32, count: i32) -> Result<Self, ItemError> {
        item.remove_stock(count)?;

        Ok(Self {
            id: Uuid::new_v4(),
            order_id: None,
            item_id: item.id,
            item_name: item.name.clone(),
            order_price,
            count,
            status: OrderItemStatus::Active,
        })
    }

    /// Mark the line cancelled. The stock it took is restored by the caller
    /// holding the catalog item; `count` stays readable for that.
    pub fn cancel(&mut self) {
        self.status = OrderItemStatus::Cancelled;
    }

    /// Line total: unit price at ordering time times quantity.
    pub fn total_price(&self) -> i32 {
        self.order_price * self.count
    }
}

/// The order aggregate: owns its lines and its delivery, references its member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub member_id: Uuid,
    pub items: Vec<OrderItem>,
    pub delivery: Option<Delivery>,
    pub ordered_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Place a new order for `member`, linking every collaborator in one
    /// step: the delivery and each line receive their back-references, in
    /// input order, and the member's order index gains the new id.
    pub fn place(
        member: &mut Member,
        delivery: Delivery,
        items: Vec<OrderItem>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut order = Self {
            id: Uuid::new_v4(),
            member_id: member.id,
            items: Vec::with_capacity(items.len()),
            delivery: None,
            ordered_at: now,
            status: OrderStatus::Order,
        };

        order.attach_delivery(delivery);
        for item in items {
            order.attach_item(item);
        }
        member.register_order(order.id);

        order
    }

    fn attach_item(&mut self, mut item: OrderItem) {
        item.order_id = Some(self.id);
        self.items.push(item);
    }

    fn attach_delivery(&mut self, mut delivery: Delivery) {
        delivery.order_id = Some(self.id);
        self.delivery = Some(delivery);
    }

    /// Cancel the order and every line on it, in sequence order. Rejected
    /// once the delivery has completed, and rejected again on an order that
    /// is already cancelled; nothing is mutated on either rejection.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        let delivery = self
            .delivery
            .as_ref()
            .ok_or(OrderError::DeliveryMissing(self.id))?;

        if delivery.status == DeliveryStatus::Comp {
            return Err(OrderError::AlreadyDelivered);
        }
        if self.status == OrderStatus::Cancel {
            return Err(OrderError::AlreadyCancelled(self.id));
        }

        self.status = OrderStatus::Cancel;
        for item in &mut self.items {
            item.cancel();
        }

        Ok(())
    }

    /// Total over all lines; zero for an empty order.
    pub fn total_price(&self) -> i32 {
        self.items.iter().map(OrderItem::total_price).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("a completed delivery's items cannot be cancelled")]
    AlreadyDelivered,

    #[error("order {0} is already cancelled")]
    AlreadyCancelled(Uuid),

    #[error("order {0} has no delivery attached")]
    DeliveryMissing(Uuid),
}
