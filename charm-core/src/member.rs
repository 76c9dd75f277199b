use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Postal address, shared by members and deliveries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

/// A registered shop member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub address: Option<Address>,
    /// Ids of orders placed by this member. Appended only by order placement.
    pub order_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn new(name: String, address: Option<Address>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            address,
            order_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Record an order under this member. Called from the order aggregate's
    /// placement path; the index has no other writer.
    pub fn register_order(&mut self, order_id: Uuid) {
        self.order_ids.push(order_id);
    }
}
