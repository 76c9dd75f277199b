use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog item categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Book,
    Album,
    Movie,
}

/// A purchasable catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub category: ItemCategory,
}

impl Item {
    pub fn new(name: String, price: i32, stock_quantity: i32, category: ItemCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            stock_quantity,
            category,
        }
    }

    /// Return stock, e.g. when an order line is cancelled.
    pub fn add_stock(&mut self, quantity: i32) {
        self.stock_quantity += quantity;
    }

    /// Take stock for an order line. Fails without mutating when the
    /// remaining stock does not cover the request.
    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), ItemError> {
        let remaining = self.stock_quantity - quantity;
        if remaining < 0 {
            return Err(ItemError::NotEnoughStock {
                requested: quantity,
                remaining: self.stock_quantity,
            });
        }

        self.stock_quantity = remaining;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("not enough stock: requested {requested}, remaining {remaining}")]
    NotEnoughStock {
        requested: i32,
        remaining: i32,
    },
}
