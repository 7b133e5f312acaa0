//! Cart
//!
//! Session-local ordered collection of scanned items. Every operation
//! returns a new `Cart`; lines are never mutated through shared references.

use serde::{Deserialize, Serialize};

use crate::models::InventoryItem;
use crate::money::Money;

/// One product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub sku: String,
    pub name: String,
    pub price: Money,
    pub qty: u32,
}

impl CartLine {
    fn from_item(item: &InventoryItem) -> Self {
        Self {
            sku: item.sku.clone(),
            name: item.name.clone(),
            price: item.price,
            qty: 1,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * self.qty
    }
}

/// Ordered cart; at most one line per SKU
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0u32, |n, l| n.saturating_add(l.qty))
    }

    /// Cart with `item` added: an existing line for the SKU gains one unit
    /// and keeps its position, otherwise a new line is appended.
    pub fn with_item(&self, item: &InventoryItem) -> Cart {
        let mut found = false;
        let mut lines: Vec<CartLine> = self
            .lines
            .iter()
            .map(|line| {
                if line.sku == item.sku {
                    found = true;
                    CartLine { qty: line.qty.saturating_add(1), ..line.clone() }
                } else {
                    line.clone()
                }
            })
            .collect();
        if !found {
            lines.push(CartLine::from_item(item));
        }
        Cart { lines }
    }

    /// Always recomputed from the lines
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn cleared(&self) -> Cart {
        Cart::new()
    }
}
