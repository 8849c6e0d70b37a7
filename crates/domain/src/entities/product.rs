//! Product entity - An item offered by the storefront catalog

use serde::{Deserialize, Serialize};

use crate::value_objects::{Money, ProductName};
use shophub_domain::ProductId;

/// A product offered for sale
///
/// Simple data struct: the name and price newtypes carry their own invariants,
/// so any combination of fields is valid. Products are never mutated once
/// loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: String,
    pub price: Money,
    /// Display glyph shown in place of a product image
    pub emoji: String,
}

impl Product {
    pub fn new(id: ProductId, name: ProductName, price: Money) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            price,
            emoji: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }
}
