//! Product catalog
//!
//! The storefront sells a fixed, read-only list of products loaded once at
//! startup. Nothing in the cart depends on the catalog being dynamic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::error::DomainError;
use crate::value_objects::{Money, ProductName};
use crate::ProductId;

/// (id, name, description, price in cents, emoji)
const DEMO_PRODUCTS: &[(u32, &str, &str, u64, &str)] = &[
    (
        1,
        "Wireless Headphones",
        "High-quality noise-cancelling wireless headphones with 30-hour battery life",
        8999,
        "🎧",
    ),
    (
        2,
        "Smart Watch",
        "Fitness tracker with heart rate monitor and GPS functionality",
        19999,
        "⌚",
    ),
    (
        3,
        "Laptop Stand",
        "Ergonomic aluminum laptop stand for better posture and cooling",
        3999,
        "💻",
    ),
    (
        4,
        "Mechanical Keyboard",
        "RGB backlit mechanical keyboard with cherry MX switches",
        7999,
        "⌨️",
    ),
    (
        5,
        "Wireless Mouse",
        "Ergonomic wireless mouse with 12,000 DPI sensor",
        2999,
        "🖱️",
    ),
    (
        6,
        "USB-C Hub",
        "7-in-1 USB-C hub with HDMI, USB 3.0, and SD card reader",
        4999,
        "🔌",
    ),
    (
        7,
        "Webcam HD",
        "1080p HD webcam with built-in microphone and privacy shutter",
        5999,
        "📹",
    ),
    (
        8,
        "Desk Lamp",
        "LED desk lamp with adjustable brightness and color temperature",
        3499,
        "💡",
    ),
];

/// Read-only list of products offered by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(DomainError::constraint(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The storefront's built-in product list
    pub fn demo() -> Result<Self, DomainError> {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(id, name, description, cents, emoji)| -> Result<Product, DomainError> {
                Ok(Product::new(
                    ProductId::new(id),
                    ProductName::new(name)?,
                    Money::from_cents(cents),
                )
                .with_description(description)
                .with_emoji(emoji))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = DomainError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}
