use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Product;
use crate::error::{require, require_non_empty, ValidationError};

/// Lifecycle state of an order. Any state may be overwritten by any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(OrderStatus::Created),
            "PENDING" => Ok(OrderStatus::Pending),
            "COMPLETED" => Ok(OrderStatus::Completed),
            other => Err(ValidationError::new(
                "status",
                format!("`{other}` is not one of CREATED, PENDING, COMPLETED"),
            )),
        }
    }
}

/// A stored order. `products` holds product ids that are not checked for
/// existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "buyerEmail")]
    pub buyer_email: String,
    pub products: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// An order with its product references replaced by the product records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulatedOrder {
    pub id: String,
    #[serde(rename = "buyerEmail")]
    pub buyer_email: String,
    pub products: Vec<Product>,
    pub status: OrderStatus,
}

/// Fields supplied by the caller when placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewOrder {
    #[serde(default, rename = "buyerEmail")]
    pub buyer_email: Option<String>,
    #[serde(default)]
    pub products: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl NewOrder {
    pub fn new<I, S>(buyer_email: impl Into<String>, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            buyer_email: Some(buyer_email.into()),
            products: Some(products.into_iter().map(Into::into).collect()),
            status: None,
        }
    }
}

/// Allow-listed changes for [`Order`]; the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub buyer_email: Option<String>,
    pub products: Option<Vec<String>>,
    pub status: Option<OrderStatus>,
}

/// Find filter for orders. Present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub product_id: Option<String>,
    pub status: Option<OrderStatus>,
}

impl Order {
    pub fn from_fields(id: String, fields: NewOrder) -> Result<Self, ValidationError> {
        let order = Self {
            id,
            buyer_email: require("buyerEmail", fields.buyer_email)?,
            products: require("products", fields.products)?,
            status: fields.status.unwrap_or_default(),
        };
        order.validate()?;
        Ok(order)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("buyerEmail", &self.buyer_email)?;
        for (index, product_id) in self.products.iter().enumerate() {
            require_non_empty(&format!("products.{index}"), product_id)?;
        }
        Ok(())
    }

    /// Overwrites every field present in the patch, then re-validates.
    pub fn apply(&mut self, patch: OrderPatch) -> Result<(), ValidationError> {
        if let Some(buyer_email) = patch.buyer_email {
            self.buyer_email = buyer_email;
        }
        if let Some(products) = patch.products {
            self.products = products;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.validate()
    }

    pub fn references(&self, product_id: &str) -> bool {
        self.products.iter().any(|id| id == product_id)
    }

    /// Pairs this order with already-fetched products. References that were
    /// not found are dropped; the remaining ones keep their order.
    pub fn with_products(self, found: &[Product]) -> PopulatedOrder {
        let products = self
            .products
            .iter()
            .filter_map(|id| found.iter().find(|product| &product.id == id).cloned())
            .collect();
        PopulatedOrder {
            id: self.id,
            buyer_email: self.buyer_email,
            products,
            status: self.status,
        }
    }
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let product_ok = self
            .product_id
            .as_deref()
            .map_or(true, |product_id| order.references(product_id));
        let status_ok = self.status.map_or(true, |status| order.status == status);
        product_ok && status_ok
    }
}
