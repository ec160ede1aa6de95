use serde::{Deserialize, Serialize};

use katas_core::ValueObject;

/// Postal address, free-form per component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            zip: zip.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

impl ValueObject for Address {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub address: Address,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            address,
        }
    }
}

impl ValueObject for Customer {}

/// One ordered article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub article_id: String,
    pub article_name: String,
    pub quantity: u32,
    /// Unit price in smallest currency unit.
    pub price: u64,
    /// `price * quantity`; only set on orders copied into an [`Invoice`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Order {
    pub fn new(
        article_id: impl Into<String>,
        article_name: impl Into<String>,
        quantity: u32,
        price: u64,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            article_name: article_name.into(),
            quantity,
            price,
            total: None,
        }
    }
}

impl ValueObject for Order {}

/// Snapshot of a customer's orders at creation time.
///
/// Invariants:
/// - `orders` is non-empty and in input order
/// - every order carries `total == price * quantity`
/// - `total` is the sum of the order totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub customer_id: String,
    pub name: String,
    /// Address components joined by `",\n"`.
    pub address: String,
    pub orders: Vec<Order>,
    pub total: u64,
    /// Calendar date, e.g. `Thu May 30 2024`.
    pub created_at: String,
}

impl ValueObject for Invoice {}
