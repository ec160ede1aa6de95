use serde::Deserialize;

use katas_core::{KataError, KataResult};
use katas_inline_function::{Customer, Order};

/// Input for one run of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Free text, for the vowel counter.
    Text(String),
    /// A customer and their orders, for the invoice builder.
    Invoice {
        customer: Customer,
        orders: Vec<Order>,
    },
}

#[derive(Deserialize)]
struct InvoiceDocument {
    customer: Customer,
    #[serde(default)]
    orders: Vec<Order>,
}

impl Input {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Parse `{ "customer": {...}, "orders": [...] }`. A missing `orders`
    /// key is an empty order list.
    pub fn invoice_from_json(json: &str) -> KataResult<Self> {
        let doc: InvoiceDocument = serde_json::from_str(json)
            .map_err(|e| KataError::invalid_input(format!("invoice document: {e}")))?;
        Ok(Self::Invoice {
            customer: doc.customer,
            orders: doc.orders,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Input::Text(_) => "text",
            Input::Invoice { .. } => "invoice",
        }
    }
}
