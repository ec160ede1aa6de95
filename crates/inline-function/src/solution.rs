use katas_core::{Clock, date_string};

use crate::model::{Customer, Invoice, Order};

fn format_customer_address(customer: &Customer) -> String {
    let address = &customer.address;
    format!(
        "{},\n{},\n{},\n{}",
        address.street, address.zip, address.city, address.country
    )
}

pub fn create_invoice(clock: &dyn Clock, customer: &Customer, orders: &[Order]) -> Option<Invoice> {
    if orders.is_empty() {
        return None;
    }

    Some(Invoice {
        customer_id: customer.customer_id.clone(),
        name: customer.name.clone(),
        address: format_customer_address(customer),
        orders: orders
            .iter()
            .map(|order| Order {
                total: Some(order.price.saturating_mul(u64::from(order.quantity))),
                ..order.clone()
            })
            .collect(),
        total: orders.iter().fold(0u64, |sum, order| {
            sum.saturating_add(order.price.saturating_mul(u64::from(order.quantity)))
        }),
        created_at: date_string(clock.now()),
    })
}
