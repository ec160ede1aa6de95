use katas_core::{Clock, date_string};

use crate::model::{Customer, Invoice, Order};

fn format_customer_address(customer: &Customer) -> String {
    let address = &customer.address;
    format!(
        "{},\n{},\n{},\n{}",
        address.street, address.zip, address.city, address.country
    )
}

fn calc_order_total(order: &Order) -> u64 {
    order.price.saturating_mul(u64::from(order.quantity))
}

fn add_order_total(order: &Order) -> Order {
    Order {
        total: Some(calc_order_total(order)),
        ..order.clone()
    }
}

fn calc_orders_with_total(orders: &[Order]) -> Vec<Order> {
    orders.iter().map(add_order_total).collect()
}

fn calc_total(orders: &[Order]) -> u64 {
    orders.iter().fold(0u64, |sum, order| {
        sum.saturating_add(order.price.saturating_mul(u64::from(order.quantity)))
    })
}

fn get_date_string(clock: &dyn Clock) -> String {
    date_string(clock.now())
}

pub fn create_invoice(clock: &dyn Clock, customer: &Customer, orders: &[Order]) -> Option<Invoice> {
    if orders.is_empty() {
        return None;
    }

    Some(Invoice {
        customer_id: customer.customer_id.clone(),
        name: customer.name.clone(),
        address: format_customer_address(customer),
        orders: calc_orders_with_total(orders),
        total: calc_total(orders),
        created_at: get_date_string(clock),
    })
}
