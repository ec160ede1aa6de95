//! One suite, run against the exercise and the solution.

use katas_core::{Clock, FixedClock};
use proptest::prelude::*;

use crate::{Address, CreateInvoiceFn, Customer, Invoice, Order, VARIANTS};

fn test_clock() -> FixedClock {
    FixedClock::from_ymd(2024, 5, 30).unwrap()
}

fn test_customer() -> Customer {
    Customer::new(
        "C12345",
        "John Doe",
        Address::new("123 Main St", "12345", "Anytown", "USA"),
    )
}

fn test_orders() -> Vec<Order> {
    vec![
        Order::new("A1", "Widget", 2, 10),
        Order::new("A2", "Gadget", 1, 15),
    ]
}

mod suite {
    use super::*;

    pub fn creates_invoice_with_expected_structure(create_invoice: CreateInvoiceFn) {
        let invoice = create_invoice(&test_clock(), &test_customer(), &test_orders());

        let expected = Invoice {
            customer_id: "C12345".to_string(),
            name: "John Doe".to_string(),
            address: "123 Main St,\n12345,\nAnytown,\nUSA".to_string(),
            orders: vec![
                Order {
                    total: Some(20),
                    ..Order::new("A1", "Widget", 2, 10)
                },
                Order {
                    total: Some(15),
                    ..Order::new("A2", "Gadget", 1, 15)
                },
            ],
            total: 35,
            created_at: "Thu May 30 2024".to_string(),
        };
        assert_eq!(invoice, Some(expected));
    }

    pub fn returns_none_for_empty_orders(create_invoice: CreateInvoiceFn) {
        assert_eq!(create_invoice(&test_clock(), &test_customer(), &[]), None);
    }

    pub fn stamps_the_clock_date(create_invoice: CreateInvoiceFn) {
        let clock = FixedClock::from_ymd(2023, 12, 31).unwrap();
        let invoice = create_invoice(&clock, &test_customer(), &test_orders()).unwrap();
        assert_eq!(invoice.created_at, "Sun Dec 31 2023");
    }

    pub fn preserves_order_sequence(create_invoice: CreateInvoiceFn) {
        let orders = vec![
            Order::new("Z9", "Zeta", 3, 1),
            Order::new("A1", "Alpha", 1, 100),
            Order::new("M5", "Mu", 0, 7),
        ];
        let invoice = create_invoice(&test_clock(), &test_customer(), &orders).unwrap();

        let ids: Vec<_> = invoice.orders.iter().map(|o| o.article_id.as_str()).collect();
        assert_eq!(ids, ["Z9", "A1", "M5"]);
        let totals: Vec<_> = invoice.orders.iter().map(|o| o.total).collect();
        assert_eq!(totals, [Some(3), Some(100), Some(0)]);
        assert_eq!(invoice.total, 103);
    }

    pub fn does_not_touch_the_input(create_invoice: CreateInvoiceFn) {
        let orders = test_orders();
        let _ = create_invoice(&test_clock(), &test_customer(), &orders);
        assert!(orders.iter().all(|o| o.total.is_none()));
    }

    pub fn same_input_same_invoice(create_invoice: CreateInvoiceFn) {
        let clock = test_clock();
        let first = create_invoice(&clock, &test_customer(), &test_orders());
        let second = create_invoice(&clock, &test_customer(), &test_orders());
        assert_eq!(first, second);
    }
}

katas_core::verify_variants!(VARIANTS, suite: [
    creates_invoice_with_expected_structure,
    returns_none_for_empty_orders,
    stamps_the_clock_date,
    preserves_order_sequence,
    does_not_touch_the_input,
    same_input_same_invoice,
]);

#[test]
fn invoice_serializes_with_camel_case_fields() {
    let invoice = (VARIANTS.solution)(&test_clock(), &test_customer(), &test_orders()).unwrap();
    let json = serde_json::to_value(&invoice).unwrap();

    assert_eq!(json["customerId"], "C12345");
    assert_eq!(json["createdAt"], "Thu May 30 2024");
    assert_eq!(json["orders"][0]["articleName"], "Widget");
    assert_eq!(json["orders"][1]["total"], 15);
    assert_eq!(json["total"], 35);
}

#[test]
fn order_without_total_omits_the_field() {
    let json = serde_json::to_value(Order::new("A1", "Widget", 2, 10)).unwrap();
    assert!(json.get("total").is_none());

    let parsed: Order =
        serde_json::from_str(r#"{"articleId":"A1","articleName":"Widget","quantity":2,"price":10}"#)
            .unwrap();
    assert_eq!(parsed, Order::new("A1", "Widget", 2, 10));
}

fn arb_order() -> impl Strategy<Value = Order> {
    ("[A-Z][0-9]{1,3}", "[a-zA-Z ]{1,12}", 0u32..1_000, 0u64..1_000_000)
        .prop_map(|(id, name, quantity, price)| Order::new(id, name, quantity, price))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: grand total = sum of price * quantity, each order carries
    /// its own product, and reversing the input only reverses the output.
    #[test]
    fn totals_follow_price_times_quantity(orders in prop::collection::vec(arb_order(), 1..16)) {
        let clock = test_clock();
        let customer = test_customer();
        let expected: u64 = orders.iter().map(|o| o.price * u64::from(o.quantity)).sum();

        for (variant, create_invoice) in VARIANTS.iter() {
            let invoice = create_invoice(&clock, &customer, &orders).unwrap();
            prop_assert_eq!(invoice.total, expected, "variant: {}", variant);
            prop_assert_eq!(invoice.orders.len(), orders.len());

            let line_sum: u64 = invoice.orders.iter().filter_map(|o| o.total).sum();
            prop_assert_eq!(line_sum, invoice.total);

            for (line, input) in invoice.orders.iter().zip(&orders) {
                prop_assert_eq!(&line.article_id, &input.article_id);
                prop_assert_eq!(line.total, Some(input.price * u64::from(input.quantity)));
            }

            let mut reversed = orders.clone();
            reversed.reverse();
            let reversed_invoice = create_invoice(&clock, &customer, &reversed).unwrap();
            prop_assert_eq!(reversed_invoice.total, invoice.total);
            let mut back = reversed_invoice.orders.clone();
            back.reverse();
            prop_assert_eq!(back, invoice.orders);
        }
    }

    /// Property: under the same clock, exercise and solution build equal invoices.
    #[test]
    fn exercise_and_solution_agree(
        orders in prop::collection::vec(arb_order(), 0..8),
        days in 0i64..20_000,
    ) {
        let start = test_clock().now();
        let clock = FixedClock::new(start - chrono::Duration::days(days));
        let customer = test_customer();

        let exercise = (VARIANTS.exercise)(&clock, &customer, &orders);
        let solution = (VARIANTS.solution)(&clock, &customer, &orders);
        prop_assert_eq!(exercise.is_none(), orders.is_empty());
        prop_assert_eq!(exercise, solution);
    }
}
