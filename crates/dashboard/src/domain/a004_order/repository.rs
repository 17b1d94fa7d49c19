use chrono::NaiveDate;
use contracts::domain::a004_order::aggregate::{Order, OrderLine, OrderStatus};

use crate::shared::seed::date;

fn line(name: &str, quantity: u32, price: f64) -> OrderLine {
    OrderLine {
        name: name.into(),
        quantity,
        price,
    }
}

fn order(id: &str, lines: Vec<OrderLine>, status: OrderStatus, order_date: NaiveDate) -> Order {
    Order {
        id: id.into(),
        customer_name: None,
        customer_email: None,
        lines,
        status,
        order_date,
        delivery_date: None,
        tracking_number: None,
        shipping_address: None,
    }
}

fn with_customer(mut order: Order, name: &str, email: &str) -> Order {
    order.customer_name = Some(name.into());
    order.customer_email = Some(email.into());
    order
}

fn with_delivery(mut order: Order, delivery: NaiveDate, tracking: Option<&str>, address: &str) -> Order {
    order.delivery_date = Some(delivery);
    order.tracking_number = tracking.map(str::to_string);
    order.shipping_address = Some(address.into());
    order
}

/// Заказы всех покупателей (администратор)
pub fn seed() -> Vec<Order> {
    let mut delivered = with_customer(
        order(
            "ORD-001",
            vec![line("Organic Bananas", 2, 2.99), line("Whole Wheat Bread", 1, 3.49)],
            OrderStatus::Delivered,
            date(2024, 1, 15),
        ),
        "John Doe",
        "john@example.com",
    );
    delivered.delivery_date = Some(date(2024, 1, 17));

    vec![
        delivered,
        with_customer(
            order(
                "ORD-002",
                vec![line("Organic Milk", 1, 4.99), line("Fresh Eggs", 1, 3.99)],
                OrderStatus::Shipped,
                date(2024, 1, 16),
            ),
            "Jane Smith",
            "jane@example.com",
        ),
        with_customer(
            order(
                "ORD-003",
                vec![line("Organic Bananas", 3, 2.99)],
                OrderStatus::Processing,
                date(2024, 1, 17),
            ),
            "Bob Johnson",
            "bob@example.com",
        ),
    ]
}

/// Заказы владельца бизнеса с трек-номерами
pub fn owner_seed() -> Vec<Order> {
    vec![
        with_delivery(
            order(
                "ORD-001",
                vec![line("Organic Bananas", 2, 2.99), line("Whole Wheat Bread", 1, 3.49)],
                OrderStatus::Delivered,
                date(2024, 1, 15),
            ),
            date(2024, 1, 17),
            Some("TRK123456789"),
            "123 Main St, Anytown, CA 12345",
        ),
        with_delivery(
            order(
                "ORD-002",
                vec![line("Organic Milk", 1, 4.99), line("Fresh Eggs", 1, 3.99)],
                OrderStatus::Shipped,
                date(2024, 1, 16),
            ),
            date(2024, 1, 18),
            Some("TRK987654321"),
            "456 Oak Ave, Somewhere, CA 54321",
        ),
        with_delivery(
            order(
                "ORD-003",
                vec![line("Chicken Breast", 1, 8.99), line("Organic Apples", 1, 4.49)],
                OrderStatus::Processing,
                date(2024, 1, 17),
            ),
            date(2024, 1, 19),
            None,
            "789 Pine St, Elsewhere, CA 98765",
        ),
    ]
}
