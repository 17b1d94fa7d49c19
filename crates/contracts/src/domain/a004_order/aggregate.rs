use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Заказ еще в работе
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
        )
    }
}

impl Enumerated for OrderStatus {
    fn all() -> &'static [Self] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderLine {
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Заказ покупателя. Сумма считается по строкам.
///
/// Админский список видит покупателя, список владельца видит трек-номер и адрес.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    /// Фактическая или ожидаемая дата доставки
    pub delivery_date: Option<NaiveDate>,
    pub tracking_number: Option<String>,
    pub shipping_address: Option<String>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.lines.iter().map(OrderLine::amount).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

impl ListRecord for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str()];
        fields.extend(self.customer_name.as_deref());
        fields.extend(self.customer_email.as_deref());
        fields
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            _ => AttributeValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{filter_records, FilterState};

    fn order(id: &str, customer: Option<&str>, status: OrderStatus) -> Order {
        Order {
            id: id.into(),
            customer_name: customer.map(str::to_string),
            customer_email: customer.map(|c| format!("{}@example.com", c.to_lowercase())),
            lines: vec![
                OrderLine { name: "Organic Bananas".into(), quantity: 2, price: 2.99 },
                OrderLine { name: "Whole Wheat Bread".into(), quantity: 1, price: 3.49 },
            ],
            status,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            delivery_date: None,
            tracking_number: None,
            shipping_address: None,
        }
    }

    #[test]
    fn test_total_from_lines() {
        let o = order("ORD-001", Some("John"), OrderStatus::Delivered);
        assert!((o.total() - 9.47).abs() < 1e-9);
        assert_eq!(o.line_count(), 2);
        assert_eq!(o.item_count(), 3);
    }

    #[test]
    fn test_search_covers_id_and_customer() {
        let orders = vec![
            order("ORD-001", Some("John"), OrderStatus::Delivered),
            order("ORD-002", None, OrderStatus::Shipped),
        ];
        let by_email = filter_records(&orders, &FilterState::new().with_search("JOHN@"));
        assert_eq!(by_email.len(), 1);
        let by_id = filter_records(&orders, &FilterState::new().with_search("ord-002"));
        assert_eq!(by_id[0].id, "ORD-002");
        let by_status = filter_records(&orders, &FilterState::new().with_filter("status", "shipped"));
        assert_eq!(by_status.len(), 1);
    }
}
