use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    LowStock,
    NewOrder,
    PendingShipment,
    System,
    Revenue,
}

impl Enumerated for NotificationType {
    fn all() -> &'static [Self] {
        &[
            NotificationType::LowStock,
            NotificationType::NewOrder,
            NotificationType::PendingShipment,
            NotificationType::System,
            NotificationType::Revenue,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            NotificationType::LowStock => "low_stock",
            NotificationType::NewOrder => "new_order",
            NotificationType::PendingShipment => "pending_shipment",
            NotificationType::System => "system",
            NotificationType::Revenue => "revenue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

impl Enumerated for NotificationPriority {
    fn all() -> &'static [Self] {
        &[
            NotificationPriority::High,
            NotificationPriority::Medium,
            NotificationPriority::Low,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            NotificationPriority::High => "high",
            NotificationPriority::Medium => "medium",
            NotificationPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub priority: NotificationPriority,
    #[serde(default)]
    pub action_required: bool,
}

impl Notification {
    /// Уведомление о новом заказе, приходящее в реальном времени
    pub fn new_order(id: String, order_number: u32, at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: NotificationType::NewOrder,
            title: "New Order Received".into(),
            message: format!("Order #ORD-{} received", order_number),
            timestamp: at,
            read: false,
            priority: NotificationPriority::Medium,
            action_required: false,
        }
    }
}

impl ListRecord for Notification {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "type" => AttributeValue::Single(self.kind.code()),
            "priority" => AttributeValue::Single(self.priority.code()),
            "read" => AttributeValue::Single(if self.read { "read" } else { "unread" }),
            _ => AttributeValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_order_notification() {
        let at = Utc.with_ymd_and_hms(2024, 1, 17, 12, 0, 0).unwrap();
        let n = Notification::new_order("n-1".into(), 4321, at);
        assert_eq!(n.message, "Order #ORD-4321 received");
        assert!(!n.read);
        assert_eq!(n.attribute("read"), AttributeValue::Single("unread"));
        assert_eq!(n.attribute("type"), AttributeValue::Single("new_order"));
    }

    #[test]
    fn test_serde_uses_type_key() {
        let at = Utc.with_ymd_and_hms(2024, 1, 17, 12, 0, 0).unwrap();
        let json = serde_json::to_value(Notification::new_order("n-1".into(), 1, at)).unwrap();
        assert_eq!(json["type"], "new_order");
        assert_eq!(json["actionRequired"], false);
    }
}
