use chrono::{DateTime, Utc};
use contracts::domain::a009_notification::aggregate::{
    Notification, NotificationPriority, NotificationType,
};

use crate::shared::seed::utc;

fn notification(
    id: &str,
    kind: NotificationType,
    (title, message): (&str, &str),
    timestamp: DateTime<Utc>,
    read: bool,
    priority: NotificationPriority,
    action_required: bool,
) -> Notification {
    Notification {
        id: id.into(),
        kind,
        title: title.into(),
        message: message.into(),
        timestamp,
        read,
        priority,
        action_required,
    }
}

pub fn seed() -> Vec<Notification> {
    vec![
        notification(
            "1",
            NotificationType::LowStock,
            ("Low Stock Alert", "Organic Bananas are running low (5 units remaining)"),
            utc(2024, 1, 17, 10, 30),
            false,
            NotificationPriority::High,
            true,
        ),
        notification(
            "2",
            NotificationType::NewOrder,
            ("New Order Received", "Order #ORD-1234 received from John Doe ($45.67)"),
            utc(2024, 1, 17, 9, 15),
            false,
            NotificationPriority::Medium,
            false,
        ),
        notification(
            "3",
            NotificationType::PendingShipment,
            ("Pending Shipment", "3 orders are pending shipment for over 24 hours"),
            utc(2024, 1, 17, 8, 45),
            true,
            NotificationPriority::High,
            true,
        ),
        notification(
            "4",
            NotificationType::System,
            ("System Update", "New features have been added to your dashboard"),
            utc(2024, 1, 16, 16, 20),
            true,
            NotificationPriority::Low,
            false,
        ),
        notification(
            "5",
            NotificationType::Revenue,
            ("Revenue Milestone", "Congratulations! You've reached $50,000 in monthly revenue"),
            utc(2024, 1, 16, 14, 10),
            false,
            NotificationPriority::Medium,
            false,
        ),
    ]
}
