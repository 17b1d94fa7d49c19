use chrono::{DateTime, Utc};
use contracts::domain::a005_activity_log::aggregate::{
    ActivityAction, ActivityEntry, ActivityResource,
};
use contracts::enums::UserRole;

use crate::shared::seed::utc;

const UA_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const UA_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
const UA_IPHONE: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
const UA_ANDROID: &str = "Mozilla/5.0 (Linux; Android 10; SM-G975F) AppleWebKit/537.36";

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    (user_id, user_name, user_role): (&str, &str, UserRole),
    action: ActivityAction,
    resource: ActivityResource,
    resource_id: Option<&str>,
    description: &str,
    timestamp: DateTime<Utc>,
    (ip_address, user_agent): (&str, &str),
) -> ActivityEntry {
    ActivityEntry {
        id: id.into(),
        user_id: user_id.into(),
        user_name: user_name.into(),
        user_role,
        action,
        resource,
        resource_id: resource_id.map(str::to_string),
        description: description.into(),
        timestamp,
        ip_address: ip_address.into(),
        user_agent: user_agent.into(),
    }
}

pub fn seed() -> Vec<ActivityEntry> {
    let admin = ("admin-1", "Admin User", UserRole::Admin);
    vec![
        entry(
            "1",
            ("user-1", "John Doe", UserRole::BusinessOwner),
            ActivityAction::Create,
            ActivityResource::Product,
            Some("prod-123"),
            "Created new product: Organic Bananas",
            utc(2024, 1, 17, 10, 30),
            ("192.168.1.100", UA_WINDOWS),
        ),
        entry(
            "2",
            admin,
            ActivityAction::Update,
            ActivityResource::Inventory,
            Some("inv-456"),
            "Updated inventory levels for Whole Wheat Bread",
            utc(2024, 1, 17, 9, 15),
            ("192.168.1.101", UA_MAC),
        ),
        entry(
            "3",
            ("user-2", "Jane Smith", UserRole::BusinessOwner),
            ActivityAction::View,
            ActivityResource::Order,
            Some("ord-789"),
            "Viewed order details for ORD-789",
            utc(2024, 1, 17, 8, 45),
            ("192.168.1.102", UA_IPHONE),
        ),
        entry(
            "4",
            admin,
            ActivityAction::Delete,
            ActivityResource::Product,
            Some("prod-999"),
            "Deleted discontinued product: Old Brand Milk",
            utc(2024, 1, 16, 16, 20),
            ("192.168.1.101", UA_WINDOWS),
        ),
        entry(
            "5",
            ("user-3", "Bob Johnson", UserRole::BusinessOwner),
            ActivityAction::Login,
            ActivityResource::System,
            None,
            "User logged into the system",
            utc(2024, 1, 16, 14, 10),
            ("192.168.1.103", UA_ANDROID),
        ),
    ]
}
