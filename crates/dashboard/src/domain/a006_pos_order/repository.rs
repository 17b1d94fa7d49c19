use contracts::domain::a006_pos_order::aggregate::{
    PosOrder, PosOrderLine, PosOrderStatus, PosSystem, SyncStatus,
};

use crate::shared::seed::utc;

fn line(name: &str, sku: &str, quantity: u32, price: f64) -> PosOrderLine {
    PosOrderLine {
        name: name.into(),
        sku: sku.into(),
        quantity,
        price,
    }
}

/// Заказы, пришедшие из кассовых систем
pub fn seed() -> Vec<PosOrder> {
    vec![
        PosOrder {
            id: "order-001".into(),
            pos_system: PosSystem::Square,
            pos_order_id: "SQ-ORD-12345".into(),
            customer_name: "John Doe".into(),
            customer_email: Some("john@example.com".into()),
            items: vec![
                line("Organic Bananas", "ORG-BAN-001", 2, 2.99),
                line("Whole Wheat Bread", "WWB-001", 1, 3.49),
                line("Fresh Milk", "MILK-001", 1, 4.99),
            ],
            tax: 1.16,
            payment_method: "Credit Card".into(),
            status: PosOrderStatus::Completed,
            sync_status: SyncStatus::Synced,
            pos_timestamp: utc(2024, 1, 17, 10, 15),
            sync_timestamp: Some(utc(2024, 1, 17, 10, 16)),
            notes: None,
            conflict_reason: None,
        },
        PosOrder {
            id: "order-002".into(),
            pos_system: PosSystem::Shopify,
            pos_order_id: "SHOP-ORD-67890".into(),
            customer_name: "Jane Smith".into(),
            customer_email: Some("jane@example.com".into()),
            items: vec![
                line("Organic Apples", "ORG-APP-001", 3, 4.49),
                line("Greek Yogurt", "YOGURT-001", 2, 5.99),
            ],
            tax: 2.04,
            payment_method: "Debit Card".into(),
            status: PosOrderStatus::Completed,
            sync_status: SyncStatus::Pending,
            pos_timestamp: utc(2024, 1, 17, 9, 30),
            sync_timestamp: None,
            notes: None,
            conflict_reason: None,
        },
        PosOrder {
            id: "order-003".into(),
            pos_system: PosSystem::Clover,
            pos_order_id: "CLV-ORD-11111".into(),
            customer_name: "Bob Johnson".into(),
            customer_email: None,
            items: vec![
                line("Chicken Breast", "CHICKEN-001", 1, 8.99),
                line("Brown Rice", "RICE-001", 2, 3.49),
            ],
            tax: 1.28,
            payment_method: "Cash".into(),
            status: PosOrderStatus::Completed,
            sync_status: SyncStatus::Conflict,
            pos_timestamp: utc(2024, 1, 17, 8, 45),
            sync_timestamp: None,
            notes: None,
            conflict_reason: Some("SKU CHICKEN-001 not found in inventory".into()),
        },
        PosOrder {
            id: "order-004".into(),
            pos_system: PosSystem::Square,
            pos_order_id: "SQ-ORD-22222".into(),
            customer_name: "Alice Wilson".into(),
            customer_email: Some("alice@example.com".into()),
            items: vec![
                line("Organic Spinach", "ORG-SPN-001", 1, 2.99),
                line("Tomatoes", "TOM-001", 2, 1.99),
            ],
            tax: 0.56,
            payment_method: "Credit Card".into(),
            status: PosOrderStatus::Processing,
            sync_status: SyncStatus::Failed,
            pos_timestamp: utc(2024, 1, 17, 11, 20),
            sync_timestamp: None,
            notes: None,
            conflict_reason: Some("Network timeout during sync".into()),
        },
    ]
}
