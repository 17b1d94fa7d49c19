use contracts::domain::a006_pos_order::aggregate::PosSystem;
use contracts::domain::a014_pos_webhook::aggregate::{WebhookEvent, WebhookEventType, WebhookStatus};
use serde_json::json;

use crate::shared::seed::utc;

/// Последние события от касс
pub fn seed() -> Vec<WebhookEvent> {
    vec![
        WebhookEvent {
            id: "wh-001".into(),
            pos_system: PosSystem::Square,
            event_type: WebhookEventType::TransactionCreated,
            payload: json!({
                "transactionId": "SQ-TXN-12345",
                "amount": 45.67,
                "items": [
                    { "name": "Organic Bananas", "quantity": 2, "price": 2.99 },
                    { "name": "Whole Wheat Bread", "quantity": 1, "price": 3.49 },
                ],
            }),
            timestamp: utc(2024, 1, 17, 10, 15),
            status: WebhookStatus::Processed,
            retry_count: 0,
            processing_time: 120,
        },
        WebhookEvent {
            id: "wh-002".into(),
            pos_system: PosSystem::Shopify,
            event_type: WebhookEventType::InventoryUpdated,
            payload: json!({
                "productId": "PROD-123",
                "sku": "ORG-BAN-001",
                "quantityChange": -5,
                "newQuantity": 145,
            }),
            timestamp: utc(2024, 1, 17, 10, 10),
            status: WebhookStatus::Processed,
            retry_count: 0,
            processing_time: 85,
        },
        WebhookEvent {
            id: "wh-003".into(),
            pos_system: PosSystem::Clover,
            event_type: WebhookEventType::TransactionCreated,
            payload: json!({ "transactionId": "CLV-TXN-67890", "amount": 28.45 }),
            timestamp: utc(2024, 1, 17, 10, 5),
            status: WebhookStatus::Failed,
            retry_count: 3,
            processing_time: 0,
        },
    ]
}
