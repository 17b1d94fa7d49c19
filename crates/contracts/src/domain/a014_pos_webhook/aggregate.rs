use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a006_pos_order::aggregate::PosSystem;
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "transaction.created")]
    TransactionCreated,
    #[serde(rename = "transaction.updated")]
    TransactionUpdated,
    #[serde(rename = "inventory.updated")]
    InventoryUpdated,
    #[serde(rename = "customer.created")]
    CustomerCreated,
}

impl Enumerated for WebhookEventType {
    fn all() -> &'static [Self] {
        &[
            WebhookEventType::TransactionCreated,
            WebhookEventType::TransactionUpdated,
            WebhookEventType::InventoryUpdated,
            WebhookEventType::CustomerCreated,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            WebhookEventType::TransactionCreated => "transaction.created",
            WebhookEventType::TransactionUpdated => "transaction.updated",
            WebhookEventType::InventoryUpdated => "inventory.updated",
            WebhookEventType::CustomerCreated => "customer.created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    Processed,
    Failed,
    Pending,
}

impl Enumerated for WebhookStatus {
    fn all() -> &'static [Self] {
        &[WebhookStatus::Processed, WebhookStatus::Failed, WebhookStatus::Pending]
    }

    fn code(&self) -> &'static str {
        match self {
            WebhookStatus::Processed => "processed",
            WebhookStatus::Failed => "failed",
            WebhookStatus::Pending => "pending",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Входящее событие от кассовой системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    pub id: String,
    pub pos_system: PosSystem,
    pub event_type: WebhookEventType,
    /// Тело события как пришло от кассы
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    pub status: WebhookStatus,
    pub retry_count: u32,
    /// Миллисекунды; 0 для необработанных
    pub processing_time: u32,
}

impl WebhookEvent {
    /// Успешная повторная обработка
    pub fn mark_retried(&mut self, processing_time: u32) {
        self.status = WebhookStatus::Processed;
        self.retry_count += 1;
        self.processing_time = processing_time;
    }
}

impl ListRecord for WebhookEvent {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.event_type.code()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            "pos_system" => AttributeValue::Single(self.pos_system.code()),
            "event_type" => AttributeValue::Single(self.event_type.code()),
            _ => AttributeValue::Missing,
        }
    }
}
