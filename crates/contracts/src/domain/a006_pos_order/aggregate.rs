use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

// ============================================================================
// Enums
// ============================================================================

/// Подключаемые кассовые системы
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosSystem {
    Square,
    Shopify,
    Toast,
    Clover,
}

impl PosSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            PosSystem::Square => "Square POS",
            PosSystem::Shopify => "Shopify POS",
            PosSystem::Toast => "Toast POS",
            PosSystem::Clover => "Clover POS",
        }
    }
}

impl Enumerated for PosSystem {
    fn all() -> &'static [Self] {
        &[
            PosSystem::Square,
            PosSystem::Shopify,
            PosSystem::Toast,
            PosSystem::Clover,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            PosSystem::Square => "square",
            PosSystem::Shopify => "shopify",
            PosSystem::Toast => "toast",
            PosSystem::Clover => "clover",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosOrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Refunded,
}

impl Enumerated for PosOrderStatus {
    fn all() -> &'static [Self] {
        &[
            PosOrderStatus::Pending,
            PosOrderStatus::Processing,
            PosOrderStatus::Completed,
            PosOrderStatus::Cancelled,
            PosOrderStatus::Refunded,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            PosOrderStatus::Pending => "pending",
            PosOrderStatus::Processing => "processing",
            PosOrderStatus::Completed => "completed",
            PosOrderStatus::Cancelled => "cancelled",
            PosOrderStatus::Refunded => "refunded",
        }
    }
}

/// Состояние синхронизации заказа с кассой
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Synced,
    Pending,
    Failed,
    Conflict,
}

impl SyncStatus {
    /// Попадает в массовую синхронизацию
    pub fn needs_sync(&self) -> bool {
        matches!(self, SyncStatus::Pending | SyncStatus::Failed)
    }

    /// Для сводки: ошибка и конфликт считаются вместе
    pub fn is_problem(&self) -> bool {
        matches!(self, SyncStatus::Failed | SyncStatus::Conflict)
    }
}

impl Enumerated for SyncStatus {
    fn all() -> &'static [Self] {
        &[
            SyncStatus::Synced,
            SyncStatus::Pending,
            SyncStatus::Failed,
            SyncStatus::Conflict,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "synced",
            SyncStatus::Pending => "pending",
            SyncStatus::Failed => "failed",
            SyncStatus::Conflict => "conflict",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosOrderLine {
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
}

impl PosOrderLine {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Заказ, пришедший из кассовой системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrder {
    pub id: String,
    pub pos_system: PosSystem,
    pub pos_order_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub items: Vec<PosOrderLine>,
    pub tax: f64,
    pub payment_method: String,
    pub status: PosOrderStatus,
    pub sync_status: SyncStatus,
    pub pos_timestamp: DateTime<Utc>,
    pub sync_timestamp: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub conflict_reason: Option<String>,
}

impl PosOrder {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(PosOrderLine::total).sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax
    }

    pub fn needs_sync(&self) -> bool {
        self.sync_status.needs_sync()
    }

    /// Успешная синхронизация снимает причину конфликта
    pub fn mark_synced(&mut self, at: DateTime<Utc>) {
        self.sync_status = SyncStatus::Synced;
        self.sync_timestamp = Some(at);
        self.conflict_reason = None;
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.sync_status = SyncStatus::Failed;
        self.conflict_reason = Some(reason.into());
    }
}

impl ListRecord for PosOrder {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.pos_order_id.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "pos_system" => AttributeValue::Single(self.pos_system.code()),
            "status" => AttributeValue::Single(self.status.code()),
            "sync_status" => AttributeValue::Single(self.sync_status.code()),
            _ => AttributeValue::Missing,
        }
    }
}
