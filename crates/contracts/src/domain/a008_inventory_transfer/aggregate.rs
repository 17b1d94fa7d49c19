use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::coerce::parse_int_or_zero;
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl Enumerated for TransferStatus {
    fn all() -> &'static [Self] {
        &[
            TransferStatus::Pending,
            TransferStatus::InTransit,
            TransferStatus::Completed,
            TransferStatus::Cancelled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::InTransit => "in_transit",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }
}

/// Перемещение товара между магазинами
///
/// Из панели одобряется только `pending → in_transit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransfer {
    pub id: String,
    pub from_location: String,
    pub to_location: String,
    pub product_name: String,
    pub sku: String,
    pub quantity: u32,
    pub status: TransferStatus,
    pub requested_by: String,
    pub request_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl InventoryTransfer {
    /// Одобрение: только из `pending`
    pub fn approve(&mut self) -> Result<(), String> {
        match self.status {
            TransferStatus::Pending => {
                self.status = TransferStatus::InTransit;
                Ok(())
            }
            other => Err(format!(
                "Transfer {} cannot be approved from status {}",
                self.id,
                other.code()
            )),
        }
    }
}

impl ListRecord for InventoryTransfer {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.sku.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            "from" => AttributeValue::Single(&self.from_location),
            "to" => AttributeValue::Single(&self.to_location),
            _ => AttributeValue::Missing,
        }
    }
}

/// Поля диалога "Create Transfer"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferForm {
    pub from_location: String,
    pub to_location: String,
    pub product_id: String,
    pub quantity: String,
    pub notes: String,
}

impl TransferForm {
    pub fn quantity(&self) -> i64 {
        parse_int_or_zero(&self.quantity)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.from_location.trim().is_empty() || self.to_location.trim().is_empty() {
            return Err("Both locations are required".into());
        }
        if self.from_location == self.to_location {
            return Err("Source and destination locations must differ".into());
        }
        if self.product_id.trim().is_empty() {
            return Err("Product is required".into());
        }
        let quantity = self.quantity();
        if quantity <= 0 || quantity > i64::from(u32::MAX) {
            return Err("Quantity must be a positive number".into());
        }
        Ok(())
    }

    /// Новая заявка. Форма должна быть проверена заранее.
    pub fn into_transfer(
        self,
        id: String,
        product_name: String,
        sku: String,
        requested_by: String,
        now: DateTime<Utc>,
    ) -> InventoryTransfer {
        let quantity = self.quantity().clamp(0, i64::from(u32::MAX)) as u32;
        let notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes)
        };
        InventoryTransfer {
            id,
            from_location: self.from_location,
            to_location: self.to_location,
            product_name,
            sku,
            quantity,
            status: TransferStatus::Pending,
            requested_by,
            request_date: now,
            completed_date: None,
            notes,
        }
    }
}
