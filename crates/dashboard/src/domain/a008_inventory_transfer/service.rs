use chrono::{DateTime, Utc};
use contracts::domain::a008_inventory_transfer::aggregate::{
    InventoryTransfer, TransferForm, TransferStatus,
};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;

pub const REQUESTED_BY: &str = "Current User";

/// Заявки на перемещение товара между магазинами
pub struct TransferService {
    screen: ListScreen<InventoryTransfer>,
}

impl TransferService {
    pub fn new(transfers: Vec<InventoryTransfer>) -> Self {
        Self {
            screen: ListScreen::new("transfer", transfers),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<InventoryTransfer> {
        &self.screen
    }

    /// Новая заявка встает в начало списка со статусом pending.
    /// Товар передается уже найденным: `(name, sku)`.
    pub fn create(
        &mut self,
        form: TransferForm,
        product: (&str, &str),
        now: DateTime<Utc>,
    ) -> ServiceResult<String> {
        form.validate().map_err(ServiceError::Validation)?;
        let id = self
            .screen
            .unique_id(&format!("transfer-{}", now.timestamp_millis()));
        let transfer = form.into_transfer(
            id.clone(),
            product.0.to_string(),
            product.1.to_string(),
            REQUESTED_BY.to_string(),
            now,
        );
        let (from, to, quantity) = (
            transfer.from_location.clone(),
            transfer.to_location.clone(),
            transfer.quantity,
        );
        self.screen.prepend(transfer)?;
        tracing::info!(transfer_id = %id, %from, %to, quantity, "Transfer requested");
        Ok(id)
    }

    /// Одобрение: pending → in_transit
    pub fn approve(&mut self, id: &str) -> ServiceResult<()> {
        let status = self
            .screen
            .apply_update(id, |t| -> Result<TransferStatus, String> {
                t.approve()?;
                Ok(t.status)
            })?
            .map_err(ServiceError::InvalidTransition)?;
        tracing::info!(transfer_id = %id, status = ?status, "Transfer status changed");
        Ok(())
    }

    pub fn pending_count(&self) -> usize {
        self.screen
            .count_where(|t| t.status == TransferStatus::Pending)
    }
}
