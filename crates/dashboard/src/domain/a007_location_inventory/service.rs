use chrono::Utc;
use contracts::domain::a007_location_inventory::aggregate::LocationInventory;
use contracts::domain::a008_inventory_transfer::aggregate::TransferForm;
use contracts::shared::coerce::parse_stock_input;
use contracts::shared::stock::StockStatus;
use std::sync::Arc;

use super::repository;
use crate::domain::a008_inventory_transfer::service::TransferService;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;
use crate::shared::sync::SyncPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationInventorySummary {
    pub locations: usize,
    /// Низкий остаток и нет в наличии
    pub low_stock: usize,
    pub overstocked: usize,
    pub pending_transfers: usize,
}

/// Остатки по магазинам и перемещения между ними
pub struct LocationInventoryService {
    screen: ListScreen<LocationInventory>,
    transfers: TransferService,
    port: Arc<dyn SyncPort>,
}

impl LocationInventoryService {
    pub fn new(
        rows: Vec<LocationInventory>,
        transfers: TransferService,
        port: Arc<dyn SyncPort>,
    ) -> Self {
        Self {
            screen: ListScreen::new("location inventory", rows),
            transfers,
            port,
        }
    }

    pub fn seeded(port: Arc<dyn SyncPort>) -> Self {
        Self::new(repository::seed(), TransferService::seeded(), port)
    }

    pub fn screen(&self) -> &ListScreen<LocationInventory> {
        &self.screen
    }

    pub fn transfers(&self) -> &TransferService {
        &self.transfers
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    /// Фильтр по id магазина
    pub fn set_location_filter(&mut self, raw: &str) {
        self.screen.set_filter("location", raw);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    /// Магазины: `(id, name)` в порядке первого появления
    pub fn locations(&self) -> Vec<(&str, &str)> {
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for row in self.screen.records() {
            if !seen.iter().any(|(id, _)| *id == row.location_id) {
                seen.push((row.location_id.as_str(), row.location_name.as_str()));
            }
        }
        seen
    }

    /// Товары для диалога перемещения: `(id, name)`
    pub fn products(&self) -> Vec<(&str, &str)> {
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for row in self.screen.records() {
            if !seen.iter().any(|(id, _)| *id == row.product_id) {
                seen.push((row.product_id.as_str(), row.product_name.as_str()));
            }
        }
        seen
    }

    /// Синхронизация всех магазинов: при успехе у всех строк обновляется время
    pub async fn sync_all(&mut self) -> ServiceResult<()> {
        let rows = self.screen.records().to_vec();
        let at = self.port.sync_location_inventory(&rows).await.map_err(|e| {
            tracing::warn!(error = %e, "Location inventory sync failed");
            e
        })?;
        self.screen.update_all(|row| row.last_updated = at);
        tracing::info!(rows = rows.len(), "Location inventories synchronized");
        Ok(())
    }

    pub fn update_stock(&mut self, id: &str, raw: &str) -> ServiceResult<StockStatus> {
        let stock = parse_stock_input(raw);
        let now = Utc::now();
        let status = self.screen.apply_update(id, |row| {
            row.set_stock(stock, now);
            row.status()
        })?;
        tracing::info!(row_id = %id, stock, status = %status, "Location stock updated");
        Ok(status)
    }

    /// Строки, дошедшие до точки перезаказа
    pub fn reorder_suggestions(&self) -> Vec<&LocationInventory> {
        self.screen
            .records()
            .iter()
            .filter(|row| row.needs_reorder())
            .collect()
    }

    /// Заявка на перемещение: магазины и товар должны быть известны
    pub fn create_transfer(&mut self, form: TransferForm) -> ServiceResult<String> {
        form.validate().map_err(ServiceError::Validation)?;
        let names: Vec<&str> = self.locations().into_iter().map(|(_, name)| name).collect();
        for location in [&form.from_location, &form.to_location] {
            if !names.contains(&location.as_str()) {
                return Err(ServiceError::Validation(format!(
                    "Unknown location: {}",
                    location
                )));
            }
        }
        let row = self
            .screen
            .records()
            .iter()
            .find(|row| row.product_id == form.product_id)
            .ok_or_else(|| ServiceError::Validation(format!("Unknown product: {}", form.product_id)))?;
        let product = (row.product_name.clone(), row.sku.clone());
        self.transfers
            .create(form, (&product.0, &product.1), Utc::now())
    }

    pub fn approve_transfer(&mut self, id: &str) -> ServiceResult<()> {
        self.transfers.approve(id)
    }

    pub fn summary(&self) -> LocationInventorySummary {
        LocationInventorySummary {
            locations: self.locations().len(),
            low_stock: self.screen.count_where(|row| row.status().needs_restock()),
            overstocked: self
                .screen
                .count_where(|row| row.status() == StockStatus::Overstocked),
            pending_transfers: self.transfers.pending_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sync::testing::RecordingSyncPort;
    use contracts::domain::a008_inventory_transfer::aggregate::TransferStatus;

    fn service(port: &Arc<RecordingSyncPort>) -> LocationInventoryService {
        LocationInventoryService::seeded(port.clone())
    }

    fn form(from: &str, to: &str, product: &str, quantity: &str) -> TransferForm {
        TransferForm {
            from_location: from.into(),
            to_location: to.into(),
            product_id: product.into(),
            quantity: quantity.into(),
            notes: "Weekend".into(),
        }
    }

    #[test]
    fn test_seed_summary() {
        let port = Arc::new(RecordingSyncPort::default());
        assert_eq!(
            service(&port).summary(),
            LocationInventorySummary {
                locations: 3,
                low_stock: 2,
                overstocked: 1,
                pending_transfers: 1,
            }
        );
    }

    #[test]
    fn test_location_and_status_filters() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        service.set_location_filter("loc-002");
        assert_eq!(service.screen().visible_count(), 2);
        service.set_status_filter("overstocked");
        assert_eq!(service.screen().visible()[0].product_name, "Whole Wheat Bread");
        service.set_location_filter("all");
        service.set_status_filter("all");
        service.set_search("org-ban");
        assert_eq!(service.screen().visible_count(), 3);
    }

    #[test]
    fn test_options_lists() {
        let port = Arc::new(RecordingSyncPort::default());
        let service = service(&port);
        assert_eq!(
            service.locations(),
            vec![("loc-001", "Downtown"), ("loc-002", "Westside"), ("loc-003", "Express")]
        );
        assert_eq!(
            service.products(),
            vec![("prod-001", "Organic Bananas"), ("prod-002", "Whole Wheat Bread")]
        );
        let reorder: Vec<&str> = service.reorder_suggestions().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(reorder, vec!["loc-002/prod-001", "loc-003/prod-001"]);
    }

    #[tokio::test]
    async fn test_sync_all_stamps_rows() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        service.sync_all().await.unwrap();
        assert!(service
            .screen()
            .records()
            .iter()
            .all(|row| row.last_updated == RecordingSyncPort::fixed_time()));
        assert_eq!(port.calls(), vec!["inventory"]);
    }

    #[tokio::test]
    async fn test_failed_sync_keeps_timestamps() {
        let port = Arc::new(RecordingSyncPort::failing_for(&["inventory"]));
        let mut service = service(&port);
        let before: Vec<_> = service.screen().records().iter().map(|r| r.last_updated).collect();
        assert!(service.sync_all().await.is_err());
        let after: Vec<_> = service.screen().records().iter().map(|r| r.last_updated).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_stock() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        assert_eq!(service.update_stock("loc-003/prod-001", "40").unwrap(), StockStatus::InStock);
        assert_eq!(service.update_stock("loc-001/prod-002", "-7").unwrap(), StockStatus::OutOfStock);
        assert_eq!(service.summary().low_stock, 2);
    }

    #[test]
    fn test_create_transfer_uses_known_product() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        let id = service
            .create_transfer(form("Westside", "Express", "prod-002", "20"))
            .unwrap();
        let transfer = &service.transfers().screen().records()[0];
        assert_eq!(transfer.id, id);
        assert_eq!(transfer.product_name, "Whole Wheat Bread");
        assert_eq!(transfer.sku, "WWB-001");
        assert_eq!(transfer.notes.as_deref(), Some("Weekend"));
        assert_eq!(service.summary().pending_transfers, 2);
    }

    #[test]
    fn test_create_transfer_rejects_unknown_references() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        assert!(service
            .create_transfer(form("Westside", "Express", "prod-404", "20"))
            .is_err());
        assert!(service
            .create_transfer(form("Uptown", "Express", "prod-001", "20"))
            .is_err());
        assert_eq!(service.transfers().screen().total_count(), 3);
    }

    #[test]
    fn test_transfer_transitions() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        service.approve_transfer("transfer-001").unwrap();
        assert!(matches!(
            service.approve_transfer("transfer-003"),
            Err(ServiceError::InvalidTransition(_))
        ));
        let statuses: Vec<TransferStatus> = service
            .transfers()
            .screen()
            .records()
            .iter()
            .map(|t| t.status)
            .collect();
        assert_eq!(
            statuses,
            vec![TransferStatus::InTransit, TransferStatus::InTransit, TransferStatus::Completed]
        );
        assert_eq!(service.summary().pending_transfers, 0);
    }
}
