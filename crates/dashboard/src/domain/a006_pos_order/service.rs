use contracts::domain::a006_pos_order::aggregate::{PosOrder, SyncStatus};
use contracts::shared::list_query::Enumerated;
use std::sync::Arc;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;
use crate::shared::sync::SyncPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosOrderSummary {
    pub total: usize,
    pub synced: usize,
    pub pending: usize,
    /// Ошибки и конфликты вместе
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSyncReport {
    pub synced: usize,
    pub failed: usize,
}

/// Синхронизация заказов кассовых систем
pub struct PosOrderSyncService {
    screen: ListScreen<PosOrder>,
    port: Arc<dyn SyncPort>,
}

impl PosOrderSyncService {
    pub fn new(orders: Vec<PosOrder>, port: Arc<dyn SyncPort>) -> Self {
        Self {
            screen: ListScreen::new("POS order", orders),
            port,
        }
    }

    pub fn seeded(port: Arc<dyn SyncPort>) -> Self {
        Self::new(repository::seed(), port)
    }

    pub fn screen(&self) -> &ListScreen<PosOrder> {
        &self.screen
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_pos_filter(&mut self, raw: &str) {
        self.screen.set_filter("pos_system", raw);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    pub fn set_sync_filter(&mut self, raw: &str) {
        self.screen.set_filter("sync_status", raw);
    }

    /// Синхронизация одного заказа (в том числе конфликтного)
    pub async fn sync_order(&mut self, id: &str) -> ServiceResult<()> {
        let order = self.screen.get(id)?.clone();
        match self.port.sync_pos_order(&order).await {
            Ok(at) => {
                self.screen.apply_update(id, |o| o.mark_synced(at))?;
                tracing::info!(order_id = %id, pos = order.pos_system.code(), "POS order synced");
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                self.screen.apply_update(id, |o| o.mark_failed(reason))?;
                tracing::warn!(order_id = %id, error = %e, "POS order sync failed");
                Err(e.into())
            }
        }
    }

    /// Последовательно синхронизирует pending и failed. Конфликты не трогает.
    pub async fn bulk_sync(&mut self) -> BulkSyncReport {
        let ids: Vec<String> = self
            .screen
            .records()
            .iter()
            .filter(|o| o.needs_sync())
            .map(|o| o.id.clone())
            .collect();

        let mut report = BulkSyncReport::default();
        for id in &ids {
            match self.sync_order(id).await {
                Ok(()) => report.synced += 1,
                Err(_) => report.failed += 1,
            }
        }
        tracing::info!(synced = report.synced, failed = report.failed, "Bulk POS sync finished");
        report
    }

    pub fn summary(&self) -> PosOrderSummary {
        let counts = self.screen.counts_by(|o| o.sync_status);
        PosOrderSummary {
            total: self.screen.total_count(),
            synced: counts[&SyncStatus::Synced],
            pending: counts[&SyncStatus::Pending],
            failed: self.screen.count_where(|o| o.sync_status.is_problem()),
        }
    }

    /// Заказы, ожидающие синхронизации (для сводки дашборда)
    pub fn pending_count(&self) -> usize {
        self.screen.count_where(PosOrder::needs_sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ServiceError;
    use crate::shared::sync::testing::RecordingSyncPort;

    fn service(port: &Arc<RecordingSyncPort>) -> PosOrderSyncService {
        PosOrderSyncService::seeded(port.clone())
    }

    #[test]
    fn test_summary_groups_conflicts_with_failures() {
        let port = Arc::new(RecordingSyncPort::default());
        assert_eq!(
            service(&port).summary(),
            PosOrderSummary { total: 4, synced: 1, pending: 1, failed: 2 }
        );
    }

    #[test]
    fn test_filters() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        service.set_pos_filter("square");
        assert_eq!(service.screen().visible_count(), 2);
        service.set_sync_filter("failed");
        assert_eq!(service.screen().visible()[0].id, "order-004");
        service.set_pos_filter("all");
        service.set_sync_filter("all");
        service.set_status_filter("processing");
        service.set_search("sq-ord");
        assert_eq!(service.screen().visible_count(), 1);
    }

    #[tokio::test]
    async fn test_sync_conflict_order_clears_reason() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        service.sync_order("order-003").await.unwrap();
        let order = service.screen().get("order-003").unwrap();
        assert_eq!(order.sync_status, SyncStatus::Synced);
        assert_eq!(order.sync_timestamp, Some(RecordingSyncPort::fixed_time()));
        assert!(order.conflict_reason.is_none());
    }

    #[tokio::test]
    async fn test_sync_failure_marks_order() {
        let port = Arc::new(RecordingSyncPort::failing_for(&["order-002"]));
        let mut service = service(&port);
        let err = service.sync_order("order-002").await.unwrap_err();
        assert!(matches!(err, ServiceError::Sync(_)));
        let order = service.screen().get("order-002").unwrap();
        assert_eq!(order.sync_status, SyncStatus::Failed);
        assert!(order.conflict_reason.is_some());
    }

    #[tokio::test]
    async fn test_sync_unknown_order_skips_port() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        assert!(service.sync_order("order-999").await.is_err());
        assert!(port.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_sync_pending_and_failed_in_order() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        let report = service.bulk_sync().await;
        assert_eq!(report, BulkSyncReport { synced: 2, failed: 0 });
        assert_eq!(port.calls(), vec!["order-002", "order-004"]);
        assert_eq!(
            service.summary(),
            PosOrderSummary { total: 4, synced: 3, pending: 0, failed: 1 }
        );
        assert_eq!(service.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_bulk_sync_continues_after_failure() {
        let port = Arc::new(RecordingSyncPort::failing_for(&["order-002"]));
        let mut service = service(&port);
        let report = service.bulk_sync().await;
        assert_eq!(report, BulkSyncReport { synced: 1, failed: 1 });
        assert_eq!(service.pending_count(), 1);
    }
}
