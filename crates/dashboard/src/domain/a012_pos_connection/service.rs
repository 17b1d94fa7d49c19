use contracts::domain::a012_pos_connection::aggregate::{ConnectionStatus, PosConnection};
use std::sync::Arc;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;
use crate::shared::sync::{PosSyncReport, SyncPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosIntegrationSummary {
    pub total: usize,
    pub connected: usize,
    pub with_errors: usize,
    pub records_synced: u32,
}

/// Подключение кассовых систем и загрузка данных из них
pub struct PosIntegrationService {
    screen: ListScreen<PosConnection>,
    port: Arc<dyn SyncPort>,
}

impl PosIntegrationService {
    pub fn new(connections: Vec<PosConnection>, port: Arc<dyn SyncPort>) -> Self {
        Self {
            screen: ListScreen::new("POS system", connections),
            port,
        }
    }

    pub fn seeded(port: Arc<dyn SyncPort>) -> Self {
        Self::new(repository::seed(), port)
    }

    pub fn screen(&self) -> &ListScreen<PosConnection> {
        &self.screen
    }

    pub async fn connect(&mut self, id: &str) -> ServiceResult<()> {
        let system = self.screen.get(id)?.system;
        match self.port.connect_pos_system(system).await {
            Ok(at) => {
                self.screen.apply_update(id, |c| c.mark_connected(at))?;
                tracing::info!(pos = %id, "POS system connected");
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                self.screen.apply_update(id, |c| c.mark_error(reason))?;
                tracing::warn!(pos = %id, error = %e, "POS connection failed");
                Err(e.into())
            }
        }
    }

    /// Отключение сбрасывает ключ API
    pub fn disconnect(&mut self, id: &str) -> ServiceResult<()> {
        self.screen.apply_update(id, PosConnection::disconnect)?;
        tracing::info!(pos = %id, "POS system disconnected");
        Ok(())
    }

    /// Загрузка данных: только для подключенной системы
    pub async fn sync(&mut self, id: &str) -> ServiceResult<PosSyncReport> {
        let connection = self.screen.get(id)?;
        if !connection.is_connected() {
            return Err(ServiceError::InvalidTransition(format!(
                "POS system {} is not connected",
                id
            )));
        }
        let system = connection.system;
        match self.port.sync_pos_system(system).await {
            Ok(report) => {
                self.screen
                    .apply_update(id, |c| c.mark_synced(report.synced_at, report.records_synced))?;
                tracing::info!(pos = %id, records = report.records_synced, "POS data synced");
                Ok(report)
            }
            Err(e) => {
                let reason = e.to_string();
                self.screen.apply_update(id, |c| c.mark_error(reason))?;
                tracing::warn!(pos = %id, error = %e, "POS data sync failed");
                Err(e.into())
            }
        }
    }

    /// Последовательная синхронизация всех подключенных систем; возвращает число успешных
    pub async fn bulk_sync(&mut self) -> usize {
        let ids: Vec<String> = self
            .screen
            .records()
            .iter()
            .filter(|c| c.is_connected())
            .map(|c| c.id.clone())
            .collect();
        let mut synced = 0;
        for id in &ids {
            if self.sync(id).await.is_ok() {
                synced += 1;
            }
        }
        tracing::info!(synced, total = ids.len(), "Bulk POS data sync finished");
        synced
    }

    pub fn summary(&self) -> PosIntegrationSummary {
        let connections = self.screen.records();
        PosIntegrationSummary {
            total: connections.len(),
            connected: self.screen.count_where(PosConnection::is_connected),
            with_errors: self
                .screen
                .count_where(|c| c.status == ConnectionStatus::Error),
            records_synced: connections.iter().map(|c| c.records_synced).sum(),
        }
    }
}
