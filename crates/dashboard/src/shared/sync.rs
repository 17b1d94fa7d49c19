//! Граница с внешними кассовыми системами.
//!
//! Экраны не ждут таймеров сами: вся задержка и результат приходят из порта.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::domain::a006_pos_order::aggregate::{PosOrder, PosSystem};
use contracts::domain::a007_location_inventory::aggregate::LocationInventory;
use contracts::domain::a014_pos_webhook::aggregate::WebhookEvent;
use contracts::shared::list_query::Enumerated;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

use super::config::SyncConfig;

/// Ошибки синхронизации
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyncError {
    #[error("POS system unreachable: {0}")]
    Unreachable(String),

    #[error("Sync rejected: {0}")]
    Rejected(String),
}

/// Итог синхронизации кассовой системы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosSyncReport {
    pub synced_at: DateTime<Utc>,
    pub records_synced: u32,
}

/// Порт синхронизации
#[async_trait]
pub trait SyncPort: Send + Sync {
    /// Отправить заказ кассы в систему; возвращает время синхронизации
    async fn sync_pos_order(&self, order: &PosOrder) -> Result<DateTime<Utc>, SyncError>;

    /// Синхронизировать остатки всех магазинов
    async fn sync_location_inventory(
        &self,
        rows: &[LocationInventory],
    ) -> Result<DateTime<Utc>, SyncError>;

    /// Подключить кассовую систему
    async fn connect_pos_system(&self, system: PosSystem) -> Result<DateTime<Utc>, SyncError>;

    /// Загрузить данные из кассовой системы
    async fn sync_pos_system(&self, system: PosSystem) -> Result<PosSyncReport, SyncError>;

    /// Повторно обработать событие кассы; возвращает время обработки, мс
    async fn replay_webhook(&self, event: &WebhookEvent) -> Result<u32, SyncError>;
}

/// Имитация: ждет заданную задержку и всегда отвечает успехом
#[derive(Debug, Clone)]
pub struct SimulatedSyncPort {
    delay: Duration,
}

impl SimulatedSyncPort {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.delay())
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl SyncPort for SimulatedSyncPort {
    async fn sync_pos_order(&self, order: &PosOrder) -> Result<DateTime<Utc>, SyncError> {
        tracing::debug!(order_id = %order.id, pos = order.pos_system.code(), "Simulating order sync");
        self.wait().await;
        Ok(Utc::now())
    }

    async fn sync_location_inventory(
        &self,
        rows: &[LocationInventory],
    ) -> Result<DateTime<Utc>, SyncError> {
        tracing::debug!(rows = rows.len(), "Simulating location inventory sync");
        self.wait().await;
        Ok(Utc::now())
    }

    async fn connect_pos_system(&self, system: PosSystem) -> Result<DateTime<Utc>, SyncError> {
        tracing::debug!(pos = system.code(), "Simulating POS connection");
        self.wait().await;
        Ok(Utc::now())
    }

    async fn sync_pos_system(&self, system: PosSystem) -> Result<PosSyncReport, SyncError> {
        tracing::debug!(pos = system.code(), "Simulating POS data sync");
        self.wait().await;
        let records_synced = rand::thread_rng().gen_range(50..250);
        Ok(PosSyncReport {
            synced_at: Utc::now(),
            records_synced,
        })
    }

    async fn replay_webhook(&self, event: &WebhookEvent) -> Result<u32, SyncError> {
        tracing::debug!(event_id = %event.id, "Simulating webhook replay");
        self.wait().await;
        Ok(rand::thread_rng().gen_range(50..250))
    }
}
