use chrono::{DateTime, Utc};
use contracts::domain::a006_pos_order::aggregate::PosSystem;
use contracts::domain::a014_pos_webhook::aggregate::{WebhookEvent, WebhookEventType, WebhookStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;
use std::sync::Arc;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;
use crate::shared::sync::SyncPort;

/// Длина ленты событий
pub const FEED_LIMIT: usize = 20;

/// Вероятность нового события за один опрос
const NEW_EVENT_CHANCE: f64 = 0.3;
/// Доля входящих событий, пришедших с ошибкой
const FAILED_EVENT_CHANCE: f64 = 0.2;

const SOURCES: [PosSystem; 3] = [PosSystem::Square, PosSystem::Shopify, PosSystem::Clover];
const EVENT_TYPES: [WebhookEventType; 3] = [
    WebhookEventType::TransactionCreated,
    WebhookEventType::InventoryUpdated,
    WebhookEventType::CustomerCreated,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookSummary {
    pub total: usize,
    pub processed: usize,
    pub failed: usize,
    /// Среднее по обработанным, мс, округленное; 0 без обработанных
    pub avg_processing_time: u32,
}

/// Лента событий от кассовых систем
pub struct PosWebhookService {
    screen: ListScreen<WebhookEvent>,
    port: Arc<dyn SyncPort>,
}

impl PosWebhookService {
    pub fn new(events: Vec<WebhookEvent>, port: Arc<dyn SyncPort>) -> Self {
        Self {
            screen: ListScreen::new("webhook event", events),
            port,
        }
    }

    pub fn seeded(port: Arc<dyn SyncPort>) -> Self {
        Self::new(repository::seed(), port)
    }

    pub fn screen(&self) -> &ListScreen<WebhookEvent> {
        &self.screen
    }

    /// Новое событие встает первым, лента не длиннее `FEED_LIMIT`
    pub fn receive(&mut self, event: WebhookEvent) -> ServiceResult<()> {
        let (id, kind, pos) = (event.id.clone(), event.event_type, event.pos_system);
        self.screen.prepend(event)?;
        self.screen.truncate(FEED_LIMIT);
        tracing::info!(event_id = %id, event_type = ?kind, pos = ?pos, "Webhook event received");
        Ok(())
    }

    /// Опрос касс: с вероятностью 30% приходит новое событие
    pub fn poll_event<R: Rng>(&mut self, rng: &mut R, at: DateTime<Utc>) -> ServiceResult<Option<String>> {
        if !rng.gen_bool(NEW_EVENT_CHANCE) {
            return Ok(None);
        }
        let id = self
            .screen
            .unique_id(&format!("wh-{}", at.timestamp_millis()));
        let pos_system = *SOURCES.choose(rng).unwrap_or(&PosSystem::Square);
        let event_type = *EVENT_TYPES
            .choose(rng)
            .unwrap_or(&WebhookEventType::TransactionCreated);
        let status = if rng.gen_bool(FAILED_EVENT_CHANCE) {
            WebhookStatus::Failed
        } else {
            WebhookStatus::Processed
        };
        let event = WebhookEvent {
            id: id.clone(),
            pos_system,
            event_type,
            payload: json!({
                "transactionId": format!("TXN-{}", rng.gen_range(0..10_000)),
                "amount": rng.gen_range(10..110),
            }),
            timestamp: at,
            status,
            retry_count: 0,
            processing_time: rng.gen_range(50..250),
        };
        self.receive(event)?;
        Ok(Some(id))
    }

    /// Повторная обработка через порт: при успехе событие обработано, счетчик попыток растет
    pub async fn retry(&mut self, id: &str) -> ServiceResult<u32> {
        let event = self.screen.get(id)?.clone();
        let processing_time = self.port.replay_webhook(&event).await.map_err(|e| {
            tracing::warn!(event_id = %id, error = %e, "Webhook retry failed");
            e
        })?;
        let retries = self.screen.apply_update(id, |e| {
            e.mark_retried(processing_time);
            e.retry_count
        })?;
        tracing::info!(event_id = %id, retries, processing_time, "Webhook retried");
        Ok(processing_time)
    }

    pub fn summary(&self) -> WebhookSummary {
        let counts = self.screen.counts_by(|e| e.status);
        let processed: Vec<u32> = self
            .screen
            .records()
            .iter()
            .filter(|e| e.status == WebhookStatus::Processed)
            .map(|e| e.processing_time)
            .collect();
        let avg_processing_time = if processed.is_empty() {
            0
        } else {
            (processed.iter().map(|t| f64::from(*t)).sum::<f64>() / processed.len() as f64).round() as u32
        };
        WebhookSummary {
            total: self.screen.total_count(),
            processed: counts[&WebhookStatus::Processed],
            failed: counts[&WebhookStatus::Failed],
            avg_processing_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ServiceError;
    use crate::shared::sync::testing::RecordingSyncPort;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn service(port: &Arc<RecordingSyncPort>) -> PosWebhookService {
        PosWebhookService::seeded(port.clone())
    }

    fn event(id: &str) -> WebhookEvent {
        let mut event = repository::seed().remove(1);
        event.id = id.into();
        event
    }

    #[test]
    fn test_summary() {
        let port = Arc::new(RecordingSyncPort::default());
        assert_eq!(
            service(&port).summary(),
            WebhookSummary { total: 3, processed: 2, failed: 1, avg_processing_time: 103 }
        );
    }

    #[test]
    fn test_summary_without_processed_events() {
        let port = Arc::new(RecordingSyncPort::default());
        let only_failed = repository::seed().into_iter().skip(2).collect();
        let service = PosWebhookService::new(only_failed, port);
        assert_eq!(service.summary().avg_processing_time, 0);
        assert_eq!(service.summary().failed, 1);
    }

    #[tokio::test]
    async fn test_retry_marks_processed() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        assert_eq!(service.retry("wh-003").await.unwrap(), 100);
        let retried = service.screen().get("wh-003").unwrap();
        assert_eq!(retried.status, WebhookStatus::Processed);
        assert_eq!(retried.retry_count, 4);
        assert_eq!(service.summary().failed, 0);
        assert_eq!(service.summary().avg_processing_time, 102);
        assert_eq!(port.calls(), vec!["wh-003"]);
    }

    #[tokio::test]
    async fn test_failed_retry_keeps_event() {
        let port = Arc::new(RecordingSyncPort::failing_for(&["wh-003"]));
        let mut service = service(&port);
        let err = service.retry("wh-003").await.unwrap_err();
        assert!(matches!(err, ServiceError::Sync(_)));
        let event = service.screen().get("wh-003").unwrap();
        assert_eq!(event.status, WebhookStatus::Failed);
        assert_eq!(event.retry_count, 3);
        assert!(service.retry("wh-404").await.is_err());
    }

    #[test]
    fn test_feed_is_capped() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        for n in 0..25 {
            service.receive(event(&format!("wh-new-{}", n))).unwrap();
        }
        assert_eq!(service.screen().total_count(), FEED_LIMIT);
        assert_eq!(service.screen().records()[0].id, "wh-new-24");
        assert!(!service.screen().contains("wh-001"));
    }

    #[test]
    fn test_poll_events_at_same_instant() {
        let port = Arc::new(RecordingSyncPort::default());
        let mut service = service(&port);
        let mut rng = StdRng::seed_from_u64(11);
        let at = Utc.with_ymd_and_hms(2024, 1, 17, 11, 0, 0).unwrap();
        let mut received = Vec::new();
        for _ in 0..40 {
            if let Some(id) = service.poll_event(&mut rng, at).unwrap() {
                received.push(id);
            }
        }
        assert!(!received.is_empty());
        assert_eq!(service.screen().records()[0].id, *received.last().unwrap());
        let newest = &service.screen().records()[0];
        assert_eq!(newest.retry_count, 0);
        assert_eq!(newest.timestamp, at);
        assert!((50..250).contains(&newest.processing_time));
        assert!(service.screen().total_count() <= FEED_LIMIT);
    }
}
