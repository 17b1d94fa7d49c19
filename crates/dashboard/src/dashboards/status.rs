//! Общие строки состояния для обеих ролей

use chrono::{DateTime, Utc};
use contracts::shared::format::format_number;

use crate::domain::a009_notification::service::NotificationService;
use crate::domain::a012_pos_connection::service::PosIntegrationService;
use crate::domain::a014_pos_webhook::service::PosWebhookService;

pub(super) fn pos_lines(pos: &PosIntegrationService, webhooks: &PosWebhookService) -> [String; 2] {
    let pos = pos.summary();
    let hooks = webhooks.summary();
    [
        format!(
            "POS: {} of {} connected, {} records synced",
            pos.connected,
            pos.total,
            format_number(pos.records_synced as usize)
        ),
        format!(
            "Webhooks: {} processed, {} failed, avg {} ms",
            hooks.processed, hooks.failed, hooks.avg_processing_time
        ),
    ]
}

pub(super) fn latest_notification(notifications: &NotificationService, now: DateTime<Utc>) -> Option<String> {
    notifications
        .displayed_with_age(now)
        .first()
        .map(|(n, age)| format!("Latest notification: {} ({})", n.title, age))
}
