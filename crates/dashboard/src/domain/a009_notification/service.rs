use chrono::{DateTime, Utc};
use contracts::domain::a009_notification::aggregate::Notification;
use contracts::shared::format::format_relative;
use rand::Rng;
use uuid::Uuid;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;

/// Сколько уведомлений видно в свернутом списке
pub const COLLAPSED_LIMIT: usize = 5;

/// Вероятность нового заказа за один опрос
const NEW_ORDER_CHANCE: f64 = 0.2;

/// Колокольчик в шапке дашборда
pub struct NotificationService {
    screen: ListScreen<Notification>,
    show_all: bool,
}

impl NotificationService {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            screen: ListScreen::new("notification", notifications),
            show_all: false,
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<Notification> {
        &self.screen
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    /// Первые пять, либо все при раскрытом списке
    pub fn displayed(&self) -> &[Notification] {
        let records = self.screen.records();
        if self.show_all {
            records
        } else {
            &records[..records.len().min(COLLAPSED_LIMIT)]
        }
    }

    /// Показываемые уведомления с возрастом вида `5m ago`
    pub fn displayed_with_age(&self, now: DateTime<Utc>) -> Vec<(&Notification, String)> {
        self.displayed()
            .iter()
            .map(|n| (n, format_relative(n.timestamp, now)))
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.screen.count_where(|n| !n.read)
    }

    pub fn mark_read(&mut self, id: &str) -> ServiceResult<()> {
        self.screen.apply_update(id, |n| n.read = true)
    }

    pub fn mark_all_read(&mut self) {
        self.screen.update_all(|n| n.read = true);
        tracing::debug!("All notifications marked as read");
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.screen.remove(id)
    }

    /// Новое уведомление встает первым
    pub fn push(&mut self, notification: Notification) -> ServiceResult<()> {
        tracing::info!(
            notification_id = %notification.id,
            title = %notification.title,
            "Notification received"
        );
        self.screen.prepend(notification)
    }

    /// Опрос входящих заказов: с вероятностью 20% приходит новый
    pub fn poll_new_order<R: Rng>(&mut self, rng: &mut R, at: DateTime<Utc>) -> ServiceResult<Option<String>> {
        if !rng.gen_bool(NEW_ORDER_CHANCE) {
            return Ok(None);
        }
        let id = Uuid::new_v4().to_string();
        let order_number = rng.gen_range(0..10_000);
        self.push(Notification::new_order(id.clone(), order_number, at))?;
        Ok(Some(id))
    }

    pub fn poll_now(&mut self) -> ServiceResult<Option<String>> {
        self.poll_new_order(&mut rand::thread_rng(), Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_notification::aggregate::NotificationType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_displayed_with_age() {
        let service = NotificationService::seeded();
        let now = crate::shared::seed::utc(2024, 1, 17, 10, 35);
        let aged = service.displayed_with_age(now);
        assert_eq!(aged.len(), 5);
        assert_eq!(aged[0].0.id, "1");
        assert_eq!(aged[0].1, "5m ago");
        assert_eq!(aged[1].1, "1h ago");
    }

    #[test]
    fn test_unread_and_mark_read() {
        let mut service = NotificationService::seeded();
        assert_eq!(service.unread_count(), 3);
        service.mark_read("1").unwrap();
        service.mark_read("3").unwrap();
        assert_eq!(service.unread_count(), 2);
        service.mark_all_read();
        assert_eq!(service.unread_count(), 0);
        assert!(service.mark_read("99").is_err());
    }

    #[test]
    fn test_displayed_limit() {
        let mut service = NotificationService::seeded();
        service
            .push(Notification::new_order("6".into(), 42, Utc::now()))
            .unwrap();
        assert_eq!(service.displayed().len(), COLLAPSED_LIMIT);
        assert_eq!(service.displayed()[0].id, "6");
        assert_eq!(service.displayed()[0].message, "Order #ORD-42 received");
        service.set_show_all(true);
        assert_eq!(service.displayed().len(), 6);
    }

    #[test]
    fn test_delete() {
        let mut service = NotificationService::seeded();
        assert!(service.delete("2"));
        assert!(!service.delete("2"));
        assert_eq!(service.unread_count(), 2);
        assert_eq!(service.displayed().len(), 4);
    }

    #[test]
    fn test_poll_pushes_new_orders() {
        let mut service = NotificationService::seeded();
        let mut rng = StdRng::seed_from_u64(7);
        let mut received = 0;
        for _ in 0..200 {
            if service.poll_new_order(&mut rng, Utc::now()).unwrap().is_some() {
                received += 1;
            }
        }
        assert!(received > 0);
        assert_eq!(service.screen().total_count(), 5 + received);
        assert_eq!(service.screen().records()[0].kind, NotificationType::NewOrder);
        assert_eq!(service.unread_count(), 3 + received);
    }
}
