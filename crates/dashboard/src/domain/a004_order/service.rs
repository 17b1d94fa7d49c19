use contracts::domain::a004_order::aggregate::{Order, OrderStatus};
use std::collections::BTreeMap;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;

/// Отслеживание заказов (администратор)
pub struct OrderService {
    screen: ListScreen<Order>,
}

impl OrderService {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            screen: ListScreen::new("order", orders),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<Order> {
        &self.screen
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    /// Администратор может выставить любой статус
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> ServiceResult<()> {
        let previous = self.screen.apply_update(id, |order| {
            std::mem::replace(&mut order.status, status)
        })?;
        tracing::info!(
            order_id = %id,
            from = previous.display_name(),
            to = status.display_name(),
            "Order status updated"
        );
        Ok(())
    }

    /// Карточки по статусам, включая нулевые
    pub fn stats(&self) -> BTreeMap<OrderStatus, usize> {
        self.screen.counts_by(|order| order.status)
    }

    pub fn open_orders(&self) -> usize {
        self.screen.count_where(|order| order.status.is_open())
    }
}

/// Заказы владельца бизнеса: только просмотр
pub struct OwnerOrders {
    screen: ListScreen<Order>,
}

impl OwnerOrders {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            screen: ListScreen::new("order", orders),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::owner_seed())
    }

    pub fn screen(&self) -> &ListScreen<Order> {
        &self.screen
    }

    pub fn details(&self, id: &str) -> ServiceResult<&Order> {
        self.screen.get(id)
    }

    /// Заказы с трек-номером
    pub fn trackable(&self) -> Vec<&Order> {
        self.screen
            .records()
            .iter()
            .filter(|order| order.tracking_number.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_include_empty_statuses() {
        let service = OrderService::seeded();
        let stats = service.stats();
        assert_eq!(stats[&OrderStatus::Pending], 0);
        assert_eq!(stats[&OrderStatus::Processing], 1);
        assert_eq!(stats[&OrderStatus::Shipped], 1);
        assert_eq!(stats[&OrderStatus::Delivered], 1);
        assert_eq!(stats.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_update_status_moves_between_filters() {
        let mut service = OrderService::seeded();
        service.set_status_filter("shipped");
        assert_eq!(service.screen().visible_count(), 1);

        service.update_status("ORD-003", OrderStatus::Shipped).unwrap();
        assert_eq!(service.screen().visible_count(), 2);
        service.update_status("ORD-002", OrderStatus::Delivered).unwrap();
        let ids: Vec<&str> = service.screen().visible().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-003"]);
        assert_eq!(service.open_orders(), 1);
    }

    #[test]
    fn test_update_missing_order() {
        let mut service = OrderService::seeded();
        assert!(service.update_status("ORD-999", OrderStatus::Cancelled).is_err());
    }

    #[test]
    fn test_owner_orders() {
        let orders = OwnerOrders::seeded();
        assert_eq!(orders.trackable().len(), 2);
        let order = orders.details("ORD-003").unwrap();
        assert!((order.total() - 13.48).abs() < 1e-9);
        assert!(order.customer_name.is_none());
    }
}
