use contracts::domain::a010_delivery_zone::aggregate::{DeliveryZone, OperatingStatus};

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSummary {
    pub total: usize,
    pub active: usize,
    /// Сумма текущей загрузки всех зон
    pub total_load: u32,
    /// Среднее время доставки в минутах, округленное; 0 без зон
    pub avg_delivery_time: u32,
}

/// Зоны доставки
pub struct DeliveryZoneService {
    screen: ListScreen<DeliveryZone>,
}

impl DeliveryZoneService {
    pub fn new(zones: Vec<DeliveryZone>) -> Self {
        Self {
            screen: ListScreen::new("delivery zone", zones),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<DeliveryZone> {
        &self.screen
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_type_filter(&mut self, raw: &str) {
        self.screen.set_filter("type", raw);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.screen.remove(id);
        if removed {
            tracing::info!(zone_id = %id, "Delivery zone deleted");
        }
        removed
    }

    /// active → inactive, остальные → active
    pub fn toggle_status(&mut self, id: &str) -> ServiceResult<OperatingStatus> {
        let status = self.screen.apply_update(id, |zone| {
            zone.status = zone.status.toggled();
            zone.status
        })?;
        tracing::info!(zone_id = %id, status = ?status, "Delivery zone status toggled");
        Ok(status)
    }

    /// Зона с наибольшей загрузкой и ее процент
    pub fn busiest_zone(&self) -> Option<(&DeliveryZone, f64)> {
        self.screen
            .records()
            .iter()
            .map(|z| (z, z.utilization()))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn summary(&self) -> ZoneSummary {
        let zones = self.screen.records();
        let avg_delivery_time = if zones.is_empty() {
            0
        } else {
            let total: u32 = zones.iter().map(|z| z.performance.avg_delivery_time).sum();
            (f64::from(total) / zones.len() as f64).round() as u32
        };
        ZoneSummary {
            total: zones.len(),
            active: self
                .screen
                .count_where(|z| z.status == OperatingStatus::Active),
            total_load: zones.iter().map(|z| z.schedule.current_load).sum(),
            avg_delivery_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busiest_zone() {
        let mut service = DeliveryZoneService::seeded();
        let (zone, load) = service.busiest_zone().unwrap();
        assert_eq!(zone.name, "Downtown Core");
        assert_eq!(load, 64.0);
        for id in service.screen().records().iter().map(|z| z.id.clone()).collect::<Vec<_>>() {
            service.delete(&id);
        }
        assert!(service.busiest_zone().is_none());
    }

    #[test]
    fn test_summary() {
        let service = DeliveryZoneService::seeded();
        assert_eq!(
            service.summary(),
            ZoneSummary { total: 3, active: 2, total_load: 50, avg_delivery_time: 42 }
        );
    }

    #[test]
    fn test_summary_of_empty_list() {
        let service = DeliveryZoneService::new(Vec::new());
        assert_eq!(service.summary().avg_delivery_time, 0);
        assert_eq!(service.summary().total, 0);
    }

    #[test]
    fn test_toggle_status() {
        let mut service = DeliveryZoneService::seeded();
        assert_eq!(service.toggle_status("zone-3").unwrap(), OperatingStatus::Active);
        assert_eq!(service.toggle_status("zone-1").unwrap(), OperatingStatus::Inactive);
        assert_eq!(service.toggle_status("zone-1").unwrap(), OperatingStatus::Active);
        assert!(service.toggle_status("zone-9").is_err());
    }

    #[test]
    fn test_filters_and_delete() {
        let mut service = DeliveryZoneService::seeded();
        service.set_status_filter("active");
        service.set_type_filter("standard");
        assert_eq!(service.screen().visible()[0].id, "zone-2");
        service.set_status_filter("all");
        service.set_type_filter("all");
        service.set_search("soho");
        assert_eq!(service.screen().visible()[0].id, "zone-1");
        assert!(service.delete("zone-1"));
        assert_eq!(service.screen().visible_count(), 0);
        assert_eq!(service.summary().avg_delivery_time, 49);
    }
}
