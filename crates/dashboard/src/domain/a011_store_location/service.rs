use chrono::Utc;
use contracts::domain::a010_delivery_zone::aggregate::OperatingStatus;
use contracts::domain::a011_store_location::aggregate::{LocationForm, StoreLocation};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSummary {
    pub total: usize,
    pub active: usize,
    /// Сумма месячной выручки
    pub total_revenue: f64,
    pub total_employees: u32,
}

/// Управление магазинами сети
pub struct LocationService {
    screen: ListScreen<StoreLocation>,
}

impl LocationService {
    pub fn new(locations: Vec<StoreLocation>) -> Self {
        Self {
            screen: ListScreen::new("location", locations),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<StoreLocation> {
        &self.screen
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    pub fn set_type_filter(&mut self, raw: &str) {
        self.screen.set_filter("type", raw);
    }

    /// Новый магазин добавляется в конец списка
    pub fn add(&mut self, form: &LocationForm) -> ServiceResult<String> {
        form.validate().map_err(ServiceError::Validation)?;
        let now = Utc::now();
        let id = self
            .screen
            .unique_id(&format!("loc-{}", now.timestamp_millis()));
        let location = StoreLocation::from_form(id.clone(), form, now.date_naive());
        let code = location.code.clone();
        self.screen.insert(location)?;
        tracing::info!(location_id = %id, code = %code, "Location added");
        Ok(id)
    }

    pub fn edit(&mut self, id: &str, form: &LocationForm) -> ServiceResult<()> {
        form.validate().map_err(ServiceError::Validation)?;
        self.screen.apply_update(id, |location| location.apply_form(form))?;
        tracing::info!(location_id = %id, "Location updated");
        Ok(())
    }

    pub fn edit_form(&self, id: &str) -> ServiceResult<LocationForm> {
        self.screen.get(id).map(LocationForm::from_location)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.screen.remove(id);
        if removed {
            tracing::info!(location_id = %id, "Location deleted");
        }
        removed
    }

    pub fn summary(&self) -> LocationSummary {
        let locations = self.screen.records();
        LocationSummary {
            total: locations.len(),
            active: self
                .screen
                .count_where(|l| l.status == OperatingStatus::Active),
            total_revenue: locations.iter().map(|l| l.metrics.monthly_revenue).sum(),
            total_employees: locations.iter().map(|l| l.employee_count).sum(),
        }
    }
}
