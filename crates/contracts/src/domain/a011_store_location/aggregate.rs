use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a010_delivery_zone::aggregate::OperatingStatus;
use crate::shared::coerce::{parse_decimal_or_zero, parse_int_or_zero};
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Flagship,
    Standard,
    Express,
    Warehouse,
}

impl Enumerated for LocationType {
    fn all() -> &'static [Self] {
        &[
            LocationType::Flagship,
            LocationType::Standard,
            LocationType::Express,
            LocationType::Warehouse,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            LocationType::Flagship => "flagship",
            LocationType::Standard => "standard",
            LocationType::Express => "express",
            LocationType::Warehouse => "warehouse",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetrics {
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub total_orders: u32,
    pub active_products: u32,
    pub inventory_value: f64,
    pub customer_count: u32,
}

/// Магазин сети
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    /// Короткий код вида `DT001`
    pub code: String,
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub manager: Contact,
    pub timezone: String,
    pub status: OperatingStatus,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Площадь, кв. футы
    pub size: u32,
    pub employee_count: u32,
    pub open_date: NaiveDate,
    pub tax_rate: f64,
    pub currency: String,
    pub metrics: LocationMetrics,
    pub pos_system: Option<String>,
}

impl StoreLocation {
    /// Новый магазин из формы: активен, метрики нулевые
    pub fn from_form(id: String, form: &LocationForm, open_date: NaiveDate) -> Self {
        let mut location = Self {
            id,
            name: String::new(),
            code: String::new(),
            address: Address::default(),
            phone: String::new(),
            email: String::new(),
            website: None,
            manager: Contact::default(),
            timezone: String::new(),
            status: OperatingStatus::Active,
            location_type: LocationType::Standard,
            size: 0,
            employee_count: 0,
            open_date,
            tax_rate: 0.0,
            currency: String::new(),
            metrics: LocationMetrics::default(),
            pos_system: None,
        };
        location.apply_form(form);
        location
    }

    /// Поля формы поверх записи. Статус, метрики и дата открытия сохраняются.
    pub fn apply_form(&mut self, form: &LocationForm) {
        self.name = form.name.trim().to_string();
        self.code = form.code.trim().to_string();
        self.address = Address {
            street: form.street.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            zip_code: form.zip_code.clone(),
            country: form.country.clone(),
        };
        self.phone = form.phone.clone();
        self.email = form.email.clone();
        self.website = if form.website.trim().is_empty() {
            None
        } else {
            Some(form.website.clone())
        };
        self.manager = Contact {
            name: form.manager_name.clone(),
            email: form.manager_email.clone(),
            phone: form.manager_phone.clone(),
        };
        self.timezone = form.timezone.clone();
        self.location_type = form.location_type;
        self.size = to_count(parse_int_or_zero(&form.size));
        self.employee_count = to_count(parse_int_or_zero(&form.employee_count));
        self.tax_rate = parse_decimal_or_zero(&form.tax_rate);
        self.currency = form.currency.clone();
    }
}

fn to_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

impl ListRecord for StoreLocation {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.code.as_str(),
            self.address.city.as_str(),
        ]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            "type" => AttributeValue::Single(self.location_type.code()),
            _ => AttributeValue::Missing,
        }
    }
}

/// Поля диалога "Add / Edit Location"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationForm {
    pub name: String,
    pub code: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub manager_name: String,
    pub manager_email: String,
    pub manager_phone: String,
    pub timezone: String,
    pub location_type: LocationType,
    pub size: String,
    pub employee_count: String,
    pub tax_rate: String,
    pub currency: String,
}

impl Default for LocationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "USA".into(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            manager_name: String::new(),
            manager_email: String::new(),
            manager_phone: String::new(),
            timezone: "America/New_York".into(),
            location_type: LocationType::Standard,
            size: String::new(),
            employee_count: String::new(),
            tax_rate: "8.25".into(),
            currency: "USD".into(),
        }
    }
}

impl LocationForm {
    pub fn from_location(location: &StoreLocation) -> Self {
        Self {
            name: location.name.clone(),
            code: location.code.clone(),
            street: location.address.street.clone(),
            city: location.address.city.clone(),
            state: location.address.state.clone(),
            zip_code: location.address.zip_code.clone(),
            country: location.address.country.clone(),
            phone: location.phone.clone(),
            email: location.email.clone(),
            website: location.website.clone().unwrap_or_default(),
            manager_name: location.manager.name.clone(),
            manager_email: location.manager.email.clone(),
            manager_phone: location.manager.phone.clone(),
            timezone: location.timezone.clone(),
            location_type: location.location_type,
            size: location.size.to_string(),
            employee_count: location.employee_count.to_string(),
            tax_rate: location.tax_rate.to_string(),
            currency: location.currency.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Store name is required".into());
        }
        if self.code.trim().is_empty() {
            return Err("Store code is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LocationForm {
        LocationForm {
            name: "Harbor Market".into(),
            code: "HB004".into(),
            city: "Jersey City".into(),
            size: "6000".into(),
            employee_count: "-3".into(),
            tax_rate: "6.625".into(),
            ..LocationForm::default()
        }
    }

    #[test]
    fn test_from_form_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let loc = StoreLocation::from_form("loc-4".into(), &form(), date);
        assert_eq!(loc.status, OperatingStatus::Active);
        assert_eq!(loc.size, 6000);
        assert_eq!(loc.employee_count, 0);
        assert_eq!(loc.tax_rate, 6.625);
        assert_eq!(loc.metrics.monthly_revenue, 0.0);
        assert_eq!(loc.address.country, "USA");
        assert!(loc.website.is_none());
    }

    #[test]
    fn test_edit_keeps_metrics_and_status() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let mut loc = StoreLocation::from_form("loc-4".into(), &form(), date);
        loc.metrics.monthly_revenue = 1000.0;
        loc.status = OperatingStatus::Maintenance;
        let mut edit = LocationForm::from_location(&loc);
        edit.name = "Harbor Market II".into();
        loc.apply_form(&edit);
        assert_eq!(loc.name, "Harbor Market II");
        assert_eq!(loc.metrics.monthly_revenue, 1000.0);
        assert_eq!(loc.status, OperatingStatus::Maintenance);
    }

    #[test]
    fn test_validate() {
        assert!(form().validate().is_ok());
        let mut f = form();
        f.code = " ".into();
        assert!(f.validate().is_err());
    }
}
