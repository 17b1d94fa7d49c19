use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Standard,
    Express,
    Premium,
    Restricted,
}

impl Enumerated for ZoneType {
    fn all() -> &'static [Self] {
        &[
            ZoneType::Standard,
            ZoneType::Express,
            ZoneType::Premium,
            ZoneType::Restricted,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ZoneType::Standard => "standard",
            ZoneType::Express => "express",
            ZoneType::Premium => "premium",
            ZoneType::Restricted => "restricted",
        }
    }
}

/// Статус зоны доставки и магазина (общий набор значений)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingStatus {
    Active,
    Inactive,
    Maintenance,
}

impl OperatingStatus {
    /// Переключатель активности; из обслуживания зона возвращается в работу
    pub fn toggled(&self) -> Self {
        match self {
            OperatingStatus::Active => OperatingStatus::Inactive,
            OperatingStatus::Inactive | OperatingStatus::Maintenance => OperatingStatus::Active,
        }
    }
}

impl Enumerated for OperatingStatus {
    fn all() -> &'static [Self] {
        &[
            OperatingStatus::Active,
            OperatingStatus::Inactive,
            OperatingStatus::Maintenance,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            OperatingStatus::Active => "active",
            OperatingStatus::Inactive => "inactive",
            OperatingStatus::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCoverage {
    /// Радиус в милях
    pub radius: f64,
    pub zip_codes: Vec<String>,
    pub neighborhoods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePricing {
    pub base_fee: f64,
    pub free_delivery_threshold: f64,
    pub express_upcharge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSchedule {
    pub time_slots: Vec<String>,
    pub max_capacity: u32,
    pub current_load: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePerformance {
    /// Минуты
    pub avg_delivery_time: u32,
    pub success_rate: f64,
    pub customer_satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub status: OperatingStatus,
    pub coverage: ZoneCoverage,
    pub pricing: ZonePricing,
    pub schedule: ZoneSchedule,
    pub performance: ZonePerformance,
}

impl DeliveryZone {
    /// Загрузка в процентах от вместимости (0 для зоны без вместимости)
    pub fn utilization(&self) -> f64 {
        if self.schedule.max_capacity == 0 {
            return 0.0;
        }
        f64::from(self.schedule.current_load) / f64::from(self.schedule.max_capacity) * 100.0
    }
}

impl ListRecord for DeliveryZone {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.coverage.zip_codes.iter().map(String::as_str));
        fields.extend(self.coverage.neighborhoods.iter().map(String::as_str));
        fields
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "type" => AttributeValue::Single(self.zone_type.code()),
            "status" => AttributeValue::Single(self.status.code()),
            _ => AttributeValue::Missing,
        }
    }
}
