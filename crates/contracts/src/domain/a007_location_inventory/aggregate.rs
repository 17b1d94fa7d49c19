use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};
use crate::shared::stock::{derive_status, StockStatus, StockThresholds};

/// Остаток товара в конкретном магазине
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInventory {
    /// `<location_id>/<product_id>`
    pub id: String,
    pub location_id: String,
    pub location_name: String,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub reserved_stock: u32,
    pub last_updated: DateTime<Utc>,
    pub reorder_point: u32,
    pub reorder_quantity: u32,
    pub cost: f64,
    pub price: f64,
}

impl LocationInventory {
    pub fn make_id(location_id: &str, product_id: &str) -> String {
        format!("{}/{}", location_id, product_id)
    }

    /// Четыре полосы, с учетом максимума
    pub fn status(&self) -> StockStatus {
        derive_status(
            self.current_stock,
            &StockThresholds::with_max(self.min_stock, self.max_stock),
        )
    }

    /// Свободный остаток: текущий минус резерв, не ниже нуля
    pub fn available_stock(&self) -> u32 {
        self.current_stock.saturating_sub(self.reserved_stock)
    }

    pub fn needs_reorder(&self) -> bool {
        self.current_stock <= self.reorder_point
    }

    pub fn set_stock(&mut self, stock: u32, at: DateTime<Utc>) {
        self.current_stock = stock;
        self.last_updated = at;
    }
}

impl ListRecord for LocationInventory {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.sku.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "location" => AttributeValue::Single(&self.location_id),
            "location_name" => AttributeValue::Single(&self.location_name),
            "status" => AttributeValue::Single(self.status().code()),
            "category" => AttributeValue::Single(&self.category),
            _ => AttributeValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(current: u32, min: u32, max: u32, reserved: u32) -> LocationInventory {
        LocationInventory {
            id: LocationInventory::make_id("loc-002", "prod-002"),
            location_id: "loc-002".into(),
            location_name: "Westside".into(),
            product_id: "prod-002".into(),
            product_name: "Whole Wheat Bread".into(),
            sku: "WWB-001".into(),
            category: "Bakery".into(),
            current_stock: current,
            min_stock: min,
            max_stock: max,
            reserved_stock: reserved,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 17, 10, 15, 0).unwrap(),
            reorder_point: 30,
            reorder_quantity: 40,
            cost: 2.0,
            price: 3.49,
        }
    }

    #[test]
    fn test_four_band_status() {
        assert_eq!(row(120, 25, 80, 20).status(), StockStatus::Overstocked);
        assert_eq!(row(80, 25, 80, 0).status(), StockStatus::InStock);
        assert_eq!(row(25, 25, 80, 0).status(), StockStatus::LowStock);
        assert_eq!(row(0, 25, 80, 0).status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_available_stock_never_negative() {
        assert_eq!(row(120, 25, 80, 20).available_stock(), 100);
        assert_eq!(row(5, 25, 80, 10).available_stock(), 0);
    }

    #[test]
    fn test_needs_reorder_at_reorder_point() {
        assert!(row(30, 25, 80, 0).needs_reorder());
        assert!(!row(31, 25, 80, 0).needs_reorder());
    }

    #[test]
    fn test_attributes() {
        let r = row(120, 25, 80, 20);
        assert_eq!(r.record_id(), "loc-002/prod-002");
        assert_eq!(r.attribute("location"), AttributeValue::Single("loc-002"));
        assert_eq!(r.attribute("status"), AttributeValue::Single("overstocked"));
    }
}
