use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};
use crate::shared::stock::{derive_status, stock_percentage, StockStatus, StockThresholds};

/// Складская позиция. Статус не хранится, а вычисляется из остатка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub last_restocked: NaiveDate,
}

impl InventoryItem {
    /// Три полосы: нет / мало / есть. Максимум используется только для шкалы.
    pub fn status(&self) -> StockStatus {
        derive_status(self.current_stock, &StockThresholds::new(self.min_stock))
    }

    pub fn set_stock(&mut self, stock: u32) {
        self.current_stock = stock;
    }

    pub fn stock_percentage(&self) -> f64 {
        stock_percentage(self.current_stock, self.max_stock)
    }
}

impl ListRecord for InventoryItem {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "category" => AttributeValue::Single(&self.category),
            "status" => AttributeValue::Single(self.status().code()),
            _ => AttributeValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: u32, min: u32, max: u32) -> InventoryItem {
        InventoryItem {
            id: "2".into(),
            name: "Whole Wheat Bread".into(),
            category: "Bakery".into(),
            current_stock: current,
            min_stock: min,
            max_stock: max,
            last_restocked: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        }
    }

    #[test]
    fn test_status_follows_stock() {
        assert_eq!(item(25, 30, 100).status(), StockStatus::LowStock);
        assert_eq!(item(30, 30, 100).status(), StockStatus::LowStock);
        assert_eq!(item(31, 30, 100).status(), StockStatus::InStock);
        assert_eq!(item(0, 30, 100).status(), StockStatus::OutOfStock);
        // выше максимума админская таблица все равно показывает "in stock"
        assert_eq!(item(500, 30, 100).status(), StockStatus::InStock);
    }

    #[test]
    fn test_status_recomputed_after_set_stock() {
        let mut i = item(150, 50, 200);
        i.set_stock(0);
        assert_eq!(i.attribute("status"), AttributeValue::Single("out_of_stock"));
    }
}
