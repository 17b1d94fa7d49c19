use serde::{Deserialize, Serialize};
use std::fmt;

use super::list_query::Enumerated;

/// Статус остатка. Всегда вычисляется из количества, отдельно не хранится.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Overstocked,
}

impl StockStatus {
    /// Подпись для бейджа: "low stock"
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in stock",
            StockStatus::LowStock => "low stock",
            StockStatus::OutOfStock => "out of stock",
            StockStatus::Overstocked => "overstocked",
        }
    }

    /// Нужна дозакупка (низкий остаток или нет в наличии)
    pub fn needs_restock(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

impl Enumerated for StockStatus {
    fn all() -> &'static [Self] {
        &[
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
            StockStatus::Overstocked,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Overstocked => "overstocked",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Пороги остатка. `max` задается только там, где есть понятие "затоваривания".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub min: u32,
    pub max: Option<u32>,
}

impl StockThresholds {
    /// Три состояния: нет / мало / есть
    pub fn new(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Четыре состояния, включая `overstocked`
    pub fn with_max(min: u32, max: u32) -> Self {
        Self { min, max: Some(max) }
    }
}

/// Статус по количеству. Порядок проверок фиксирован:
/// ноль, затем `<= min`, затем `> max`.
pub fn derive_status(stock: u32, thresholds: &StockThresholds) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock <= thresholds.min {
        StockStatus::LowStock
    } else if thresholds.max.is_some_and(|max| stock > max) {
        StockStatus::Overstocked
    } else {
        StockStatus::InStock
    }
}

/// Заполненность склада в процентах (для индикатора)
pub fn stock_percentage(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(current) / f64::from(max) * 100.0
}
