use contracts::domain::a003_inventory_item::aggregate::InventoryItem;
use contracts::shared::coerce::parse_stock_input;
use contracts::shared::stock::StockStatus;
use std::collections::BTreeMap;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;

/// Карточки над таблицей склада
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

fn summarize(screen: &ListScreen<InventoryItem>) -> InventorySummary {
    let counts = screen.counts_by(InventoryItem::status);
    InventorySummary {
        total: screen.total_count(),
        in_stock: counts[&StockStatus::InStock],
        low_stock: counts[&StockStatus::LowStock],
        out_of_stock: counts[&StockStatus::OutOfStock],
    }
}

/// Управление складом (администратор)
pub struct InventoryService {
    screen: ListScreen<InventoryItem>,
}

impl InventoryService {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            screen: ListScreen::new("inventory item", items),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<InventoryItem> {
        &self.screen
    }

    /// Кнопки "All / Low Stock / Out of Stock"
    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    /// Ввод количества в ячейке таблицы. Мусор и отрицательные значения дают 0.
    pub fn update_stock(&mut self, id: &str, raw: &str) -> ServiceResult<StockStatus> {
        let stock = parse_stock_input(raw);
        let status = self.screen.apply_update(id, |item| {
            item.set_stock(stock);
            item.status()
        })?;
        tracing::info!(item_id = %id, stock, status = %status, "Inventory stock updated");
        Ok(status)
    }

    pub fn summary(&self) -> InventorySummary {
        summarize(&self.screen)
    }
}

/// Мониторинг остатков (владелец бизнеса, только чтение)
pub struct InventoryMonitor {
    screen: ListScreen<InventoryItem>,
}

impl InventoryMonitor {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            screen: ListScreen::new("inventory item", items),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::monitor_seed())
    }

    pub fn screen(&self) -> &ListScreen<InventoryItem> {
        &self.screen
    }

    pub fn summary(&self) -> InventorySummary {
        summarize(&self.screen)
    }

    /// Шкала заполненности склада по позициям
    pub fn stock_levels(&self) -> Vec<(&str, f64)> {
        self.screen
            .records()
            .iter()
            .map(|item| (item.name.as_str(), item.stock_percentage()))
            .collect()
    }

    /// Статусы по категориям, с нулями для отсутствующих статусов
    pub fn category_breakdown(&self) -> BTreeMap<String, BTreeMap<StockStatus, usize>> {
        let mut breakdown = BTreeMap::new();
        for category in self.screen.distinct("category") {
            let items: Vec<InventoryItem> = self
                .screen
                .records()
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect();
            breakdown.insert(
                category,
                contracts::shared::list_query::aggregate_counts(&items, InventoryItem::status),
            );
        }
        breakdown
    }
}
