use chrono::NaiveDate;
use contracts::domain::a003_inventory_item::aggregate::InventoryItem;

use crate::shared::seed::date;

fn item(
    id: &str,
    name: &str,
    category: &str,
    (current_stock, min_stock, max_stock): (u32, u32, u32),
    last_restocked: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        current_stock,
        min_stock,
        max_stock,
        last_restocked,
    }
}

/// Склад администратора
pub fn seed() -> Vec<InventoryItem> {
    vec![
        item("1", "Organic Bananas", "Fruits", (150, 50, 200), date(2024, 1, 15)),
        item("2", "Whole Wheat Bread", "Bakery", (25, 30, 100), date(2024, 1, 14)),
        item("3", "Organic Milk", "Dairy", (0, 20, 80), date(2024, 1, 10)),
    ]
}

/// Остатки, которые видит владелец бизнеса
pub fn monitor_seed() -> Vec<InventoryItem> {
    let updated = date(2024, 1, 17);
    vec![
        item("1", "Organic Bananas", "Fruits", (150, 50, 200), updated),
        item("2", "Whole Wheat Bread", "Bakery", (25, 30, 100), updated),
        item("3", "Organic Milk", "Dairy", (0, 20, 80), updated),
        item("4", "Fresh Eggs", "Dairy", (89, 30, 120), updated),
        item("5", "Chicken Breast", "Meat", (45, 20, 80), updated),
    ]
}
