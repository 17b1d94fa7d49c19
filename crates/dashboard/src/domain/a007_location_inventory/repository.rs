use chrono::{DateTime, Utc};
use contracts::domain::a007_location_inventory::aggregate::LocationInventory;

use crate::shared::seed::utc;

struct Product<'a> {
    id: &'a str,
    name: &'a str,
    sku: &'a str,
    category: &'a str,
    cost: f64,
    price: f64,
}

const BANANAS: Product<'static> = Product {
    id: "prod-001",
    name: "Organic Bananas",
    sku: "ORG-BAN-001",
    category: "Fruits",
    cost: 1.5,
    price: 2.99,
};

const BREAD: Product<'static> = Product {
    id: "prod-002",
    name: "Whole Wheat Bread",
    sku: "WWB-001",
    category: "Bakery",
    cost: 2.0,
    price: 3.49,
};

fn row(
    (location_id, location_name): (&str, &str),
    product: &Product<'_>,
    (current_stock, min_stock, max_stock, reserved_stock): (u32, u32, u32, u32),
    (reorder_point, reorder_quantity): (u32, u32),
    last_updated: DateTime<Utc>,
) -> LocationInventory {
    LocationInventory {
        id: LocationInventory::make_id(location_id, product.id),
        location_id: location_id.into(),
        location_name: location_name.into(),
        product_id: product.id.into(),
        product_name: product.name.into(),
        sku: product.sku.into(),
        category: product.category.into(),
        current_stock,
        min_stock,
        max_stock,
        reserved_stock,
        last_updated,
        reorder_point,
        reorder_quantity,
        cost: product.cost,
        price: product.price,
    }
}

/// Остатки по магазинам
pub fn seed() -> Vec<LocationInventory> {
    let downtown = ("loc-001", "Downtown");
    let westside = ("loc-002", "Westside");
    let express = ("loc-003", "Express");
    vec![
        row(downtown, &BANANAS, (150, 50, 200, 25), (60, 100), utc(2024, 1, 17, 10, 30)),
        row(westside, &BANANAS, (25, 30, 150, 10), (35, 75), utc(2024, 1, 17, 10, 25)),
        row(express, &BANANAS, (0, 20, 100, 0), (25, 50), utc(2024, 1, 17, 9, 15)),
        row(downtown, &BREAD, (75, 30, 100, 15), (35, 50), utc(2024, 1, 17, 10, 20)),
        row(westside, &BREAD, (120, 25, 80, 20), (30, 40), utc(2024, 1, 17, 10, 15)),
    ]
}
