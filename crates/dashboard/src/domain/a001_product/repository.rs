use contracts::domain::a001_product::aggregate::{Product, ProductStatus, PLACEHOLDER_IMAGE};

use crate::shared::seed::strings;

const BROWSER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

struct Row<'a> {
    id: &'a str,
    name: &'a str,
    brand: &'a str,
    category: &'a str,
    description: &'a str,
    price: f64,
    weights: &'a [&'a str],
    quantity: u32,
}

impl Row<'_> {
    fn into_product(self, image: &str) -> Product {
        Product {
            id: self.id.into(),
            name: self.name.into(),
            brand: self.brand.into(),
            category: self.category.into(),
            description: self.description.into(),
            price: self.price,
            weights: strings(self.weights),
            quantity: self.quantity,
            image: image.into(),
            status: ProductStatus::Active,
        }
    }
}

/// Каталог администратора
pub fn seed() -> Vec<Product> {
    vec![
        Row {
            id: "1",
            name: "Organic Bananas",
            brand: "Fresh Farm",
            category: "Fruits",
            description: "Fresh organic bananas from local farms",
            price: 2.99,
            weights: &["1 lb", "2 lb", "5 lb"],
            quantity: 150,
        }
        .into_product(PLACEHOLDER_IMAGE),
        Row {
            id: "2",
            name: "Whole Wheat Bread",
            brand: "Baker's Choice",
            category: "Bakery",
            description: "Freshly baked whole wheat bread",
            price: 3.49,
            weights: &["1 loaf", "2 loaves"],
            quantity: 75,
        }
        .into_product(PLACEHOLDER_IMAGE),
    ]
}

/// Витрина для владельца бизнеса
pub fn browser_seed() -> Vec<Product> {
    vec![
        Row {
            id: "1",
            name: "Organic Bananas",
            brand: "Fresh Farm",
            category: "Fruits",
            description: "Fresh organic bananas from local farms. Rich in potassium and perfect for smoothies or snacking.",
            price: 2.99,
            weights: &["1 lb", "2 lb", "5 lb"],
            quantity: 150,
        },
        Row {
            id: "2",
            name: "Whole Wheat Bread",
            brand: "Baker's Choice",
            category: "Bakery",
            description: "Freshly baked whole wheat bread made with organic flour and natural ingredients.",
            price: 3.49,
            weights: &["1 loaf", "2 loaves"],
            quantity: 25,
        },
        Row {
            id: "3",
            name: "Organic Milk",
            brand: "Pure Dairy",
            category: "Dairy",
            description: "Fresh organic milk from grass-fed cows. Rich in calcium and protein.",
            price: 4.99,
            weights: &["1 gallon", "0.5 gallon"],
            quantity: 0,
        },
        Row {
            id: "4",
            name: "Fresh Eggs",
            brand: "Farm Fresh",
            category: "Dairy",
            description: "Free-range eggs from happy hens. Perfect for baking and cooking.",
            price: 3.99,
            weights: &["12 count", "18 count", "24 count"],
            quantity: 89,
        },
        Row {
            id: "5",
            name: "Chicken Breast",
            brand: "Premium Poultry",
            category: "Meat",
            description: "Fresh, boneless chicken breast. High in protein and perfect for healthy meals.",
            price: 8.99,
            weights: &["1 lb", "2 lb", "5 lb"],
            quantity: 45,
        },
        Row {
            id: "6",
            name: "Organic Apples",
            brand: "Orchard Select",
            category: "Fruits",
            description: "Crisp organic apples perfect for snacking or baking. Grown without pesticides.",
            price: 4.49,
            weights: &["1 lb", "3 lb", "5 lb"],
            quantity: 120,
        },
    ]
    .into_iter()
    .map(|row| row.into_product(BROWSER_IMAGE))
    .collect()
}
