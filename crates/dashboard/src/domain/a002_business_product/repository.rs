use contracts::domain::a001_product::aggregate::{ProductStatus, PLACEHOLDER_IMAGE};
use contracts::domain::a002_business_product::aggregate::BusinessProduct;

use crate::shared::seed::{date, strings};

/// Каталог владельца бизнеса
pub fn seed() -> Vec<BusinessProduct> {
    vec![
        BusinessProduct {
            id: "bp-1".into(),
            name: "Organic Bananas".into(),
            brand: "Fresh Farm".into(),
            category: "Fruits".into(),
            description: "Premium organic bananas from my local supplier".into(),
            price: 3.49,
            weights: strings(&["1 lb", "2 lb"]),
            quantity: 50,
            image: PLACEHOLDER_IMAGE.into(),
            available: true,
            status: ProductStatus::Active,
            created_at: date(2024, 1, 15),
        },
        BusinessProduct {
            id: "bp-2".into(),
            name: "Fresh Eggs".into(),
            brand: "Farm Fresh".into(),
            category: "Dairy".into(),
            description: "Free-range eggs from local farms".into(),
            price: 4.99,
            weights: strings(&["12 count", "18 count"]),
            quantity: 0,
            image: PLACEHOLDER_IMAGE.into(),
            available: false,
            status: ProductStatus::Active,
            created_at: date(2024, 1, 16),
        },
    ]
}
