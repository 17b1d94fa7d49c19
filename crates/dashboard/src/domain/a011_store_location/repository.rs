use contracts::domain::a010_delivery_zone::aggregate::OperatingStatus;
use contracts::domain::a011_store_location::aggregate::{
    Address, Contact, LocationMetrics, LocationType, StoreLocation,
};

use crate::shared::seed::date;

fn address(street: &str, city: &str, zip_code: &str) -> Address {
    Address {
        street: street.into(),
        city: city.into(),
        state: "NY".into(),
        zip_code: zip_code.into(),
        country: "USA".into(),
    }
}

fn contact(name: &str, email: &str, phone: &str) -> Contact {
    Contact {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
    }
}

/// Магазины сети
pub fn seed() -> Vec<StoreLocation> {
    vec![
        StoreLocation {
            id: "loc-001".into(),
            name: "Downtown Flagship Store".into(),
            code: "DT001".into(),
            address: address("123 Main Street", "New York", "10001"),
            phone: "(555) 123-4567".into(),
            email: "downtown@grocery.com".into(),
            website: Some("https://grocery.com/downtown".into()),
            manager: contact("John Smith", "john.smith@grocery.com", "(555) 123-4568"),
            timezone: "America/New_York".into(),
            status: OperatingStatus::Active,
            location_type: LocationType::Flagship,
            size: 15_000,
            employee_count: 45,
            open_date: date(2020, 1, 15),
            tax_rate: 8.25,
            currency: "USD".into(),
            metrics: LocationMetrics {
                daily_revenue: 12_500.0,
                monthly_revenue: 375_000.0,
                total_orders: 1250,
                active_products: 2500,
                inventory_value: 125_000.0,
                customer_count: 3500,
            },
            pos_system: Some("square".into()),
        },
        StoreLocation {
            id: "loc-002".into(),
            name: "Westside Market".into(),
            code: "WS002".into(),
            address: address("456 Oak Avenue", "New York", "10025"),
            phone: "(555) 234-5678".into(),
            email: "westside@grocery.com".into(),
            website: None,
            manager: contact("Sarah Johnson", "sarah.johnson@grocery.com", "(555) 234-5679"),
            timezone: "America/New_York".into(),
            status: OperatingStatus::Active,
            location_type: LocationType::Standard,
            size: 8000,
            employee_count: 25,
            open_date: date(2021, 3, 20),
            tax_rate: 8.25,
            currency: "USD".into(),
            metrics: LocationMetrics {
                daily_revenue: 8500.0,
                monthly_revenue: 255_000.0,
                total_orders: 850,
                active_products: 1800,
                inventory_value: 85_000.0,
                customer_count: 2200,
            },
            pos_system: Some("shopify".into()),
        },
        StoreLocation {
            id: "loc-003".into(),
            name: "Express Pickup Center".into(),
            code: "EP003".into(),
            address: address("789 Business Park Drive", "Brooklyn", "11201"),
            phone: "(555) 345-6789".into(),
            email: "express@grocery.com".into(),
            website: None,
            manager: contact("Mike Davis", "mike.davis@grocery.com", "(555) 345-6790"),
            timezone: "America/New_York".into(),
            status: OperatingStatus::Active,
            location_type: LocationType::Express,
            size: 3000,
            employee_count: 12,
            open_date: date(2022, 6, 1),
            tax_rate: 8.25,
            currency: "USD".into(),
            metrics: LocationMetrics {
                daily_revenue: 5500.0,
                monthly_revenue: 165_000.0,
                total_orders: 650,
                active_products: 800,
                inventory_value: 45_000.0,
                customer_count: 1800,
            },
            pos_system: Some("clover".into()),
        },
    ]
}
