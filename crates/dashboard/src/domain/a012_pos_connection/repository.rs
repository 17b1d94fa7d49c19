use contracts::domain::a006_pos_order::aggregate::PosSystem;
use contracts::domain::a012_pos_connection::aggregate::{ConnectionStatus, PosConnection};
use contracts::shared::list_query::Enumerated;

use crate::shared::seed::{strings, utc};

fn connection(
    system: PosSystem,
    description: &str,
    features: &[&str],
    status: ConnectionStatus,
    api_version: &str,
) -> PosConnection {
    PosConnection {
        id: system.code().into(),
        system,
        description: description.into(),
        features: strings(features),
        status,
        last_sync: None,
        api_version: api_version.into(),
        webhook_url: None,
        api_key: None,
        records_synced: 0,
        errors: Vec::new(),
    }
}

/// Поддерживаемые кассовые системы
pub fn seed() -> Vec<PosConnection> {
    let mut square = connection(
        PosSystem::Square,
        "Popular POS system with comprehensive payment processing",
        &["Payment Processing", "Inventory Management", "Customer Management", "Analytics"],
        ConnectionStatus::Connected,
        "2023-10-18",
    );
    square.last_sync = Some(utc(2024, 1, 17, 10, 30));
    square.webhook_url = Some("https://your-app.com/webhooks/square".into());
    square.api_key = Some("sq0idp-***************".into());
    square.records_synced = 156;

    let mut shopify = connection(
        PosSystem::Shopify,
        "E-commerce platform with integrated POS capabilities",
        &["Multi-channel Sales", "Inventory Sync", "Customer Profiles", "Reporting"],
        ConnectionStatus::Connected,
        "2023-10",
    );
    shopify.last_sync = Some(utc(2024, 1, 17, 9, 45));
    shopify.webhook_url = Some("https://your-app.com/webhooks/shopify".into());
    shopify.api_key = Some("shpat_***************".into());
    shopify.records_synced = 89;

    let toast = connection(
        PosSystem::Toast,
        "Restaurant-focused POS system with advanced features",
        &["Order Management", "Kitchen Display", "Staff Management", "Menu Management"],
        ConnectionStatus::Disconnected,
        "v2",
    );

    let mut clover = connection(
        PosSystem::Clover,
        "Versatile POS system for retail and restaurants",
        &["Payment Processing", "Inventory Tracking", "Employee Management", "Custom Apps"],
        ConnectionStatus::Error,
        "v3",
    );
    clover.last_sync = Some(utc(2024, 1, 16, 14, 20));
    clover.api_key = Some("clv_***************".into());
    clover.errors = strings(&["Authentication failed", "Invalid merchant ID"]);

    vec![square, shopify, toast, clover]
}
