use serde::{Deserialize, Serialize};

use super::UserRole;
use crate::shared::list_query::Enumerated;

/// Вкладки ролевых дашбордов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    Analytics,
    Locations,
    LocationAnalytics,
    MultiInventory,
    DeliveryZones,
    RouteOptimization,
    DeliveryAnalytics,
    Products,
    MyProducts,
    Inventory,
    Orders,
    Pos,
    Activity,
}

impl DashboardTab {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Locations => "Locations",
            DashboardTab::LocationAnalytics => "Location Analytics",
            DashboardTab::MultiInventory => "Multi-Inventory",
            DashboardTab::DeliveryZones => "Delivery Zones",
            DashboardTab::RouteOptimization => "Route Optimization",
            DashboardTab::DeliveryAnalytics => "Delivery Analytics",
            DashboardTab::Products => "Products",
            DashboardTab::MyProducts => "My Products",
            DashboardTab::Inventory => "Inventory",
            DashboardTab::Orders => "Orders",
            DashboardTab::Pos => "POS",
            DashboardTab::Activity => "Activity",
        }
    }

    /// Вкладки роли в порядке отображения; первая открывается по умолчанию
    pub fn for_role(role: UserRole) -> &'static [DashboardTab] {
        match role {
            UserRole::Admin => &[
                DashboardTab::Analytics,
                DashboardTab::Locations,
                DashboardTab::LocationAnalytics,
                DashboardTab::MultiInventory,
                DashboardTab::DeliveryZones,
                DashboardTab::RouteOptimization,
                DashboardTab::DeliveryAnalytics,
                DashboardTab::Products,
                DashboardTab::Inventory,
                DashboardTab::Orders,
                DashboardTab::Pos,
                DashboardTab::Activity,
            ],
            UserRole::BusinessOwner => &[
                DashboardTab::Analytics,
                DashboardTab::Locations,
                DashboardTab::LocationAnalytics,
                DashboardTab::MultiInventory,
                DashboardTab::Products,
                DashboardTab::MyProducts,
                DashboardTab::Orders,
                DashboardTab::Inventory,
                DashboardTab::Pos,
                DashboardTab::Activity,
            ],
        }
    }
}

impl Enumerated for DashboardTab {
    fn all() -> &'static [Self] {
        &[
            DashboardTab::Analytics,
            DashboardTab::Locations,
            DashboardTab::LocationAnalytics,
            DashboardTab::MultiInventory,
            DashboardTab::DeliveryZones,
            DashboardTab::RouteOptimization,
            DashboardTab::DeliveryAnalytics,
            DashboardTab::Products,
            DashboardTab::MyProducts,
            DashboardTab::Inventory,
            DashboardTab::Orders,
            DashboardTab::Pos,
            DashboardTab::Activity,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            DashboardTab::Analytics => "analytics",
            DashboardTab::Locations => "locations",
            DashboardTab::LocationAnalytics => "location-analytics",
            DashboardTab::MultiInventory => "multi-inventory",
            DashboardTab::DeliveryZones => "delivery-zones",
            DashboardTab::RouteOptimization => "route-optimization",
            DashboardTab::DeliveryAnalytics => "delivery-analytics",
            DashboardTab::Products => "products",
            DashboardTab::MyProducts => "my-products",
            DashboardTab::Inventory => "inventory",
            DashboardTab::Orders => "orders",
            DashboardTab::Pos => "pos",
            DashboardTab::Activity => "activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_open_on_analytics() {
        for role in UserRole::all() {
            assert_eq!(DashboardTab::for_role(*role)[0], DashboardTab::Analytics);
        }
    }

    #[test]
    fn test_owner_has_no_delivery_tabs() {
        let tabs = DashboardTab::for_role(UserRole::BusinessOwner);
        assert!(tabs.contains(&DashboardTab::MyProducts));
        assert!(!tabs.contains(&DashboardTab::DeliveryZones));
    }

    #[test]
    fn test_codes_round_trip_through_serde() {
        for tab in DashboardTab::all() {
            let json = serde_json::to_string(tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.code()));
        }
    }
}
