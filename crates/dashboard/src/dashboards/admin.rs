use chrono::{DateTime, Utc};
use contracts::enums::{DashboardTab, UserRole};
use contracts::shared::format::format_currency;
use contracts::system::auth::UserInfo;
use std::path::PathBuf;
use std::sync::Arc;

use super::overview::DashboardOverview;
use super::status;
use crate::domain::a001_product::service::ProductService;
use crate::domain::a003_inventory_item::service::InventoryService;
use crate::domain::a004_order::service::OrderService;
use crate::domain::a005_activity_log::service::ActivityLogService;
use crate::domain::a006_pos_order::service::PosOrderSyncService;
use crate::domain::a007_location_inventory::service::LocationInventoryService;
use crate::domain::a009_notification::service::NotificationService;
use crate::domain::a010_delivery_zone::service::DeliveryZoneService;
use crate::domain::a011_store_location::service::LocationService;
use crate::domain::a012_pos_connection::service::PosIntegrationService;
use crate::domain::a013_route_optimization::service::RouteOptimizationService;
use crate::domain::a014_pos_webhook::service::PosWebhookService;
use crate::shared::sync::SyncPort;

/// Дашборд администратора
pub struct AdminDashboard {
    pub user: UserInfo,
    pub locations: LocationService,
    pub location_inventory: LocationInventoryService,
    pub delivery_zones: DeliveryZoneService,
    pub routes: RouteOptimizationService,
    pub products: ProductService,
    pub inventory: InventoryService,
    pub orders: OrderService,
    pub pos: PosIntegrationService,
    pub pos_orders: PosOrderSyncService,
    pub webhooks: PosWebhookService,
    pub activity: ActivityLogService,
    pub notifications: NotificationService,
    pub export_dir: PathBuf,
}

impl AdminDashboard {
    pub fn new(user: UserInfo, port: Arc<dyn SyncPort>, export_dir: PathBuf) -> Self {
        tracing::info!(user_id = %user.id, "Building admin dashboard");
        Self {
            locations: LocationService::seeded(),
            location_inventory: LocationInventoryService::seeded(port.clone()),
            delivery_zones: DeliveryZoneService::seeded(),
            routes: RouteOptimizationService::seeded(),
            products: ProductService::seeded(),
            inventory: InventoryService::seeded(),
            orders: OrderService::seeded(),
            pos: PosIntegrationService::seeded(port.clone()),
            pos_orders: PosOrderSyncService::seeded(port.clone()),
            webhooks: PosWebhookService::seeded(port),
            activity: ActivityLogService::seeded(&user),
            notifications: NotificationService::seeded(),
            export_dir,
            user,
        }
    }

    pub fn tabs(&self) -> &'static [DashboardTab] {
        DashboardTab::for_role(UserRole::Admin)
    }

    pub fn overview(&self) -> DashboardOverview {
        let inventory = self.inventory.summary();
        DashboardOverview {
            low_stock: inventory.low_stock + inventory.out_of_stock,
            pending_pos_syncs: self.pos_orders.pending_count(),
            unread_notifications: self.notifications.unread_count(),
            pending_transfers: self.location_inventory.transfers().pending_count(),
        }
    }

    /// Строки состояния по вкладкам
    pub fn summary_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        let locations = self.locations.summary();
        let routes = self.routes.summary();
        let mut lines = vec![format!(
            "Locations: {} active of {}, revenue {}",
            locations.active,
            locations.total,
            format_currency(locations.total_revenue)
        )];
        if let Some((zone, load)) = self.delivery_zones.busiest_zone() {
            lines.push(format!("Busiest zone: {} ({:.0}% load)", zone.name, load));
        }
        lines.push(format!(
            "Routes: {} active of {}, {}% time saved",
            routes.active_routes, routes.total_routes, routes.avg_time_savings
        ));
        lines.extend(status::pos_lines(&self.pos, &self.webhooks));
        lines.extend(status::latest_notification(&self.notifications, now));
        lines
    }
}
