use chrono::{DateTime, Utc};
use contracts::enums::{DashboardTab, UserRole};
use contracts::shared::format::format_currency;
use contracts::system::auth::UserInfo;
use std::path::PathBuf;
use std::sync::Arc;

use super::overview::DashboardOverview;
use super::status;
use crate::domain::a001_product::service::ProductBrowser;
use crate::domain::a002_business_product::service::MyProductService;
use crate::domain::a003_inventory_item::service::InventoryMonitor;
use crate::domain::a004_order::service::OwnerOrders;
use crate::domain::a005_activity_log::service::ActivityLogService;
use crate::domain::a006_pos_order::service::PosOrderSyncService;
use crate::domain::a007_location_inventory::service::LocationInventoryService;
use crate::domain::a009_notification::service::NotificationService;
use crate::domain::a011_store_location::service::LocationService;
use crate::domain::a012_pos_connection::service::PosIntegrationService;
use crate::domain::a014_pos_webhook::service::PosWebhookService;
use crate::shared::sync::SyncPort;

/// Дашборд владельца бизнеса
pub struct BusinessOwnerDashboard {
    pub user: UserInfo,
    pub locations: LocationService,
    pub location_inventory: LocationInventoryService,
    pub product_browser: ProductBrowser,
    pub my_products: MyProductService,
    pub orders: OwnerOrders,
    pub inventory: InventoryMonitor,
    pub pos: PosIntegrationService,
    pub pos_orders: PosOrderSyncService,
    pub webhooks: PosWebhookService,
    pub activity: ActivityLogService,
    pub notifications: NotificationService,
    pub export_dir: PathBuf,
}

impl BusinessOwnerDashboard {
    pub fn new(user: UserInfo, port: Arc<dyn SyncPort>, export_dir: PathBuf) -> Self {
        tracing::info!(user_id = %user.id, "Building business owner dashboard");
        Self {
            locations: LocationService::seeded(),
            location_inventory: LocationInventoryService::seeded(port.clone()),
            product_browser: ProductBrowser::seeded(),
            my_products: MyProductService::seeded(),
            orders: OwnerOrders::seeded(),
            inventory: InventoryMonitor::seeded(),
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
        DashboardTab::for_role(UserRole::BusinessOwner)
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

    pub fn summary_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        let locations = self.locations.summary();
        let products = self.my_products.summary();
        let mut lines = vec![
            format!(
                "Locations: {} active of {}, revenue {}",
                locations.active,
                locations.total,
                format_currency(locations.total_revenue)
            ),
            format!(
                "My products: {} listed, {} in stock, stock value {}",
                products.total,
                products.in_stock,
                format_currency(self.my_products.total_value())
            ),
        ];
        lines.extend(status::pos_lines(&self.pos, &self.webhooks));
        lines.extend(status::latest_notification(&self.notifications, now));
        lines
    }
}
