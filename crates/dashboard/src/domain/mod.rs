//! Экраны дашборда: тестовые данные и операции над ними

pub mod a001_product;
pub mod a002_business_product;
pub mod a003_inventory_item;
pub mod a004_order;
pub mod a005_activity_log;
pub mod a006_pos_order;
pub mod a007_location_inventory;
pub mod a008_inventory_transfer;
pub mod a009_notification;
pub mod a010_delivery_zone;
pub mod a011_store_location;
pub mod a012_pos_connection;
pub mod a013_route_optimization;
pub mod a014_pos_webhook;
