use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::export::{CsvCell, CsvExportable};
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    View,
    Login,
    Logout,
}

impl Enumerated for ActivityAction {
    fn all() -> &'static [Self] {
        &[
            ActivityAction::Create,
            ActivityAction::Update,
            ActivityAction::Delete,
            ActivityAction::View,
            ActivityAction::Login,
            ActivityAction::Logout,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ActivityAction::Create => "create",
            ActivityAction::Update => "update",
            ActivityAction::Delete => "delete",
            ActivityAction::View => "view",
            ActivityAction::Login => "login",
            ActivityAction::Logout => "logout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityResource {
    Product,
    Order,
    User,
    Inventory,
    System,
}

impl Enumerated for ActivityResource {
    fn all() -> &'static [Self] {
        &[
            ActivityResource::Product,
            ActivityResource::Order,
            ActivityResource::User,
            ActivityResource::Inventory,
            ActivityResource::System,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ActivityResource::Product => "product",
            ActivityResource::Order => "order",
            ActivityResource::User => "user",
            ActivityResource::Inventory => "inventory",
            ActivityResource::System => "system",
        }
    }
}

/// Запись журнала действий пользователей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: UserRole,
    pub action: ActivityAction,
    pub resource: ActivityResource,
    pub resource_id: Option<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: String,
}

impl ListRecord for ActivityEntry {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.user_name.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "action" => AttributeValue::Single(self.action.code()),
            "resource" => AttributeValue::Single(self.resource.code()),
            "user" => AttributeValue::Single(&self.user_id),
            "role" => AttributeValue::Single(self.user_role.code()),
            _ => AttributeValue::Missing,
        }
    }
}

impl CsvExportable for ActivityEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Timestamp",
            "User",
            "Role",
            "Action",
            "Resource",
            "Description",
            "IP Address",
        ]
    }

    fn to_csv_row(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::plain(self.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            CsvCell::plain(self.user_name.as_str()),
            CsvCell::plain(self.user_role.code()),
            CsvCell::plain(self.action.code()),
            CsvCell::plain(self.resource.code()),
            CsvCell::text(self.description.as_str()),
            CsvCell::plain(self.ip_address.as_str()),
        ]
    }
}
