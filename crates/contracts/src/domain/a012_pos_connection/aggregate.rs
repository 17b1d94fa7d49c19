use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a006_pos_order::aggregate::PosSystem;
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Error,
    Syncing,
}

impl Enumerated for ConnectionStatus {
    fn all() -> &'static [Self] {
        &[
            ConnectionStatus::Connected,
            ConnectionStatus::Disconnected,
            ConnectionStatus::Error,
            ConnectionStatus::Syncing,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Error => "error",
            ConnectionStatus::Syncing => "syncing",
        }
    }
}

/// Подключение кассовой системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosConnection {
    pub id: String,
    pub system: PosSystem,
    pub description: String,
    pub features: Vec<String>,
    pub status: ConnectionStatus,
    /// `None`, если синхронизации еще не было
    pub last_sync: Option<DateTime<Utc>>,
    pub api_version: String,
    pub webhook_url: Option<String>,
    /// Ключ API в замаскированном виде
    pub api_key: Option<String>,
    pub records_synced: u32,
    pub errors: Vec<String>,
}

impl PosConnection {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn mark_connected(&mut self, at: DateTime<Utc>) {
        self.status = ConnectionStatus::Connected;
        self.last_sync = Some(at);
        self.errors.clear();
    }

    /// Отключение сбрасывает учетные данные
    pub fn disconnect(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.api_key = None;
    }

    pub fn mark_synced(&mut self, at: DateTime<Utc>, records: u32) {
        self.last_sync = Some(at);
        self.records_synced = records;
        self.errors.clear();
    }

    pub fn mark_error(&mut self, error: impl Into<String>) {
        self.status = ConnectionStatus::Error;
        self.errors.push(error.into());
    }
}

impl ListRecord for PosConnection {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.system.display_name(), self.description.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            "system" => AttributeValue::Single(self.system.code()),
            _ => AttributeValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn connection() -> PosConnection {
        PosConnection {
            id: "clover".into(),
            system: PosSystem::Clover,
            description: "Versatile POS system for retail and restaurants".into(),
            features: vec!["Payment Processing".into()],
            status: ConnectionStatus::Error,
            last_sync: None,
            api_version: "v3".into(),
            webhook_url: None,
            api_key: Some("clv_***".into()),
            records_synced: 0,
            errors: vec!["Authentication failed".into()],
        }
    }

    #[test]
    fn test_connect_clears_errors() {
        let mut c = connection();
        let at = Utc.with_ymd_and_hms(2024, 1, 17, 12, 0, 0).unwrap();
        c.mark_connected(at);
        assert!(c.is_connected());
        assert!(c.errors.is_empty());
        assert_eq!(c.last_sync, Some(at));
    }

    #[test]
    fn test_disconnect_drops_credentials() {
        let mut c = connection();
        c.disconnect();
        assert_eq!(c.status, ConnectionStatus::Disconnected);
        assert!(c.api_key.is_none());
        assert_eq!(c.attribute("status"), AttributeValue::Single("disconnected"));
    }

    #[test]
    fn test_search_by_display_name() {
        let c = connection();
        assert!(c.search_fields().contains(&"Clover POS"));
    }
}
