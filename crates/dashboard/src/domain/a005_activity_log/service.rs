use chrono::{NaiveDate, Utc};
use contracts::domain::a005_activity_log::aggregate::{
    ActivityAction, ActivityEntry, ActivityResource,
};
use contracts::shared::export::{export_filename, render_csv};
use contracts::system::auth::UserInfo;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::repository;
use crate::shared::error::ServiceResult;
use crate::shared::list_screen::ListScreen;

/// Журнал действий.
///
/// Администратор видит все записи, владелец бизнеса только свои (по `user_id`).
pub struct ActivityLogService {
    screen: ListScreen<ActivityEntry>,
    viewer_id: Option<String>,
}

impl ActivityLogService {
    pub fn new(entries: Vec<ActivityEntry>, viewer: &UserInfo) -> Self {
        Self {
            screen: ListScreen::new("activity", entries),
            viewer_id: (!viewer.is_admin()).then(|| viewer.id.clone()),
        }
    }

    pub fn seeded(viewer: &UserInfo) -> Self {
        Self::new(repository::seed(), viewer)
    }

    fn in_scope(&self, entry: &ActivityEntry) -> bool {
        match &self.viewer_id {
            Some(id) => &entry.user_id == id,
            None => true,
        }
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_action_filter(&mut self, raw: &str) {
        self.screen.set_filter("action", raw);
    }

    pub fn set_resource_filter(&mut self, raw: &str) {
        self.screen.set_filter("resource", raw);
    }

    /// Фильтр по пользователю доступен только администратору
    pub fn set_user_filter(&mut self, raw: &str) {
        if self.viewer_id.is_none() {
            self.screen.set_filter("user", raw);
        }
    }

    pub fn clear_filters(&mut self) {
        self.screen.clear_filters();
    }

    /// Записи после ограничения по роли и фильтров
    pub fn visible(&self) -> Vec<&ActivityEntry> {
        self.screen
            .visible()
            .into_iter()
            .filter(|entry| self.in_scope(entry))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// Пользователи для списка выбора: id и имя, по первому появлению
    pub fn unique_users(&self) -> Vec<(&str, &str)> {
        let mut users: Vec<(&str, &str)> = Vec::new();
        for entry in self.screen.records().iter().filter(|e| self.in_scope(e)) {
            if !users.iter().any(|(id, _)| *id == entry.user_id) {
                users.push((entry.user_id.as_str(), entry.user_name.as_str()));
            }
        }
        users
    }

    /// Новая запись в начало журнала
    pub fn record(
        &mut self,
        user: &UserInfo,
        action: ActivityAction,
        resource: ActivityResource,
        resource_id: Option<&str>,
        description: &str,
    ) -> ServiceResult<String> {
        let id = Uuid::new_v4().to_string();
        self.screen.prepend(ActivityEntry {
            id: id.clone(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_role: user.role,
            action,
            resource,
            resource_id: resource_id.map(str::to_string),
            description: description.to_string(),
            timestamp: Utc::now(),
            ip_address: "127.0.0.1".into(),
            user_agent: format!("dashboard/{}", env!("CARGO_PKG_VERSION")),
        })?;
        tracing::debug!(entry_id = %id, user_id = %user.id, "Activity recorded");
        Ok(id)
    }

    /// CSV по текущему видимому списку
    pub fn export_csv(&self) -> String {
        let rows: Vec<ActivityEntry> = self.visible().into_iter().cloned().collect();
        render_csv(&rows)
    }

    /// Записать выгрузку в каталог экспорта: `activity-log-YYYY-MM-DD.csv`
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> ServiceResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(export_filename("activity-log", date));
        std::fs::write(&path, self.export_csv())?;
        tracing::info!(path = %path.display(), rows = self.visible_count(), "Activity log exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MOCK_USERS;
    use contracts::enums::UserRole;

    fn admin() -> UserInfo {
        MOCK_USERS[0].clone()
    }

    fn owner(id: &str) -> UserInfo {
        UserInfo {
            id: id.into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role: UserRole::BusinessOwner,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let log = ActivityLogService::seeded(&admin());
        assert_eq!(log.visible_count(), 5);
        assert_eq!(
            log.unique_users(),
            vec![
                ("user-1", "John Doe"),
                ("admin-1", "Admin User"),
                ("user-2", "Jane Smith"),
                ("user-3", "Bob Johnson"),
            ]
        );
    }

    #[test]
    fn test_owner_scoped_to_own_entries() {
        let log = ActivityLogService::seeded(&owner("user-1"));
        let ids: Vec<&str> = log.visible().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        // демо-аккаунт владельца ("2") не имеет записей в журнале
        let log = ActivityLogService::seeded(&MOCK_USERS[1]);
        assert_eq!(log.visible_count(), 0);
    }

    #[test]
    fn test_owner_cannot_filter_by_other_user() {
        let mut log = ActivityLogService::seeded(&owner("user-1"));
        log.set_user_filter("admin-1");
        assert_eq!(log.visible_count(), 1);
    }

    #[test]
    fn test_filters_combine() {
        let mut log = ActivityLogService::seeded(&admin());
        log.set_user_filter("admin-1");
        assert_eq!(log.visible_count(), 2);
        log.set_action_filter("delete");
        assert_eq!(log.visible_count(), 1);
        log.clear_filters();
        log.set_resource_filter("product");
        log.set_search("organic");
        let ids: Vec<&str> = log.visible().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_export_csv_of_filtered_view() {
        let mut log = ActivityLogService::seeded(&admin());
        log.set_action_filter("login");
        assert_eq!(
            log.export_csv(),
            "Timestamp,User,Role,Action,Resource,Description,IP Address\n\
             2024-01-16T14:10:00Z,Bob Johnson,business_owner,login,system,\"User logged into the system\",192.168.1.103"
        );
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLogService::seeded(&admin());
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let path = log.export_to_dir(&dir.path().join("exports"), date).unwrap();
        assert!(path.ends_with("activity-log-2024-01-17.csv"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 6);
    }

    #[test]
    fn test_record_prepends() {
        let mut log = ActivityLogService::seeded(&admin());
        let id = log
            .record(&admin(), ActivityAction::Logout, ActivityResource::System, None, "User logged out")
            .unwrap();
        assert_eq!(log.visible()[0].id, id);
        assert_eq!(log.visible()[0].user_id, "1");
    }
}
