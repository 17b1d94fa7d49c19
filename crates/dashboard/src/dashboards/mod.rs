//! Ролевые дашборды: набор экранов для роли пользователя

pub mod admin;
pub mod business_owner;
pub mod overview;
mod status;

use chrono::{DateTime, Utc};
use contracts::enums::DashboardTab;
use contracts::system::auth::UserInfo;
use std::path::PathBuf;
use std::sync::Arc;

pub use admin::AdminDashboard;
pub use business_owner::BusinessOwnerDashboard;
pub use overview::DashboardOverview;

use crate::domain::a005_activity_log::service::ActivityLogService;
use crate::domain::a009_notification::service::NotificationService;
use crate::shared::config::{resolve_path, Config};
use crate::shared::error::ServiceResult;
use crate::shared::sync::SyncPort;

pub enum Dashboard {
    Admin(Box<AdminDashboard>),
    BusinessOwner(Box<BusinessOwnerDashboard>),
}

impl Dashboard {
    /// Дашборд по роли пользователя
    pub fn for_user(user: &UserInfo, config: &Config, port: Arc<dyn SyncPort>) -> Self {
        let export_dir = resolve_path(&config.export.dir);
        if user.is_admin() {
            Dashboard::Admin(Box::new(AdminDashboard::new(user.clone(), port, export_dir)))
        } else {
            Dashboard::BusinessOwner(Box::new(BusinessOwnerDashboard::new(
                user.clone(),
                port,
                export_dir,
            )))
        }
    }

    pub fn user(&self) -> &UserInfo {
        match self {
            Dashboard::Admin(d) => &d.user,
            Dashboard::BusinessOwner(d) => &d.user,
        }
    }

    pub fn title(&self) -> &'static str {
        self.user().role.dashboard_title()
    }

    pub fn tabs(&self) -> &'static [DashboardTab] {
        match self {
            Dashboard::Admin(d) => d.tabs(),
            Dashboard::BusinessOwner(d) => d.tabs(),
        }
    }

    pub fn overview(&self) -> DashboardOverview {
        match self {
            Dashboard::Admin(d) => d.overview(),
            Dashboard::BusinessOwner(d) => d.overview(),
        }
    }

    pub fn summary_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        match self {
            Dashboard::Admin(d) => d.summary_lines(now),
            Dashboard::BusinessOwner(d) => d.summary_lines(now),
        }
    }

    pub fn activity(&self) -> &ActivityLogService {
        match self {
            Dashboard::Admin(d) => &d.activity,
            Dashboard::BusinessOwner(d) => &d.activity,
        }
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationService {
        match self {
            Dashboard::Admin(d) => &mut d.notifications,
            Dashboard::BusinessOwner(d) => &mut d.notifications,
        }
    }

    fn export_dir(&self) -> &PathBuf {
        match self {
            Dashboard::Admin(d) => &d.export_dir,
            Dashboard::BusinessOwner(d) => &d.export_dir,
        }
    }

    /// Выгрузка журнала действий в каталог экспорта с сегодняшней датой
    pub fn export_activity_log(&self) -> ServiceResult<PathBuf> {
        self.activity()
            .export_to_dir(self.export_dir(), Utc::now().date_naive())
    }
}
