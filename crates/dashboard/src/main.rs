use contracts::system::auth::LoginRequest;
use std::sync::Arc;

use dashboard::dashboards::Dashboard;
use dashboard::shared::config::{self, resolve_path};
use dashboard::shared::sync::SimulatedSyncPort;
use dashboard::system::auth::{AuthService, FileSessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    dashboard::system::tracing::initialize(&config.logging)?;

    let store = Arc::new(FileSessionStore::new(resolve_path(&config.auth.session_file)));
    let mut auth = AuthService::from_config(store, &config.auth);

    // Сохраненная сессия, иначе вход по переменным окружения
    let user = match auth.restore()? {
        Some(user) => user,
        None => {
            let request = LoginRequest {
                email: std::env::var("DASHBOARD_EMAIL")
                    .unwrap_or_else(|_| "admin@grocery.com".into()),
                password: std::env::var("DASHBOARD_PASSWORD")
                    .unwrap_or_else(|_| config.auth.password.clone()),
            };
            auth.login(&request)?
        }
    };
    tracing::info!(user_id = %user.id, role = ?user.role, "Signed in as {}", user.name);

    let port = Arc::new(SimulatedSyncPort::from_config(&config.sync));
    let mut dashboard = Dashboard::for_user(&user, &config, port);

    let tabs: Vec<&str> = dashboard.tabs().iter().map(|t| t.title()).collect();
    tracing::info!(title = dashboard.title(), tabs = %tabs.join(", "), "Dashboard ready");

    if let Some(id) = dashboard.notifications_mut().poll_now()? {
        tracing::info!(notification_id = %id, "New order notification");
    }

    let overview = dashboard.overview();
    tracing::info!(
        low_stock = overview.low_stock,
        pending_pos_syncs = overview.pending_pos_syncs,
        unread_notifications = overview.unread_notifications,
        pending_transfers = overview.pending_transfers,
        "Overview"
    );
    println!("{}", serde_json::to_string_pretty(&overview)?);
    for line in dashboard.summary_lines(chrono::Utc::now()) {
        println!("{}", line);
    }

    Ok(())
}
