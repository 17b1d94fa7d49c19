use serde::Serialize;

/// Сводка для шапки дашборда
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    /// Позиции склада с низким остатком или без остатка
    pub low_stock: usize,
    pub pending_pos_syncs: usize,
    pub unread_notifications: usize,
    pub pending_transfers: usize,
}

impl DashboardOverview {
    /// Есть что-то, требующее внимания
    pub fn needs_attention(&self) -> bool {
        self.low_stock + self.pending_pos_syncs + self.pending_transfers > 0
    }
}
