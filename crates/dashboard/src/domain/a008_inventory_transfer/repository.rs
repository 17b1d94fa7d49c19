use chrono::{DateTime, Utc};
use contracts::domain::a008_inventory_transfer::aggregate::{InventoryTransfer, TransferStatus};

use crate::shared::seed::utc;

fn transfer(
    id: &str,
    (from_location, to_location): (&str, &str),
    (product_name, sku, quantity): (&str, &str, u32),
    status: TransferStatus,
    requested_by: &str,
    request_date: DateTime<Utc>,
    notes: Option<&str>,
) -> InventoryTransfer {
    InventoryTransfer {
        id: id.into(),
        from_location: from_location.into(),
        to_location: to_location.into(),
        product_name: product_name.into(),
        sku: sku.into(),
        quantity,
        status,
        requested_by: requested_by.into(),
        request_date,
        completed_date: None,
        notes: notes.map(str::to_string),
    }
}

/// Заявки на перемещение между магазинами
pub fn seed() -> Vec<InventoryTransfer> {
    let mut completed = transfer(
        "transfer-003",
        ("Downtown", "Westside"),
        ("Fresh Milk", "MILK-001", 20),
        TransferStatus::Completed,
        "Sarah Johnson",
        utc(2024, 1, 16, 14, 0),
        None,
    );
    completed.completed_date = Some(utc(2024, 1, 17, 8, 0));

    vec![
        transfer(
            "transfer-001",
            ("Downtown", "Express"),
            ("Organic Bananas", "ORG-BAN-001", 50),
            TransferStatus::Pending,
            "Mike Davis",
            utc(2024, 1, 17, 11, 0),
            Some("Urgent restock needed for weekend rush"),
        ),
        transfer(
            "transfer-002",
            ("Westside", "Downtown"),
            ("Whole Wheat Bread", "WWB-001", 30),
            TransferStatus::InTransit,
            "John Smith",
            utc(2024, 1, 17, 9, 30),
            Some("Balancing overstock"),
        ),
        completed,
    ]
}
