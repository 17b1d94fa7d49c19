pub mod coerce;
pub mod export;
pub mod format;
pub mod list_query;
pub mod stock;
