//! Движок списков: поиск, категориальные фильтры и сводные счетчики
//!
//! Каждый экран держит полную коллекцию записей и отдельное состояние фильтров.
//! Видимый список и счетчики пересчитываются из них целиком на каждый запрос.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate_counts, distinct_values, Enumerated};
pub use filter::{
    filter_records, matches, AttributeValue, FilterState, FilterValue,
    ListRecord, ALL,
};
