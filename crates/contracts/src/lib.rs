//! Общие типы дашборда: движок списков, статусы остатков и доменные записи

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
