use std::collections::BTreeMap;

use super::filter::ListRecord;

/// Небольшое фиксированное перечисление (статусы, роли, типы)
pub trait Enumerated: Sized + Copy + Ord + 'static {
    /// Все значения в порядке объявления
    fn all() -> &'static [Self];

    /// Строковый код значения
    fn code(&self) -> &'static str;

    /// Парсинг из кода
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|value| value.code() == code)
    }
}

/// Количество записей для каждого значения перечисления.
///
/// Считается по полной коллекции; значения без записей присутствуют с нулем.
pub fn aggregate_counts<R, K, F>(records: &[R], key: F) -> BTreeMap<K, usize>
where
    K: Enumerated,
    F: Fn(&R) -> K,
{
    let mut counts: BTreeMap<K, usize> = K::all().iter().map(|value| (*value, 0)).collect();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Уникальные значения атрибута в порядке первого появления (для списков выбора)
pub fn distinct_values<R: ListRecord>(records: &[R], field: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        for value in record.attribute(field).values() {
            if !seen.iter().any(|known| known == value) {
                seen.push(value.to_string());
            }
        }
    }
    seen
}
