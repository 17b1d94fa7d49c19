use std::collections::BTreeMap;

use contracts::shared::list_query::{
    aggregate_counts, distinct_values, filter_records, Enumerated, FilterState, FilterValue,
    ListRecord,
};

use super::error::{ServiceError, ServiceResult};

/// Состояние одного списочного экрана: коллекция и фильтры.
///
/// Экран единолично владеет коллекцией. Все изменения идут через
/// `apply_update` / `insert` / `remove`, видимый список пересчитывается
/// при каждом чтении.
#[derive(Debug, Clone)]
pub struct ListScreen<R> {
    kind: &'static str,
    records: Vec<R>,
    filter: FilterState,
}

impl<R: ListRecord> ListScreen<R> {
    pub fn new(kind: &'static str, records: Vec<R>) -> Self {
        Self {
            kind,
            records,
            filter: FilterState::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Видимое подмножество в исходном порядке
    pub fn visible(&self) -> Vec<&R> {
        filter_records(&self.records, &self.filter)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    /// Значение из select-контрола; "all" снимает фильтр
    pub fn set_filter(&mut self, field: &str, raw: &str) {
        self.filter.set_filter(field, FilterValue::parse(raw));
    }

    pub fn clear_filters(&mut self) {
        self.filter.reset();
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    pub fn get(&self, id: &str) -> ServiceResult<&R> {
        self.find(id).ok_or_else(|| self.not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Изменение одной записи по id
    pub fn apply_update<T>(&mut self, id: &str, update: impl FnOnce(&mut R) -> T) -> ServiceResult<T> {
        let kind = self.kind;
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(record) => Ok(update(record)),
            None => Err(ServiceError::NotFound {
                kind,
                id: id.to_string(),
            }),
        }
    }

    /// Изменение всех записей
    pub fn update_all(&mut self, mut update: impl FnMut(&mut R)) {
        self.records.iter_mut().for_each(|r| update(r));
    }

    /// Добавить в конец
    pub fn insert(&mut self, record: R) -> ServiceResult<()> {
        self.ensure_unique(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Добавить в начало (новые заявки и уведомления)
    pub fn prepend(&mut self, record: R) -> ServiceResult<()> {
        self.ensure_unique(&record)?;
        self.records.insert(0, record);
        Ok(())
    }

    /// Свободный id на основе `base`: при совпадении добавляется `-2`, `-3`, ...
    pub fn unique_id(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Оставить первые `len` записей (лента с ограниченной длиной)
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }

    /// Удаление по id; `false` если записи не было
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        self.records.len() != before
    }

    /// Счетчики по перечислению на полной коллекции (фильтр не учитывается)
    pub fn counts_by<K: Enumerated>(&self, key: impl Fn(&R) -> K) -> BTreeMap<K, usize> {
        aggregate_counts(&self.records, key)
    }

    pub fn count_where(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(r)).count()
    }

    /// Варианты для списка выбора
    pub fn distinct(&self, field: &str) -> Vec<String> {
        distinct_values(&self.records, field)
    }

    fn ensure_unique(&self, record: &R) -> ServiceResult<()> {
        if self.contains(record.record_id()) {
            return Err(ServiceError::DuplicateId {
                kind: self.kind,
                id: record.record_id().to_string(),
            });
        }
        Ok(())
    }

    fn not_found(&self, id: &str) -> ServiceError {
        ServiceError::NotFound {
            kind: self.kind,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a010_delivery_zone::aggregate::OperatingStatus;
    use contracts::shared::list_query::AttributeValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        status: OperatingStatus,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }

        fn attribute(&self, field: &str) -> AttributeValue<'_> {
            match field {
                "status" => AttributeValue::Single(self.status.code()),
                _ => AttributeValue::Missing,
            }
        }
    }

    fn row(id: &str, name: &str, status: OperatingStatus) -> Row {
        Row {
            id: id.into(),
            name: name.into(),
            status,
        }
    }

    fn screen() -> ListScreen<Row> {
        ListScreen::new(
            "row",
            vec![
                row("1", "Downtown", OperatingStatus::Active),
                row("2", "Westside", OperatingStatus::Inactive),
                row("3", "Express", OperatingStatus::Active),
            ],
        )
    }

    #[test]
    fn test_filters_keep_order_and_counts_ignore_filter() {
        let mut s = screen();
        s.set_filter("status", "active");
        let ids: Vec<&str> = s.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let counts = s.counts_by(|r| r.status);
        assert_eq!(counts[&OperatingStatus::Active], 2);
        assert_eq!(counts[&OperatingStatus::Inactive], 1);
        assert_eq!(counts[&OperatingStatus::Maintenance], 0);

        s.set_filter("status", "All");
        assert_eq!(s.visible_count(), 3);
    }

    #[test]
    fn test_update_changes_visibility() {
        let mut s = screen();
        s.set_filter("status", "inactive");
        assert_eq!(s.visible_count(), 1);
        s.apply_update("1", |r| r.status = OperatingStatus::Inactive).unwrap();
        assert_eq!(s.visible_count(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_error() {
        let mut s = screen();
        let err = s.apply_update("missing", |_| ()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { kind: "row", .. }));
    }

    #[test]
    fn test_insert_rejects_duplicate_and_prepend_goes_first() {
        let mut s = screen();
        assert!(s.insert(row("2", "Dup", OperatingStatus::Active)).is_err());
        s.prepend(row("0", "Harbor", OperatingStatus::Active)).unwrap();
        assert_eq!(s.records()[0].id, "0");
        assert_eq!(s.total_count(), 4);
        s.truncate(2);
        assert_eq!(s.total_count(), 2);
        assert_eq!(s.records()[1].id, "1");
    }

    #[test]
    fn test_unique_id_bumps_suffix() {
        let mut s = screen();
        assert_eq!(s.unique_id("9"), "9");
        assert_eq!(s.unique_id("2"), "2-2");
        s.insert(row("2-2", "Westside Annex", OperatingStatus::Active)).unwrap();
        assert_eq!(s.unique_id("2"), "2-3");
    }

    #[test]
    fn test_remove_and_search() {
        let mut s = screen();
        assert!(s.remove("2"));
        assert!(!s.remove("2"));
        s.set_search("  EXP ");
        assert_eq!(s.visible_count(), 1);
        s.clear_filters();
        assert_eq!(s.visible_count(), 2);
    }
}
