use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение-заглушка "все" для категориальных фильтров
pub const ALL: &str = "all";

static ALL_VALUE: FilterValue = FilterValue::All;

/// Выбранное значение одного категориального фильтра
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    /// Фильтр не активен
    #[default]
    All,
    /// Точное совпадение (с учетом регистра)
    Value(String),
}

impl FilterValue {
    /// Разбор значения из select-контрола. Пробелы по краям отбрасываются;
    /// пустая строка и "all"/"All" означают отсутствие фильтра.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            FilterValue::All
        } else {
            FilterValue::Value(trimmed.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Value(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Value(value) => value,
        }
    }

    /// Проверяет значение атрибута записи
    pub fn accepts(&self, attribute: &AttributeValue<'_>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Value(expected) => attribute.contains(expected),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(raw: &str) -> Self {
        FilterValue::parse(raw)
    }
}

impl From<String> for FilterValue {
    fn from(raw: String) -> Self {
        FilterValue::parse(&raw)
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        value.as_str().to_string()
    }
}

/// Значение атрибута записи для сравнения с фильтром
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    Single(&'a str),
    /// Многозначный атрибут (например, варианты веса товара)
    Many(Vec<&'a str>),
    /// У записи нет такого атрибута
    Missing,
}

impl AttributeValue<'_> {
    pub fn contains(&self, expected: &str) -> bool {
        match self {
            AttributeValue::Single(value) => *value == expected,
            AttributeValue::Many(values) => values.iter().any(|value| *value == expected),
            AttributeValue::Missing => false,
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            AttributeValue::Single(value) => vec![*value],
            AttributeValue::Many(values) => values.clone(),
            AttributeValue::Missing => Vec::new(),
        }
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(value: &'a str) -> Self {
        AttributeValue::Single(value)
    }
}

impl<'a> From<Option<&'a str>> for AttributeValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(AttributeValue::Missing, AttributeValue::Single)
    }
}

/// Запись списка, поддерживающая поиск и категориальные фильтры
pub trait ListRecord {
    /// Уникальный идентификатор записи внутри коллекции
    fn record_id(&self) -> &str;

    /// Текстовые поля, по которым идет поиск (OR между полями)
    fn search_fields(&self) -> Vec<&str>;

    /// Значение категориального атрибута по его ключу
    fn attribute(&self, field: &str) -> AttributeValue<'_>;
}

/// Состояние поиска и фильтров одного экрана
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub filters: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set_filter(field, value);
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.filters.insert(field.into(), value.into());
    }

    /// Текущее значение фильтра; для незаданного поля "all"
    pub fn filter_value(&self, field: &str) -> &FilterValue {
        self.filters.get(field).unwrap_or(&ALL_VALUE)
    }

    /// Активные фильтры в виде пар (поле, значение)
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, value)| value.is_active())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Пустой поиск и все фильтры в "all"
    pub fn is_default(&self) -> bool {
        self.search_needle().is_none() && self.filters.values().all(|value| !value.is_active())
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.filters.clear();
    }

    /// Строка поиска в нижнем регистре, `None` если поиск пуст
    pub fn search_needle(&self) -> Option<String> {
        let needle = self.search.trim();
        if needle.is_empty() {
            None
        } else {
            Some(needle.to_lowercase())
        }
    }
}

fn matches_needle<R: ListRecord + ?Sized>(record: &R, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle)),
    }
}

fn matches_with_needle<R: ListRecord + ?Sized>(
    record: &R,
    state: &FilterState,
    needle: Option<&str>,
) -> bool {
    matches_needle(record, needle)
        && state
            .filters
            .iter()
            .all(|(field, value)| value.accepts(&record.attribute(field)))
}

/// Проверяет одну запись против всех активных предикатов
pub fn matches<R: ListRecord + ?Sized>(record: &R, state: &FilterState) -> bool {
    let needle = state.search_needle();
    matches_with_needle(record, state, needle.as_deref())
}

/// Видимое подмножество коллекции. Порядок исходной коллекции сохраняется.
pub fn filter_records<'a, R: ListRecord>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let needle = state.search_needle();
    records
        .iter()
        .filter(|record| matches_with_needle(*record, state, needle.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: &'static str,
        weights: Vec<&'static str>,
    }

    impl ListRecord for Item {
        fn record_id(&self) -> &str {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.description]
        }

        fn attribute(&self, field: &str) -> AttributeValue<'_> {
            match field {
                "category" => AttributeValue::Single(self.category),
                "weight" => AttributeValue::Many(self.weights.clone()),
                _ => AttributeValue::Missing,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: "1",
                name: "Organic Bananas",
                description: "Fresh organic bananas",
                category: "Fruits",
                weights: vec!["1 lb", "2 lb"],
            },
            Item {
                id: "2",
                name: "Whole Wheat Bread",
                description: "Freshly baked",
                category: "Bakery",
                weights: vec!["1 loaf"],
            },
            Item {
                id: "3",
                name: "Organic Apples",
                description: "Crisp apples, great for bread pudding",
                category: "Fruits",
                weights: vec!["1 lb", "5 lb"],
            },
        ]
    }

    fn ids(records: &[&Item]) -> Vec<&'static str> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_state_returns_everything_in_order() {
        let data = items();
        let state = FilterState::default();
        assert!(state.is_default());
        assert_eq!(ids(&filter_records(&data, &state)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_explicit_all_values_are_still_default() {
        let data = items();
        let state = FilterState::new()
            .with_filter("category", "all")
            .with_filter("weight", "All");
        assert!(state.is_default());
        assert_eq!(filter_records(&data, &state).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ors_fields() {
        let data = items();
        let state = FilterState::new().with_search("BREAD");
        // "2" по названию, "3" по описанию
        assert_eq!(ids(&filter_records(&data, &state)), vec!["2", "3"]);
    }

    #[test]
    fn test_search_returns_only_bread_record() {
        let data: Vec<Item> = items().into_iter().take(2).collect();
        let state = FilterState::new().with_search("BREAD");
        let found = filter_records(&data, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Whole Wheat Bread");
    }

    #[test]
    fn test_padded_select_value_is_trimmed() {
        assert_eq!(FilterValue::parse(" Bakery "), FilterValue::Value("Bakery".into()));
        assert_eq!(FilterValue::parse("  all "), FilterValue::All);
        let data = items();
        let state = FilterState::new().with_filter("category", " Bakery ");
        assert_eq!(ids(&filter_records(&data, &state)), vec!["2"]);
    }

    #[test]
    fn test_search_and_category_are_conjunctive() {
        let data = items();
        let state = FilterState::new()
            .with_search("bread")
            .with_filter("category", "Bakery");
        assert_eq!(ids(&filter_records(&data, &state)), vec!["2"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let data = items();
        let state = FilterState::new().with_filter("category", "fruits");
        assert!(filter_records(&data, &state).is_empty());
    }

    #[test]
    fn test_many_valued_attribute_uses_membership() {
        let data = items();
        let state = FilterState::new().with_filter("weight", "5 lb");
        assert_eq!(ids(&filter_records(&data, &state)), vec!["3"]);
    }

    #[test]
    fn test_unknown_field_never_matches_active_filter() {
        let data = items();
        let state = FilterState::new().with_filter("colour", "red");
        assert!(filter_records(&data, &state).is_empty());
    }

    #[test]
    fn test_whitespace_search_is_empty() {
        let data = items();
        let state = FilterState::new().with_search("   ");
        assert_eq!(filter_records(&data, &state).len(), 3);
    }

    #[test]
    fn test_filtering_is_idempotent_and_pure() {
        let data = items();
        let before = data.clone();
        let state = FilterState::new().with_search("organic");
        let first = filter_records(&data, &state);
        let second = filter_records(&data, &state);
        assert_eq!(first, second);
        assert_eq!(data, before);
    }

    #[test]
    fn test_result_matches_per_record_predicate() {
        let data = items();
        let states = [
            FilterState::new().with_search("organic"),
            FilterState::new().with_filter("category", "Fruits"),
            FilterState::new().with_search("fresh").with_filter("weight", "1 lb"),
            FilterState::new().with_search("zzz"),
        ];
        for state in &states {
            let visible = ids(&filter_records(&data, state));
            let expected: Vec<_> = data
                .iter()
                .filter(|item| matches(*item, state))
                .map(|item| item.id)
                .collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_filter_value_serializes_as_plain_string() {
        let state = FilterState::new().with_filter("category", "Dairy");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"search":"","filters":{"category":"Dairy"}}"#);
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = FilterState::new()
            .with_search("milk")
            .with_filter("category", "Dairy");
        assert_eq!(state.active_filters().collect::<Vec<_>>(), vec![("category", "Dairy")]);
        state.reset();
        assert!(state.is_default());
        assert_eq!(state.filter_value("category"), &FilterValue::All);
    }
}
