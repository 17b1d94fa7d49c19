/// Универсальный модуль для выгрузки отфильтрованных списков в CSV
use chrono::NaiveDate;

/// Ячейка CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvCell {
    /// Значение выводится как есть (коды, даты, числа)
    Plain(String),
    /// Свободный текст: всегда в кавычках
    Text(String),
}

impl CsvCell {
    pub fn plain(value: impl Into<String>) -> Self {
        CsvCell::Plain(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        CsvCell::Text(value.into())
    }

    fn render(&self) -> String {
        match self {
            CsvCell::Plain(value) => value.clone(),
            CsvCell::Text(value) => format!("\"{}\"", value.replace('"', "\"\"")),
        }
    }
}

/// Trait для типов, которые могут быть выгружены в CSV
pub trait CsvExportable {
    /// Заголовки колонок (фиксированный порядок)
    fn headers() -> Vec<&'static str>;

    /// Значения строки в порядке заголовков
    fn to_csv_row(&self) -> Vec<CsvCell>;
}

/// CSV с заголовком, разделитель `,`, строки через `\n`
pub fn render_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(CsvCell::render).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Имя файла выгрузки: `activity-log-2024-01-17.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"))
}
