use serde::{Deserialize, Serialize};

use crate::shared::coerce::{parse_decimal_or_zero, parse_stock_input};
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};
use crate::shared::stock::{derive_status, StockStatus, StockThresholds};

// ============================================================================
// Справочники, которые задает администратор
// ============================================================================

pub const CATEGORIES: &[&str] = &[
    "Fruits",
    "Vegetables",
    "Dairy",
    "Meat",
    "Bakery",
    "Beverages",
    "Snacks",
];

pub const BRANDS: &[&str] = &[
    "Fresh Farm",
    "Baker's Choice",
    "Pure Dairy",
    "Farm Fresh",
    "Premium Poultry",
    "Orchard Select",
    "Local Harvest",
    "Organic Plus",
];

pub const WEIGHT_OPTIONS: &[&str] = &[
    "1 lb",
    "2 lb",
    "5 lb",
    "10 lb",
    "1 loaf",
    "2 loaves",
    "500g",
    "1kg",
    "2kg",
    "12 count",
    "18 count",
    "24 count",
    "1 gallon",
    "0.5 gallon",
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

/// Порог "мало на складе" для каталога, где нет собственного минимума
pub const CATALOG_LOW_STOCK_THRESHOLD: u32 = 30;

// ============================================================================
// Status
// ============================================================================

/// Публикация товара в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn toggled(&self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        }
    }
}

impl Enumerated for ProductStatus {
    fn all() -> &'static [Self] {
        &[ProductStatus::Active, ProductStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар общего каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub weights: Vec<String>,
    pub quantity: u32,
    pub image: String,
    pub status: ProductStatus,
}

impl Product {
    /// Создать товар из формы. Новый товар всегда активен.
    pub fn from_form(id: String, form: &ProductForm) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            description: String::new(),
            price: 0.0,
            weights: Vec::new(),
            quantity: 0,
            image: String::new(),
            status: ProductStatus::Active,
        };
        product.apply_form(form);
        product
    }

    /// Перенести значения формы; id и статус не меняются
    pub fn apply_form(&mut self, form: &ProductForm) {
        self.name = form.name.trim().to_string();
        self.brand = form.brand.clone();
        self.category = form.category.clone();
        self.description = form.description.clone();
        self.price = parse_decimal_or_zero(&form.price);
        self.weights = form.weights.clone();
        self.quantity = parse_stock_input(&form.quantity);
        self.image = if form.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            form.image.clone()
        };
    }

    /// Наличие для витрины
    pub fn availability(&self) -> StockStatus {
        derive_status(
            self.quantity,
            &StockThresholds::new(CATALOG_LOW_STOCK_THRESHOLD),
        )
    }
}

impl ListRecord for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "category" => AttributeValue::Single(&self.category),
            "brand" => AttributeValue::Single(&self.brand),
            "weight" => AttributeValue::Many(self.weights.iter().map(String::as_str).collect()),
            "status" => AttributeValue::Single(self.status.code()),
            "availability" => AttributeValue::Single(self.availability().code()),
            _ => AttributeValue::Missing,
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// Значения полей диалога "Добавить / изменить товар" как их ввел пользователь
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub weights: Vec<String>,
    pub quantity: String,
    pub image: String,
}

impl ProductForm {
    /// Заполнить форму для редактирования
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            weights: product.weights.clone(),
            quantity: product.quantity.to_string(),
            image: product.image.clone(),
        }
    }

    /// Чекбокс варианта веса
    pub fn set_weight(&mut self, weight: &str, checked: bool) {
        if checked {
            if !self.weights.iter().any(|w| w == weight) {
                self.weights.push(weight.to_string());
            }
        } else {
            self.weights.retain(|w| w != weight);
        }
    }

    /// Валидация обязательных полей
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: " Greek Yogurt ".into(),
            brand: "Pure Dairy".into(),
            category: "Dairy".into(),
            description: "Thick and creamy".into(),
            price: "5.99".into(),
            weights: vec!["500g".into()],
            quantity: "abc".into(),
            image: String::new(),
        }
    }

    #[test]
    fn test_from_form_coerces_numbers() {
        let product = Product::from_form("p-1".into(), &form());
        assert_eq!(product.name, "Greek Yogurt");
        assert_eq!(product.price, 5.99);
        assert_eq!(product.quantity, 0);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.availability(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_availability_uses_catalog_threshold() {
        let mut product = Product::from_form("p-1".into(), &form());
        product.quantity = CATALOG_LOW_STOCK_THRESHOLD;
        assert_eq!(product.availability(), StockStatus::LowStock);
        product.quantity = CATALOG_LOW_STOCK_THRESHOLD + 1;
        assert_eq!(product.availability(), StockStatus::InStock);
        assert_eq!(product.attribute("availability"), AttributeValue::Single("in_stock"));
    }

    #[test]
    fn test_form_round_trip_keeps_values() {
        let product = Product::from_form("p-1".into(), &form());
        let edit = ProductForm::from_product(&product);
        assert_eq!(edit.price, "5.99");
        assert_eq!(edit.quantity, "0");
    }

    #[test]
    fn test_set_weight_toggles_without_duplicates() {
        let mut f = form();
        f.set_weight("1kg", true);
        f.set_weight("1kg", true);
        assert_eq!(f.weights, vec!["500g", "1kg"]);
        f.set_weight("500g", false);
        assert_eq!(f.weights, vec!["1kg"]);
    }

    #[test]
    fn test_validate() {
        assert!(form().validate().is_ok());
        let mut f = form();
        f.name = "  ".into();
        assert!(f.validate().is_err());
    }
}
