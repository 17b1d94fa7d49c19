use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::{ProductForm, ProductStatus, PLACEHOLDER_IMAGE};
use crate::shared::coerce::{parse_decimal_or_zero, parse_stock_input};
use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

/// Товары администратора, на которые владелец может сослаться при добавлении своего
pub const ADMIN_REFERENCE_PRODUCTS: &[(&str, &str)] = &[
    ("admin-1", "Organic Bananas"),
    ("admin-2", "Whole Wheat Bread"),
    ("admin-3", "Organic Milk"),
    ("admin-4", "Fresh Eggs"),
    ("admin-5", "Chicken Breast"),
    ("admin-6", "Organic Apples"),
];

/// Поиск по справочнику товаров администратора (подстрока без учета регистра)
pub fn search_reference_products(term: &str) -> Vec<(&'static str, &'static str)> {
    let needle = term.trim().to_lowercase();
    ADMIN_REFERENCE_PRODUCTS
        .iter()
        .copied()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .collect()
}

/// Товар в каталоге конкретного владельца бизнеса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProduct {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub weights: Vec<String>,
    pub quantity: u32,
    pub image: String,
    /// Переключатель продавца "в продаже"
    pub available: bool,
    pub status: ProductStatus,
    pub created_at: NaiveDate,
}

impl BusinessProduct {
    pub fn from_form(id: String, form: &BusinessProductForm, created_at: NaiveDate) -> Self {
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
            available: false,
            status: ProductStatus::Active,
            created_at,
        };
        product.apply_form(form);
        product
    }

    /// Перенести значения формы. Дата создания сохраняется.
    pub fn apply_form(&mut self, form: &BusinessProductForm) {
        let base = &form.product;
        self.name = base.name.trim().to_string();
        self.brand = base.brand.clone();
        self.category = base.category.clone();
        self.description = base.description.clone();
        self.price = parse_decimal_or_zero(&base.price);
        self.weights = base.weights.clone();
        self.quantity = parse_stock_input(&base.quantity);
        self.image = if base.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            base.image.clone()
        };
        self.available = form.in_stock && self.quantity > 0;
    }

    /// В наличии: продавец включил товар и количество больше нуля
    pub fn in_stock(&self) -> bool {
        self.available && self.quantity > 0
    }

    /// Переключатель наличия. Выключение обнуляет количество.
    pub fn toggle_stock(&mut self) {
        self.available = !self.available;
        if !self.available {
            self.quantity = 0;
        }
    }

    /// Новое количество; наличие следует за ним
    pub fn update_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.available = quantity > 0;
    }

    fn stock_code(&self) -> &'static str {
        if self.in_stock() {
            "in_stock"
        } else {
            "out_of_stock"
        }
    }
}

impl ListRecord for BusinessProduct {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.brand.as_str(),
            self.description.as_str(),
        ]
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "category" => AttributeValue::Single(&self.category),
            "brand" => AttributeValue::Single(&self.brand),
            "status" => AttributeValue::Single(self.status.code()),
            "stock" => AttributeValue::Single(self.stock_code()),
            _ => AttributeValue::Missing,
        }
    }
}

/// Форма товара владельца: общие поля + флаг наличия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProductForm {
    pub product: ProductForm,
    pub in_stock: bool,
}

impl Default for BusinessProductForm {
    fn default() -> Self {
        Self {
            product: ProductForm::default(),
            in_stock: true,
        }
    }
}

impl BusinessProductForm {
    pub fn from_product(product: &BusinessProduct) -> Self {
        Self {
            product: ProductForm {
                name: product.name.clone(),
                brand: product.brand.clone(),
                category: product.category.clone(),
                description: product.description.clone(),
                price: product.price.to_string(),
                weights: product.weights.clone(),
                quantity: product.quantity.to_string(),
                image: product.image.clone(),
            },
            in_stock: product.available,
        }
    }

    /// Выбор товара из справочника администратора подставляет его название
    pub fn select_reference(&mut self, name: &str) -> bool {
        match ADMIN_REFERENCE_PRODUCTS.iter().find(|(_, n)| *n == name) {
            Some((_, n)) => {
                self.product.name = n.to_string();
                self.product.image = PLACEHOLDER_IMAGE.to_string();
                true
            }
            None => false,
        }
    }
}
