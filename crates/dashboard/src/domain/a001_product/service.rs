use contracts::domain::a001_product::aggregate::{
    Product, ProductForm, ProductStatus, BRANDS, CATEGORIES, WEIGHT_OPTIONS,
};
use uuid::Uuid;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;

/// Управление каталогом (администратор)
pub struct ProductService {
    screen: ListScreen<Product>,
}

impl ProductService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            screen: ListScreen::new("product", products),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<Product> {
        &self.screen
    }

    pub fn category_options(&self) -> &'static [&'static str] {
        CATEGORIES
    }

    pub fn brand_options(&self) -> &'static [&'static str] {
        BRANDS
    }

    pub fn weight_options(&self) -> &'static [&'static str] {
        WEIGHT_OPTIONS
    }

    /// Новый товар получает uuid v4 и статус active
    pub fn add(&mut self, form: &ProductForm) -> ServiceResult<String> {
        form.validate().map_err(ServiceError::Validation)?;
        let product = Product::from_form(Uuid::new_v4().to_string(), form);
        let id = product.id.clone();
        tracing::info!(product_id = %id, name = %product.name, "Product added");
        self.screen.insert(product)?;
        Ok(id)
    }

    /// Редактирование сохраняет id и статус
    pub fn edit(&mut self, id: &str, form: &ProductForm) -> ServiceResult<()> {
        form.validate().map_err(ServiceError::Validation)?;
        self.screen.apply_update(id, |product| product.apply_form(form))?;
        tracing::info!(product_id = %id, "Product updated");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.screen.remove(id);
        if removed {
            tracing::info!(product_id = %id, "Product deleted");
        }
        removed
    }

    pub fn toggle_status(&mut self, id: &str) -> ServiceResult<ProductStatus> {
        let status = self.screen.apply_update(id, |product| {
            product.status = product.status.toggled();
            product.status
        })?;
        tracing::info!(product_id = %id, status = ?status, "Product status toggled");
        Ok(status)
    }

    /// Форма редактирования, заполненная значениями товара
    pub fn edit_form(&self, id: &str) -> ServiceResult<ProductForm> {
        self.screen.get(id).map(ProductForm::from_product)
    }
}

/// Витрина товаров для владельца бизнеса
pub struct ProductBrowser {
    screen: ListScreen<Product>,
}

impl ProductBrowser {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            screen: ListScreen::new("product", products),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::browser_seed())
    }

    pub fn screen(&self) -> &ListScreen<Product> {
        &self.screen
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_category(&mut self, raw: &str) {
        self.screen.set_filter("category", raw);
    }

    pub fn set_brand(&mut self, raw: &str) {
        self.screen.set_filter("brand", raw);
    }

    pub fn set_weight(&mut self, raw: &str) {
        self.screen.set_filter("weight", raw);
    }

    /// Все фасовки каталога без повторов
    pub fn all_weights(&self) -> Vec<String> {
        self.screen.distinct("weight")
    }

    pub fn details(&self, id: &str) -> ServiceResult<&Product> {
        self.screen.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::stock::StockStatus;

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            brand: "Local Harvest".into(),
            category: "Vegetables".into(),
            description: "Crunchy carrots".into(),
            price: "1.99".into(),
            weights: vec!["1 lb".into()],
            quantity: "-4".into(),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_assigns_uuid_and_coerces() {
        let mut service = ProductService::seeded();
        let id = service.add(&form("Carrots")).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        let product = service.screen().get(&id).unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.price, 1.99);
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(service.screen().total_count(), 3);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut service = ProductService::seeded();
        let err = service.add(&form("  ")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(service.screen().total_count(), 2);
    }

    #[test]
    fn test_edit_keeps_status() {
        let mut service = ProductService::seeded();
        service.toggle_status("1").unwrap();
        let mut edit = service.edit_form("1").unwrap();
        edit.price = "3.19".into();
        service.edit("1", &edit).unwrap();
        let product = service.screen().get("1").unwrap();
        assert_eq!(product.price, 3.19);
        assert_eq!(product.status, ProductStatus::Inactive);
        assert_eq!(product.quantity, 150);
    }

    #[test]
    fn test_delete_and_toggle_missing() {
        let mut service = ProductService::seeded();
        assert!(service.delete("2"));
        assert!(!service.delete("2"));
        assert!(matches!(
            service.toggle_status("2"),
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_browser_filters_combine() {
        let mut browser = ProductBrowser::seeded();
        browser.set_category("Dairy");
        assert_eq!(browser.screen().visible_count(), 2);
        browser.set_weight("12 count");
        let names: Vec<&str> = browser.screen().visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fresh Eggs"]);

        browser.set_category("All");
        browser.set_weight("all");
        browser.set_search("ORGANIC");
        assert_eq!(browser.screen().visible_count(), 4);
        browser.set_brand("Orchard Select");
        assert_eq!(browser.screen().visible_count(), 1);
    }

    #[test]
    fn test_browser_weights_and_availability() {
        let browser = ProductBrowser::seeded();
        assert_eq!(
            browser.all_weights(),
            vec![
                "1 lb", "2 lb", "5 lb", "1 loaf", "2 loaves", "1 gallon", "0.5 gallon",
                "12 count", "18 count", "24 count", "3 lb",
            ]
        );
        assert_eq!(browser.details("2").unwrap().availability(), StockStatus::LowStock);
        assert_eq!(browser.details("3").unwrap().availability(), StockStatus::OutOfStock);
    }
}
