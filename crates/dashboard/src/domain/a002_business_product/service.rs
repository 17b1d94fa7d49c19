use chrono::Utc;
use contracts::domain::a001_product::aggregate::ProductStatus;
use contracts::domain::a002_business_product::aggregate::{
    search_reference_products, BusinessProduct, BusinessProductForm,
};
use contracts::shared::coerce::parse_stock_input;
use uuid::Uuid;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::list_screen::ListScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyProductsSummary {
    pub total: usize,
    pub active: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Собственный каталог владельца бизнеса
pub struct MyProductService {
    screen: ListScreen<BusinessProduct>,
}

impl MyProductService {
    pub fn new(products: Vec<BusinessProduct>) -> Self {
        Self {
            screen: ListScreen::new("business product", products),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<BusinessProduct> {
        &self.screen
    }

    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    /// Подсказки из каталога администратора
    pub fn search_reference(&self, term: &str) -> Vec<&'static str> {
        search_reference_products(term)
            .into_iter()
            .map(|(_, name)| name)
            .collect()
    }

    pub fn add(&mut self, form: &BusinessProductForm) -> ServiceResult<String> {
        form.product.validate().map_err(ServiceError::Validation)?;
        let id = format!("bp-{}", Uuid::new_v4());
        let product = BusinessProduct::from_form(id.clone(), form, Utc::now().date_naive());
        tracing::info!(product_id = %id, name = %product.name, in_stock = product.in_stock(), "Business product added");
        self.screen.insert(product)?;
        Ok(id)
    }

    pub fn edit(&mut self, id: &str, form: &BusinessProductForm) -> ServiceResult<()> {
        form.product.validate().map_err(ServiceError::Validation)?;
        self.screen.apply_update(id, |product| product.apply_form(form))?;
        tracing::info!(product_id = %id, "Business product updated");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.screen.remove(id);
        if removed {
            tracing::info!(product_id = %id, "Business product deleted");
        }
        removed
    }

    /// Возвращает новое значение "в наличии"
    pub fn toggle_stock(&mut self, id: &str) -> ServiceResult<bool> {
        let in_stock = self.screen.apply_update(id, |product| {
            product.toggle_stock();
            product.in_stock()
        })?;
        tracing::info!(product_id = %id, in_stock, "Business product stock toggled");
        Ok(in_stock)
    }

    pub fn update_quantity(&mut self, id: &str, raw: &str) -> ServiceResult<u32> {
        let quantity = parse_stock_input(raw);
        self.screen
            .apply_update(id, |product| product.update_quantity(quantity))?;
        tracing::info!(product_id = %id, quantity, "Business product quantity updated");
        Ok(quantity)
    }

    /// Стоимость остатков: цена * количество
    pub fn total_value(&self) -> f64 {
        self.screen
            .records()
            .iter()
            .map(|p| p.price * f64::from(p.quantity))
            .sum()
    }

    pub fn summary(&self) -> MyProductsSummary {
        let in_stock = self.screen.count_where(BusinessProduct::in_stock);
        MyProductsSummary {
            total: self.screen.total_count(),
            active: self
                .screen
                .count_where(|p| p.status == ProductStatus::Active),
            in_stock,
            out_of_stock: self.screen.total_count() - in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, in_stock: bool) -> BusinessProductForm {
        let mut form = BusinessProductForm {
            in_stock,
            ..Default::default()
        };
        form.product.name = name.into();
        form.product.category = "Fruits".into();
        form.product.price = "2.50".into();
        form.product.quantity = quantity.into();
        form
    }

    #[test]
    fn test_seed_summary() {
        let service = MyProductService::seeded();
        assert_eq!(
            service.summary(),
            MyProductsSummary { total: 2, active: 2, in_stock: 1, out_of_stock: 1 }
        );
    }

    #[test]
    fn test_total_value() {
        let mut service = MyProductService::seeded();
        assert!((service.total_value() - 174.5).abs() < 1e-9);
        service.add(&form("Organic Apples", "12", true)).unwrap();
        assert!((service.total_value() - 204.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_with_prefixed_id() {
        let mut service = MyProductService::seeded();
        let id = service.add(&form("Organic Apples", "12", true)).unwrap();
        assert!(id.starts_with("bp-"));
        assert!(service.screen().get(&id).unwrap().in_stock());

        let id = service.add(&form("Organic Milk", "0", true)).unwrap();
        assert!(!service.screen().get(&id).unwrap().in_stock());
        assert_eq!(service.summary().out_of_stock, 2);
    }

    #[test]
    fn test_toggle_stock_off_zeroes_quantity() {
        let mut service = MyProductService::seeded();
        assert!(!service.toggle_stock("bp-1").unwrap());
        assert_eq!(service.screen().get("bp-1").unwrap().quantity, 0);
        // включение без количества не дает "в наличии"
        assert!(!service.toggle_stock("bp-1").unwrap());
    }

    #[test]
    fn test_update_quantity_drives_availability() {
        let mut service = MyProductService::seeded();
        assert_eq!(service.update_quantity("bp-2", "24").unwrap(), 24);
        assert!(service.screen().get("bp-2").unwrap().in_stock());
        assert_eq!(service.update_quantity("bp-2", "-1").unwrap(), 0);
        assert!(!service.screen().get("bp-2").unwrap().in_stock());
        assert!(service.update_quantity("bp-9", "1").is_err());
    }

    #[test]
    fn test_edit_and_reference_search() {
        let mut service = MyProductService::seeded();
        let mut edit = BusinessProductForm::from_product(service.screen().get("bp-1").unwrap());
        assert!(edit.select_reference("Organic Apples"));
        service.edit("bp-1", &edit).unwrap();
        assert_eq!(service.screen().get("bp-1").unwrap().name, "Organic Apples");
        assert_eq!(service.search_reference("organic"), vec!["Organic Bananas", "Organic Milk", "Organic Apples"]);
        assert!(service.delete("bp-1"));
        assert_eq!(service.summary().total, 1);
    }
}
