//! Product and category storage.

use serde::Serialize;

/// Products shown per catalog page.
pub const SHOW_BY_DEFAULT: u64 = 6;

/// A sellable product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub category_id: u64,
    pub description: String,
    pub is_new: bool,
}

/// A product category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Read-only catalog of products and categories.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Seeded demo catalog used until a real data layer is wired in.
    pub fn demo() -> Self {
        let categories = vec![
            Category {
                id: 1,
                name: "Phones".to_string(),
            },
            Category {
                id: 2,
                name: "Laptops".to_string(),
            },
            Category {
                id: 3,
                name: "Accessories".to_string(),
            },
        ];

        let specs: [(&str, &str, f64, u64, bool); 14] = [
            ("Nordic One", "Nordic", 399.0, 1, false),
            ("Nordic One Pro", "Nordic", 549.0, 1, false),
            ("Vela S2", "Vela", 289.0, 1, false),
            ("Vela S2 Mini", "Vela", 219.0, 1, false),
            ("Atlas X", "Atlas", 699.0, 1, true),
            ("Atlas X Plus", "Atlas", 829.0, 1, true),
            ("Vela S3", "Vela", 359.0, 1, true),
            ("Nordic Two", "Nordic", 479.0, 1, true),
            ("Keystone 14", "Keystone", 1099.0, 2, false),
            ("Keystone 16", "Keystone", 1399.0, 2, true),
            ("Drift Air", "Drift", 899.0, 2, false),
            ("Drift Pro", "Drift", 1249.0, 2, true),
            ("Volt Charger 65W", "Volt", 39.0, 3, false),
            ("Halo Buds", "Halo", 79.0, 3, true),
        ];

        let products = specs
            .into_iter()
            .enumerate()
            .map(|(i, (title, brand, price, category_id, is_new))| Product {
                id: i as u64 + 1,
                title: title.to_string(),
                brand: brand.to_string(),
                price,
                category_id,
                description: format!("{} by {}", title, brand),
                is_new,
            })
            .collect();

        Self::new(products, categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_id(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Most recently added products, newest first.
    pub fn latest_products(&self, count: usize) -> Vec<&Product> {
        let mut latest: Vec<&Product> = self.products.iter().collect();
        latest.sort_by(|a, b| b.id.cmp(&a.id));
        latest.truncate(count);
        latest
    }

    /// One page of a category's products, in catalog order.
    pub fn products_in_category(&self, category_id: u64, offset: u64, limit: u64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }

    pub fn count_in_category(&self, category_id: u64) -> u64 {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let store = CatalogStore::demo();
        assert_eq!(store.categories().len(), 3);
        assert_eq!(store.count_in_category(1), 8);
        assert!(store.product_by_id(1).is_some());
        assert!(store.product_by_id(999).is_none());
    }

    #[test]
    fn test_latest_products_newest_first() {
        let store = CatalogStore::demo();
        let latest = store.latest_products(3);
        assert_eq!(latest.len(), 3);
        assert!(latest[0].id > latest[1].id);
    }

    #[test]
    fn test_category_paging() {
        let store = CatalogStore::demo();

        let first = store.products_in_category(1, 0, SHOW_BY_DEFAULT);
        assert_eq!(first.len(), 6);

        let second = store.products_in_category(1, SHOW_BY_DEFAULT, SHOW_BY_DEFAULT);
        assert_eq!(second.len(), 2);
        assert!(second.iter().all(|p| p.category_id == 1));
    }
}
