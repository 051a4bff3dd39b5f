//! Catalog browsing: category listings with pagination.

use std::sync::Arc;

use serde_json::json;

use crate::breadcrumbs::trail;
use crate::data::{CatalogStore, SHOW_BY_DEFAULT};
use crate::dispatch::handler::{param, param_or};
use crate::dispatch::{ActionResult, Handler, HandlerError, Page, RequestContext};
use crate::pagination::Pagination;

pub struct CatalogHandler {
    catalog: Arc<CatalogStore>,
}

impl CatalogHandler {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    fn index(&self, ctx: &RequestContext) -> ActionResult {
        let page = Page::new("catalog/index", "Product Catalog")
            .description("Browse all product categories and latest items.")
            .data(json!({
                "categories": self.catalog.categories(),
                "latest_products": self.catalog.latest_products(12),
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }

    fn category(&self, params: &[String], ctx: &RequestContext) -> ActionResult {
        let category_id: u64 = param(params, 0)?;
        let requested_page: i64 = param_or(params, 1, 1)?;

        let total = self.catalog.count_in_category(category_id);
        let pagination = Pagination::new(total, requested_page, SHOW_BY_DEFAULT, "page-");

        let products =
            self.catalog
                .products_in_category(category_id, pagination.offset(), SHOW_BY_DEFAULT);

        let category_name = self
            .catalog
            .category_by_id(category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Category".to_string());

        let page = Page::new("catalog/category", "Category Listing")
            .description(category_name.clone())
            .data(json!({
                "category": { "id": category_id, "name": category_name },
                "categories": self.catalog.categories(),
                "products": products,
                "total": pagination.total(),
                "current_page": pagination.current_page(),
                "pagination": pagination.links(&ctx.path),
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }
}

impl Handler for CatalogHandler {
    fn handle(&self, action: &str, params: &[String], ctx: &RequestContext) -> ActionResult {
        match action {
            "actionIndex" => self.index(ctx),
            "actionCategory" => self.category(params, ctx),
            other => Err(HandlerError::UnknownAction(other.to_string())),
        }
    }
}
