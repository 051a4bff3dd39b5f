//! Product detail view.

use std::sync::Arc;

use serde_json::json;

use crate::breadcrumbs::trail;
use crate::data::CatalogStore;
use crate::dispatch::handler::param;
use crate::dispatch::{ActionResult, Handler, HandlerError, Page, RequestContext};

pub struct ProductHandler {
    catalog: Arc<CatalogStore>,
}

impl ProductHandler {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    fn view(&self, params: &[String], ctx: &RequestContext) -> ActionResult {
        let product_id: u64 = param(params, 0)?;

        let product = self
            .catalog
            .product_by_id(product_id)
            .ok_or_else(|| HandlerError::Internal(format!("product {} does not exist", product_id)))?;

        let page = Page::new("product/view", format!("Product description {}", product.title))
            .description(format!("Specifications {}", product.title))
            .data(json!({
                "product": product,
                "categories": self.catalog.categories(),
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }
}

impl Handler for ProductHandler {
    fn handle(&self, action: &str, params: &[String], ctx: &RequestContext) -> ActionResult {
        match action {
            "actionView" => self.view(params, ctx),
            other => Err(HandlerError::UnknownAction(other.to_string())),
        }
    }
}
