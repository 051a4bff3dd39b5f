//! Session cart: add, remove, list, checkout summary.

use std::sync::Arc;

use serde_json::json;

use crate::breadcrumbs::trail;
use crate::data::CatalogStore;
use crate::dispatch::handler::param;
use crate::dispatch::{ActionResult, Handler, HandlerError, Page, RequestContext};

pub struct CartHandler {
    catalog: Arc<CatalogStore>,
}

impl CartHandler {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Cart lines joined with product data, plus totals. Products that
    /// left the catalog since they were added are skipped.
    fn lines(&self, ctx: &RequestContext) -> (Vec<serde_json::Value>, f64, u32) {
        let cart = ctx.session.cart();
        let mut ids: Vec<_> = cart.keys().copied().collect();
        ids.sort_unstable();

        let mut lines = Vec::new();
        let mut total_price = 0.0;
        let mut total_count = 0;

        for id in ids {
            let quantity = cart[&id];
            if let Some(product) = self.catalog.product_by_id(id) {
                let subtotal = product.price * f64::from(quantity);
                total_price += subtotal;
                total_count += quantity;
                lines.push(json!({
                    "product": product,
                    "quantity": quantity,
                    "subtotal": subtotal,
                }));
            }
        }

        (lines, total_price, total_count)
    }

    fn index(&self, ctx: &RequestContext) -> ActionResult {
        let (items, total_price, total_count) = self.lines(ctx);

        let page = Page::new("cart/index", "Cart")
            .description("Your shopping cart")
            .data(json!({
                "items": items,
                "total_price": total_price,
                "total_count": total_count,
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }

    /// Adds a product and completes without output; the dispatcher then
    /// renders the fallback page.
    fn add(&self, params: &[String], ctx: &RequestContext) -> ActionResult {
        let product_id: u64 = param(params, 0)?;
        ctx.session.add_to_cart(product_id);
        Ok(None)
    }

    /// Add for the storefront's async widget: responds with the new item
    /// count instead of a page transition.
    fn add_ajax(&self, params: &[String], ctx: &RequestContext) -> ActionResult {
        let product_id: u64 = param(params, 0)?;
        ctx.session.add_to_cart(product_id);

        let page = Page::new("cart/add-ajax", "Cart")
            .data(json!({ "count": ctx.session.cart_count() }));

        Ok(Some(page))
    }

    fn delete(&self, params: &[String], ctx: &RequestContext) -> ActionResult {
        let product_id: u64 = param(params, 0)?;
        ctx.session.remove_from_cart(product_id);
        Ok(None)
    }

    fn checkout(&self, ctx: &RequestContext) -> ActionResult {
        let (items, total_price, total_count) = self.lines(ctx);

        let page = Page::new("cart/checkout", "Checkout")
            .description("Order summary")
            .data(json!({
                "items": items,
                "total_price": total_price,
                "total_count": total_count,
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }
}

impl Handler for CartHandler {
    fn handle(&self, action: &str, params: &[String], ctx: &RequestContext) -> ActionResult {
        match action {
            "actionIndex" => self.index(ctx),
            "actionAdd" => self.add(params, ctx),
            "actionAddAjax" => self.add_ajax(params, ctx),
            "actionDelete" => self.delete(params, ctx),
            "actionCheckout" => self.checkout(ctx),
            other => Err(HandlerError::UnknownAction(other.to_string())),
        }
    }
}
