//! Static site pages: home, about, contacts.

use std::sync::Arc;

use serde_json::json;

use crate::breadcrumbs::trail;
use crate::data::CatalogStore;
use crate::dispatch::{ActionResult, Handler, HandlerError, Page, RequestContext};

pub struct SiteHandler {
    catalog: Arc<CatalogStore>,
}

impl SiteHandler {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    fn index(&self, ctx: &RequestContext) -> ActionResult {
        let page = Page::new("main/index", "Home")
            .description("Store home page")
            .data(json!({
                "categories": self.catalog.categories(),
                "latest_products": self.catalog.latest_products(6),
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }

    fn about(&self, ctx: &RequestContext) -> ActionResult {
        let page = Page::new("about/index", "About us")
            .description("About the store")
            .data(json!({ "breadcrumbs": trail(&ctx.path) }));

        Ok(Some(page))
    }

    fn contact(&self, ctx: &RequestContext) -> ActionResult {
        let page = Page::new("site/contact", "Contacts")
            .description("How to reach the store")
            .data(json!({
                "email": "shop@example.com",
                "phone": "+1 555 0100",
                "breadcrumbs": trail(&ctx.path),
            }));

        Ok(Some(page))
    }
}

impl Handler for SiteHandler {
    fn handle(&self, action: &str, _params: &[String], ctx: &RequestContext) -> ActionResult {
        match action {
            "actionIndex" => self.index(ctx),
            "actionAbout" => self.about(ctx),
            "actionContact" => self.contact(ctx),
            other => Err(HandlerError::UnknownAction(other.to_string())),
        }
    }
}
