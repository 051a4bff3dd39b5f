//! Storefront page tests: pagination in list views, session cart flow.

use reqwest::StatusCode;
use serde_json::Value;

use storefront::config::StorefrontConfig;

mod common;

#[tokio::test]
async fn test_home_page_descriptor() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::OK);

    let page: Value = res.json().await.unwrap();
    assert_eq!(page["view"], "main/index");
    assert_eq!(page["data"]["latest_products"].as_array().unwrap().len(), 6);

    // Root path: a single unlinked Home crumb.
    let crumbs = page["data"]["breadcrumbs"].as_array().unwrap();
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0]["label"], "Home");
    assert!(crumbs[0]["href"].is_null());
}

#[tokio::test]
async fn test_category_page_two_is_windowed() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/catalog/category/1/page-2", addr))
        .send()
        .await
        .unwrap();

    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["current_page"], 2);
    assert_eq!(page["data"]["products"].as_array().unwrap().len(), 2);

    // 8 products at 6 per page: exactly two numbered links, page 2 current.
    let links = page["data"]["pagination"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["href"], "/catalog/category/1/page-1");
    assert_eq!(links[0]["current"], false);
    assert_eq!(links[1]["current"], true);
}

#[tokio::test]
async fn test_out_of_range_page_is_clamped() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/catalog/category/1/page-99", addr))
        .send()
        .await
        .unwrap();

    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["current_page"], 2);
}

#[tokio::test]
async fn test_cart_session_roundtrip() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;
    let client = common::client();

    // Two ajax adds of the same product accumulate in one session.
    let res = client
        .get(format!("http://{}/cart/addAjax/3", addr))
        .send()
        .await
        .unwrap();
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["count"], 1);

    let res = client
        .get(format!("http://{}/cart/addAjax/3", addr))
        .send()
        .await
        .unwrap();
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["count"], 2);

    let res = client
        .get(format!("http://{}/cart", addr))
        .send()
        .await
        .unwrap();
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["total_count"], 2);
    assert_eq!(page["data"]["items"].as_array().unwrap().len(), 1);

    // Deleting the line empties the cart; the delete itself lands on the
    // fallback page.
    let res = client
        .get(format!("http://{}/cart/delete/3", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("http://{}/cart", addr))
        .send()
        .await
        .unwrap();
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["data"]["total_count"], 0);
}

#[tokio::test]
async fn test_checkout_totals() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;
    let client = common::client();

    // Volt Charger 65W (39.0) and Halo Buds (79.0).
    for id in [13, 14] {
        client
            .get(format!("http://{}/cart/addAjax/{}", addr, id))
            .send()
            .await
            .unwrap();
    }

    let res = client
        .get(format!("http://{}/cart/checkout", addr))
        .send()
        .await
        .unwrap();

    let page: Value = res.json().await.unwrap();
    assert_eq!(page["view"], "cart/checkout");
    assert_eq!(page["data"]["total_price"], 118.0);
    assert_eq!(page["data"]["total_count"], 2);
}

#[tokio::test]
async fn test_contacts_page_breadcrumbs() {
    let (addr, _shutdown) = common::spawn_storefront(StorefrontConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/contacts", addr))
        .send()
        .await
        .unwrap();

    let page: Value = res.json().await.unwrap();
    assert_eq!(page["view"], "site/contact");

    let crumbs = page["data"]["breadcrumbs"].as_array().unwrap();
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[0]["href"], "/");
    assert_eq!(crumbs[1]["label"], "contacts");
}
