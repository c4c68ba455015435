//! Read-only client for the remote store API.
//!
//! Both endpoints are fetched exactly once at mount. Failures are reported
//! as strings for the caller to log; there is no retry or backoff.

use contracts::catalog::Product;
use gloo_net::http::Request;

const API_BASE: &str = "https://fakestoreapi.com";

/// Fetch the full product list
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let url = format!("{}/products", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the list of category labels
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let url = format!("{}/products/categories", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<String> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
