//! HTTP [`CatalogSource`] fetching the bundled `Books.json`.
//!
//! Client-side (csr): a relative `GET` via `gloo-net`.
//! Native builds: always [`CatalogError::Unavailable`], since there is no
//! page origin to resolve the asset against.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures become typed [`CatalogError`]s; callers
//! decide how to degrade (the detail view collapses them into "not found").

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_http_test.rs"]
mod catalog_http_test;

use catalog::{Catalog, CatalogError, CatalogSource};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16) -> Option<CatalogError> {
    if (200..300).contains(&status) { None } else { Some(CatalogError::Status(status)) }
}

impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| CatalogError::Fetch(e.to_string()))?;
            if let Some(err) = status_error(resp.status()) {
                return Err(err);
            }
            let body = resp.text().await.map_err(|e| CatalogError::Fetch(e.to_string()))?;
            let catalog = Catalog::from_json(&body)?;
            log::debug!("loaded {} books from {}", catalog.len(), self.url);
            Ok(catalog)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(CatalogError::Unavailable)
        }
    }
}
