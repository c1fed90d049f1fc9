//! Network access for the static catalog asset.

pub mod catalog_http;
