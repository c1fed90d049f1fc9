//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled (e.g. `BOOK_ALLEY_CATALOG_URL=...
//! trunk build`). Blank or unparsable values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use catalog::StorageKeys;
use catalog::interactions::{DEFAULT_READ_KEY, DEFAULT_WISHLIST_KEY};

pub const DEFAULT_CATALOG_URL: &str = "/Books.json";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Unparsed build-time values, one per setting.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawConfig<'a> {
    pub catalog_url: Option<&'a str>,
    pub read_key: Option<&'a str>,
    pub wishlist_key: Option<&'a str>,
    pub toast_timeout_ms: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl RawConfig<'static> {
    /// Values captured from the compiling environment.
    ///
    /// - `BOOK_ALLEY_CATALOG_URL`: catalog JSON path, default `/Books.json`
    /// - `BOOK_ALLEY_READ_KEY`: `localStorage` key for read ids, default `read-books`
    /// - `BOOK_ALLEY_WISHLIST_KEY`: key for wishlisted ids, default `wishlisted-books`
    /// - `BOOK_ALLEY_TOAST_TIMEOUT_MS`: toast lifetime, default 5000
    /// - `BOOK_ALLEY_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn build_env() -> Self {
        Self {
            catalog_url: option_env!("BOOK_ALLEY_CATALOG_URL"),
            read_key: option_env!("BOOK_ALLEY_READ_KEY"),
            wishlist_key: option_env!("BOOK_ALLEY_WISHLIST_KEY"),
            toast_timeout_ms: option_env!("BOOK_ALLEY_TOAST_TIMEOUT_MS"),
            log_level: option_env!("BOOK_ALLEY_LOG_LEVEL"),
        }
    }
}

/// Resolved client settings, provided to components through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_url: String,
    pub storage_keys: StorageKeys,
    pub toast_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_raw(RawConfig::build_env())
    }

    pub fn from_raw(raw: RawConfig<'_>) -> Self {
        Self {
            catalog_url: non_blank(raw.catalog_url).unwrap_or(DEFAULT_CATALOG_URL).to_owned(),
            storage_keys: StorageKeys {
                read: non_blank(raw.read_key).unwrap_or(DEFAULT_READ_KEY).to_owned(),
                wishlist: non_blank(raw.wishlist_key).unwrap_or(DEFAULT_WISHLIST_KEY).to_owned(),
            },
            toast_timeout_ms: parse_u32(raw.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS),
            log_level: parse_level(raw.log_level),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_u32(value: Option<&str>, default: u32) -> u32 {
    non_blank(value)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_level(value: Option<&str>) -> log::Level {
    non_blank(value)
        .and_then(|v| v.parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
