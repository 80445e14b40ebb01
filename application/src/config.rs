//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::dummy_json;
use smart_default::SmartDefault;

use crate::page;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recipe directory configuration.
    pub directory: Directory,

    /// Local storage configuration.
    pub storage: Storage,

    /// Home page configuration.
    pub home: Home,

    /// Catalog page configuration.
    pub catalog: Catalog,

    /// Login page configuration.
    pub login: Login,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Recipe directory configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Directory {
    /// Base URL of the [DummyJSON] API.
    ///
    /// [DummyJSON]: https://dummyjson.com
    #[default("https://dummyjson.com".to_owned())]
    pub base_url: String,
}

impl From<Directory> for dummy_json::Config {
    fn from(value: Directory) -> Self {
        let Directory { base_url } = value;
        Self { base_url }
    }
}

/// Local storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Path to the JSON file persisting the session.
    #[default(PathBuf::from(".recipe-book/storage.json"))]
    pub path: PathBuf,
}

/// Home page configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Home {
    /// Number of featured recipes to preview.
    #[default(5)]
    pub featured: usize,

    /// Number of times the featured strip repeats to loop seamlessly.
    #[default(3)]
    pub repeat: usize,
}

impl From<Home> for page::home::Config {
    fn from(value: Home) -> Self {
        let Home { featured, repeat } = value;
        Self { featured, repeat }
    }
}

/// Catalog page configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Number of recipe cards rendered per page.
    #[default(12)]
    pub page_size: usize,

    /// Delay coalescing rapid search input into a single filter pass.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub search_debounce: time::Duration,

    /// Indicator whether recipe cards open the detail view.
    #[default(true)]
    pub detail_view: bool,
}

impl From<Catalog> for page::catalog::Config {
    fn from(value: Catalog) -> Self {
        let Catalog {
            page_size,
            search_debounce: _,
            detail_view,
        } = value;
        Self {
            page_size,
            detail_view: if detail_view {
                page::catalog::DetailView::Enabled
            } else {
                page::catalog::DetailView::Disabled
            },
        }
    }
}

/// Login page configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Login {
    /// Delay between a successful login and opening the catalog.
    #[default(time::Duration::from_millis(1500))]
    #[serde(with = "humantime_serde")]
    pub redirect_delay: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely-missing-config").unwrap();

        assert_eq!(config.directory.base_url, "https://dummyjson.com");
        assert_eq!(config.home.featured, 5);
        assert_eq!(config.home.repeat, 3);
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(
            config.catalog.search_debounce,
            Duration::from_millis(300),
        );
        assert!(config.catalog.detail_view);
        assert_eq!(config.login.redirect_delay, Duration::from_millis(1500));
    }
}
