//! Service configuration loaded via OrthoConfig.
//!
//! Values layer command-line flags over `ACCOUNTS_*` environment variables
//! and configuration files.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::MongoConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE: &str = "accounts";
const DEFAULT_COLLECTION: &str = "users";

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_owned()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_owned()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_owned()
}

/// Runtime settings for the accounts service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    #[serde(default = "default_bind_addr")]
    #[ortho_config(default = default_bind_addr())]
    pub bind_addr: String,
    /// MongoDB connection string. Users are kept in memory when unset.
    pub mongodb_uri: Option<String>,
    /// Database holding the user collection.
    #[serde(default = "default_database")]
    #[ortho_config(default = default_database())]
    pub database: String,
    /// Collection holding user documents.
    #[serde(default = "default_collection")]
    #[ortho_config(default = default_collection())]
    pub collection: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            mongodb_uri: None,
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl AppSettings {
    /// Return the configured listen address.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Return the MongoDB settings when a connection string is configured.
    ///
    /// # Examples
    /// ```
    /// use accounts::settings::AppSettings;
    ///
    /// let settings = AppSettings {
    ///     mongodb_uri: Some("mongodb://localhost:27017".to_owned()),
    ///     ..AppSettings::default()
    /// };
    /// let mongo = settings.mongo().expect("uri configured");
    /// assert_eq!(mongo.database(), "accounts");
    /// assert_eq!(mongo.collection(), "users");
    /// ```
    pub fn mongo(&self) -> Option<MongoConfig> {
        let uri = self.mongodb_uri.as_deref()?.trim();
        if uri.is_empty() {
            return None;
        }
        Some(MongoConfig::new(uri, &self.database, &self.collection))
    }
}
