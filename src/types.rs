//! Typed views over the configuration document.
//!
//! Values live in the document as text; the boundary types here parse them
//! into typed fields on the way out and keep the environment snapshot that
//! drives precedence resolution.

use std::env;

use serde::{Deserialize, Serialize};

use crate::document::ConfigDocument;

/// Environment variable overriding `napps.uri`.
pub const ENV_API_URI: &str = "NAPPS_API_URI";
/// Environment variable overriding `auth.user`.
pub const ENV_USER: &str = "NAPPS_USER";
/// Environment variable overriding `auth.token`.
pub const ENV_TOKEN: &str = "NAPPS_TOKEN";
/// Environment variable overriding `napps.enabled_path`.
pub const ENV_NAPPS_PATH: &str = "NAPPS_PATH";
/// Base directory consulted when computing the default napps path.
pub const ENV_VIRTUAL_ENV: &str = "VIRTUAL_ENV";

/// Snapshot of the environment variables consulted during resolution.
///
/// Captured once per open, so the precedence logic is a pure function of
/// the document and this snapshot.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_uri: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
    pub napps_path: Option<String>,
    pub virtual_env: Option<String>,
}

impl EnvOverrides {
    /// Capture the relevant variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_uri: env::var(ENV_API_URI).ok(),
            user: env::var(ENV_USER).ok(),
            token: env::var(ENV_TOKEN).ok(),
            napps_path: env::var(ENV_NAPPS_PATH).ok(),
            virtual_env: env::var(ENV_VIRTUAL_ENV).ok(),
        }
    }
}

/// Effective configuration values after precedence resolution.
///
/// A view materialized from the store's document at open time; it is not
/// persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Debug mode of the owning store instance.
    pub debug: bool,
    /// Registry account name, if any.
    pub user: Option<String>,
    /// Registry API token, if any.
    pub token: Option<String>,
    /// Base URI of the NApps registry API.
    pub uri: String,
    /// Directory holding enabled napps.
    pub enabled_path: String,
    /// Directory holding installed napps, always beneath `enabled_path`.
    pub installed_path: String,
}

impl ResolvedConfig {
    /// Read the typed view out of a resolved document.
    pub fn from_document(doc: &ConfigDocument) -> Self {
        Self {
            debug: doc
                .get("global", "debug")
                .map_or(false, |value| parse_bool(&value)),
            user: doc.get("auth", "user"),
            token: doc.get("auth", "token"),
            uri: doc.get("napps", "uri").unwrap_or_default(),
            enabled_path: doc.get("napps", "enabled_path").unwrap_or_default(),
            installed_path: doc.get("napps", "installed_path").unwrap_or_default(),
        }
    }
}

/// Parse a stored boolean in its canonical or common text forms.
fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_forms() {
        for value in ["true", "True", "YES", "1", "on"] {
            assert!(parse_bool(value), "expected '{}' to parse as true", value);
        }
        for value in ["false", "False", "no", "0", "off", "garbage", ""] {
            assert!(!parse_bool(value), "expected '{}' to parse as false", value);
        }
    }

    #[test]
    fn from_document_reads_all_fields() {
        let mut doc = ConfigDocument::new();
        doc.set("global", "debug", "true");
        doc.set("auth", "user", "alice");
        doc.set("auth", "token", "tok123");
        doc.set("napps", "uri", "https://napps.kytos.io/api/");
        doc.set("napps", "enabled_path", "/var/lib/kytos/napps");
        doc.set("napps", "installed_path", "/var/lib/kytos/napps/.installed");

        let config = ResolvedConfig::from_document(&doc);
        assert!(config.debug);
        assert_eq!(config.user.as_deref(), Some("alice"));
        assert_eq!(config.token.as_deref(), Some("tok123"));
        assert_eq!(config.uri, "https://napps.kytos.io/api/");
        assert_eq!(config.enabled_path, "/var/lib/kytos/napps");
        assert_eq!(config.installed_path, "/var/lib/kytos/napps/.installed");
    }

    #[test]
    fn from_document_tolerates_missing_keys() {
        let config = ResolvedConfig::from_document(&ConfigDocument::new());
        assert!(!config.debug);
        assert_eq!(config.user, None);
        assert_eq!(config.token, None);
        assert_eq!(config.uri, "");
    }
}
