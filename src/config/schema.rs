//! Translation document schema.
//!
//! The `hostconf` driver reads one TOML document describing the hosts to
//! translate, their annotations, and the state of the collaborators the
//! translator consults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::annotations::ResourceRef;
use crate::backend::{BackendMode, BackendRef};

/// Root of a translation document.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostConfDocument {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Certificate issuer account.
    pub acme: AcmeConfig,

    /// Global annotation defaults, applied when no resource sets a key.
    pub defaults: BTreeMap<String, String>,

    /// CA secrets known to the certificate cache.
    pub ca_secrets: Vec<CaSecretConfig>,

    /// Backends already present in the registry.
    pub backends: Vec<BackendConfig>,

    /// Hosts to translate, in order.
    pub hosts: Vec<HostDocument>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g. `info`, `hostconf=debug`).
    pub log_level: String,

    /// Output format of log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// ACME account configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AcmeConfig {
    /// Directory endpoint URL, empty when not configured.
    pub endpoint: String,

    /// Account contact emails.
    pub emails: Vec<String>,
}

/// A CA secret as seen by the certificate cache.
///
/// `malformed` wins over `filename`; with neither the secret exists but has
/// no CA content.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaSecretConfig {
    /// Secret reference, as written in `auth-tls-secret`.
    pub reference: String,

    /// Path of the CA bundle on disk.
    pub filename: Option<String>,

    /// Content hash of the CA bundle.
    #[serde(default)]
    pub hash: String,

    /// Reason the secret cannot be read.
    pub malformed: Option<String>,
}

/// A pre-existing registry backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub namespace: String,
    pub name: String,
    pub port: String,

    #[serde(default = "default_backend_mode")]
    pub mode: BackendMode,
}

fn default_backend_mode() -> BackendMode {
    BackendMode::Http
}

/// One host and the annotations that apply to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostDocument {
    pub hostname: String,

    #[serde(default)]
    pub paths: Vec<PathConfig>,

    #[serde(default)]
    pub annotations: Vec<AnnotationConfig>,
}

/// A routed path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathConfig {
    pub path: String,
    pub backend: BackendRef,
}

/// One annotation and the resource it was read from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnnotationConfig {
    pub key: String,
    pub value: String,
    pub source: ResourceRef,
}
