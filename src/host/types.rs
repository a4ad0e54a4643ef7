//! Host configuration types.
//!
//! A [`Host`] is created by the build pass, enriched in place by the
//! translator and serialized for rendering.

use serde::{Deserialize, Serialize};

use crate::backend::{BackendId, BackendRef};
use crate::host::time::ProxyTime;

/// One routable virtual host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Host {
    /// Hostname this configuration answers for.
    pub hostname: String,

    /// Routed paths in configuration order.
    pub paths: Vec<HostPath>,

    /// Redirect target for requests to `/`, empty when disabled.
    pub root_redirect: String,

    /// Additional names this host answers for.
    pub alias: HostAlias,

    /// Expose the source namespace as a proxy variable.
    pub var_namespace: bool,

    /// TLS settings.
    pub tls: HostTls,

    /// Forward encrypted traffic to the root backend without terminating TLS.
    pub ssl_passthrough: bool,

    /// Plain HTTP backend served alongside passthrough.
    pub http_passthrough_backend: Option<BackendId>,

    /// Client side timeouts. `None` falls back to the proxy defaults.
    pub timeout: HostTimeout,
}

impl Host {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// Bind `path` to `backend`, keeping configuration order.
    pub fn add_path(&mut self, path: impl Into<String>, backend: BackendRef) -> &mut HostPath {
        self.paths.push(HostPath {
            path: path.into(),
            backend,
        });
        let last = self.paths.len() - 1;
        &mut self.paths[last]
    }

    /// Find the path bound exactly to `path`.
    pub fn find_path(&self, path: &str) -> Option<&HostPath> {
        self.paths.iter().find(|p| p.path == path)
    }
}

/// A routed path and the backend it forwards to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostPath {
    pub path: String,
    pub backend: BackendRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostAlias {
    pub alias_name: String,
    pub alias_regex: String,
}

/// TLS settings of a host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostTls {
    /// Client certificate verification, `None` when disabled.
    pub client_auth: Option<ClientAuthTls>,
}

/// Client certificate verification settings.
///
/// Always assigned as a whole from one successful CA resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientAuthTls {
    pub ca_filename: String,
    pub ca_hash: String,
    /// Accept connections without a valid client certificate.
    pub ca_verify_optional: bool,
    /// Page served on verification failure, empty for the proxy default.
    pub ca_error_page: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostTimeout {
    pub client: Option<ProxyTime>,
    pub client_fin: Option<ProxyTime>,
}
