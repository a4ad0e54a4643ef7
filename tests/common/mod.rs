//! Shared builders for integration tests.

#![allow(dead_code)]

use hostconf::annotations::ResourceRef;
use hostconf::backend::{BackendRef, BackendRegistry};
use hostconf::config::AcmeConfig;
use hostconf::host::Host;
use hostconf::observability::RecordingDiagnostics;
use hostconf::tls::{AcmeAccount, CaEntry, StaticCaStore};
use hostconf::HostUpdater;

pub const CA_SECRET: &str = "default/client-ca";
pub const CA_FILENAME: &str = "/var/lib/haproxy/crt/ca/default_client-ca.pem";
pub const CA_HASH: &str = "3f786850e387550fdab836ed7e6dc881de23001b";

/// Collaborators for one integration test.
pub struct Env {
    pub cache: StaticCaStore,
    pub backends: BackendRegistry,
    pub acme: AcmeAccount,
    pub logger: RecordingDiagnostics,
}

impl Env {
    pub fn new() -> Self {
        let mut cache = StaticCaStore::new().with_ca(CA_SECRET, CA_FILENAME, CA_HASH);
        cache.insert("default/tls-only", CaEntry::NoCa);
        Self {
            cache,
            backends: BackendRegistry::new(),
            acme: AcmeAccount::from_config(&AcmeConfig {
                endpoint: "https://acme-staging-v02.api.letsencrypt.org/directory".into(),
                emails: vec!["admin@example.com".into()],
            }),
            logger: RecordingDiagnostics::new(),
        }
    }

    pub fn without_acme_account(mut self) -> Self {
        self.acme = AcmeAccount::default();
        self
    }

    pub fn updater(&self) -> HostUpdater<'_> {
        HostUpdater::new(&self.cache, &self.backends, &self.acme, &self.logger)
    }
}

pub fn source() -> ResourceRef {
    ResourceRef::ingress("default", "shop")
}

/// Host with the given paths, all bound to port 443 of a service named after
/// the path (`/` maps to `web`).
pub fn host_with_paths(paths: &[&str]) -> Host {
    let mut host = Host::new("shop.example.com");
    for path in paths {
        let name = match path.trim_start_matches('/') {
            "" => "web",
            other => other,
        };
        host.add_path(*path, BackendRef::new("default", name, "443"));
    }
    host
}
