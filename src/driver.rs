//! Document driven translation.
//!
//! # Responsibilities
//! - Build hosts, mappers and collaborators from a validated document
//! - Run the translator once per host with its own diagnostics sink
//! - Collect translated hosts, diagnostics and the final backend registry

use serde::Serialize;

use crate::annotations::{keys, AnnotationMap};
use crate::backend::{BackendRef, BackendRegistry, BackendSnapshot, BackendStore};
use crate::config::schema::{CaSecretConfig, HostConfDocument, HostDocument};
use crate::convert::HostUpdater;
use crate::host::Host;
use crate::observability::{Diagnostic, Level, RecordingDiagnostics};
use crate::tls::{AcmeAccount, CaEntry, CaFile, StaticCaStore};

/// Outcome of translating every host of a document.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationReport {
    pub hosts: Vec<HostReport>,
    pub backends: Vec<BackendSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub host: Host,
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslationReport {
    pub fn count(&self, level: Level) -> usize {
        self.hosts
            .iter()
            .flat_map(|h| h.diagnostics.iter())
            .filter(|d| d.level == level)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Level::Error) > 0
    }
}

impl HostDocument {
    /// The host as handed over by the build pass, before translation.
    pub fn to_host(&self) -> Host {
        let mut host = Host::new(&self.hostname);
        for path in &self.paths {
            host.add_path(&path.path, path.backend.clone());
        }
        host
    }

    /// Annotations of this host layered over the document defaults.
    pub fn mapper(&self, defaults: &std::collections::BTreeMap<String, String>) -> AnnotationMap {
        let mut mapper = AnnotationMap::with_defaults(
            defaults.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        );
        for annotation in &self.annotations {
            if !keys::is_host_key(&annotation.key) {
                tracing::debug!(
                    host = %self.hostname,
                    key = %annotation.key,
                    "Annotation is not host scoped"
                );
            }
            mapper.insert(&annotation.key, &annotation.value, annotation.source.clone());
        }
        mapper
    }
}

impl From<&CaSecretConfig> for CaEntry {
    fn from(secret: &CaSecretConfig) -> Self {
        match (&secret.malformed, &secret.filename) {
            (Some(reason), _) => CaEntry::Malformed(reason.clone()),
            (None, Some(filename)) => CaEntry::Ca(CaFile {
                filename: filename.clone(),
                hash: secret.hash.clone(),
            }),
            (None, None) => CaEntry::NoCa,
        }
    }
}

/// CA store preloaded with the document secrets.
pub fn build_ca_store(doc: &HostConfDocument) -> StaticCaStore {
    let mut store = StaticCaStore::new();
    for secret in &doc.ca_secrets {
        store.insert(&secret.reference, CaEntry::from(secret));
    }
    store
}

/// Registry preloaded with the document backends and every backend bound to
/// a host path.
pub fn build_registry(doc: &HostConfDocument) -> BackendRegistry {
    let registry = BackendRegistry::new();
    for backend in &doc.backends {
        registry.register(
            BackendRef::new(&backend.namespace, &backend.name, &backend.port),
            backend.mode,
        );
    }
    for host in &doc.hosts {
        for path in &host.paths {
            let b = &path.backend;
            registry.acquire_backend(&b.namespace, &b.name, &b.port);
        }
    }
    registry
}

/// Translate every host of `doc` against fresh collaborators.
pub fn translate_document(doc: &HostConfDocument) -> TranslationReport {
    let cache = build_ca_store(doc);
    let registry = build_registry(doc);
    let acme = AcmeAccount::from_config(&doc.acme);
    translate_with(doc, &cache, &registry, &acme)
}

/// Translate every host of `doc` against the given collaborators.
pub fn translate_with(
    doc: &HostConfDocument,
    cache: &StaticCaStore,
    registry: &BackendRegistry,
    acme: &AcmeAccount,
) -> TranslationReport {
    let mut hosts = Vec::with_capacity(doc.hosts.len());
    for host_doc in &doc.hosts {
        let mut host = host_doc.to_host();
        let mapper = host_doc.mapper(&doc.defaults);
        let diagnostics = RecordingDiagnostics::forwarding(&host_doc.hostname);

        HostUpdater::new(cache, registry, acme, &diagnostics).update_host(&mut host, &mapper);

        hosts.push(HostReport {
            host,
            diagnostics: diagnostics.take(),
        });
    }
    tracing::info!(
        hosts = hosts.len(),
        backends = registry.len(),
        "Translation finished"
    );
    TranslationReport {
        hosts,
        backends: registry.snapshot(),
    }
}
