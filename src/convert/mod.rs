//! Annotation to host configuration translation.
//!
//! # Data Flow
//! ```text
//! Host (paths bound to backends) + AnnotationSource
//!     → metadata.rs     (root redirect, aliases, namespace variable)
//!     → auth_tls.rs     (client certificate verification, via CaResolver)
//!     → cert_signer.rs  (issuer consistency check, via IssuerAccount)
//!     → passthrough.rs  (raw TCP forwarding, via BackendStore)
//!     → timeout.rs      (client timeouts, via validate.rs)
//!     → enriched Host
//! ```
//!
//! # Design Decisions
//! - Rules never fail; problems become diagnostics and the feature stays off
//! - Each rule writes its own slice of the host, so rule order is irrelevant,
//!   except that passthrough switches a shared backend to TCP mode
//! - No state survives between calls; rerunning on the same inputs yields
//!   the same host and the same diagnostics

mod auth_tls;
mod cert_signer;
mod metadata;
mod passthrough;
mod timeout;
mod validate;

use crate::annotations::AnnotationSource;
use crate::backend::BackendStore;
use crate::host::Host;
use crate::observability::{metrics, Diagnostics};
use crate::tls::{CaResolver, IssuerAccount};

/// Applies host-scoped annotations to a [`Host`].
pub struct HostUpdater<'a> {
    cache: &'a dyn CaResolver,
    backends: &'a dyn BackendStore,
    acme: &'a dyn IssuerAccount,
    logger: &'a dyn Diagnostics,
}

impl<'a> HostUpdater<'a> {
    pub fn new(
        cache: &'a dyn CaResolver,
        backends: &'a dyn BackendStore,
        acme: &'a dyn IssuerAccount,
        logger: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            cache,
            backends,
            acme,
            logger,
        }
    }

    /// Run every host rule against `host`.
    pub fn update_host(&self, host: &mut Host, mapper: &dyn AnnotationSource) {
        let span = tracing::debug_span!("update_host", host = %host.hostname);
        let _enter = span.enter();

        self.build_host_metadata(host, mapper);
        self.build_host_auth_tls(host, mapper);
        self.build_host_cert_signer(mapper);
        self.build_host_ssl_passthrough(host, mapper);
        self.build_host_timeout(host, mapper);

        metrics::record_host_translated();
        tracing::debug!(
            client_auth = host.tls.client_auth.is_some(),
            ssl_passthrough = host.ssl_passthrough,
            "Host updated"
        );
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use crate::annotations::ResourceRef;
    use crate::backend::BackendRegistry;
    use crate::config::schema::AcmeConfig;
    use crate::convert::HostUpdater;
    use crate::observability::RecordingDiagnostics;
    use crate::tls::{AcmeAccount, StaticCaStore};

    /// Collaborators owned by one test.
    #[derive(Default)]
    pub(crate) struct Fixture {
        pub cache: StaticCaStore,
        pub backends: BackendRegistry,
        pub acme: AcmeAccount,
        pub logger: RecordingDiagnostics,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_acme_account(mut self) -> Self {
            self.acme = AcmeAccount::from_config(&AcmeConfig {
                endpoint: "https://acme.example/directory".into(),
                emails: vec!["ops@example.com".into()],
            });
            self
        }

        pub fn updater(&self) -> HostUpdater<'_> {
            HostUpdater::new(&self.cache, &self.backends, &self.acme, &self.logger)
        }
    }

    pub(crate) fn source() -> ResourceRef {
        ResourceRef::ingress("default", "web")
    }
}
