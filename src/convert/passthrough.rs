//! SSL passthrough.
//!
//! # Responsibilities
//! - Require a path bound exactly to `/`
//! - Flag every other path as ineffective
//! - Switch the root backend to raw TCP mode
//! - Optionally bind a plain HTTP backend for the same service
//!
//! # Design Decisions
//! - Paths are never removed, only reported
//! - The backend mode flag is shared; when hosts disagree the last one wins

use crate::annotations::{keys, AnnotationSource};
use crate::backend::BackendMode;
use crate::convert::HostUpdater;
use crate::host::Host;
use crate::observability::metrics;

impl HostUpdater<'_> {
    pub fn build_host_ssl_passthrough(&self, host: &mut Host, mapper: &dyn AnnotationSource) {
        let sslpassthrough = mapper.get(keys::SSL_PASSTHROUGH);
        if !sslpassthrough.as_bool() {
            return;
        }
        let root_backend = match host.find_path("/") {
            Some(root) => root.backend.clone(),
            None => {
                self.logger.warn(&format!(
                    "skipping SSL of {}: root path was not configured",
                    sslpassthrough.origin()
                ));
                return;
            }
        };
        for path in host.paths.iter().filter(|p| p.path != "/") {
            self.logger.warn(&format!(
                "ignoring path '{}' from {}: ssl-passthrough only support root path",
                path.path,
                sslpassthrough.origin()
            ));
        }

        let http_port = mapper.get(keys::SSL_PASSTHROUGH_HTTP_PORT);
        if http_port.is_configured() {
            let http_backend =
                self.backends
                    .find_backend(&root_backend.namespace, &root_backend.name, http_port.value());
            if let Some(http_backend) = http_backend {
                host.http_passthrough_backend = Some(http_backend.id().clone());
            }
        }

        let backend = self
            .backends
            .acquire_backend(&root_backend.namespace, &root_backend.name, &root_backend.port);
        if backend.set_mode(BackendMode::Tcp) != BackendMode::Tcp {
            metrics::record_tcp_mode_switch();
            tracing::debug!(backend = %backend.id(), "Backend switched to TCP mode");
        }
        host.ssl_passthrough = true;
    }
}
