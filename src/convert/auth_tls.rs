//! Client certificate verification.

use crate::annotations::{keys, AnnotationSource};
use crate::convert::HostUpdater;
use crate::host::{ClientAuthTls, Host};

impl HostUpdater<'_> {
    /// Enable client certificate verification from `auth-tls-secret`.
    ///
    /// `auth-tls-verify-client = off` disables verification even when a secret
    /// is configured. A secret that fails to resolve is reported as an error
    /// and leaves verification disabled.
    pub fn build_host_auth_tls(&self, host: &mut Host, mapper: &dyn AnnotationSource) {
        let tls_secret = mapper.get(keys::AUTH_TLS_SECRET);
        if !tls_secret.is_configured() || tls_secret.value().is_empty() {
            return;
        }
        let verify = mapper.get(keys::AUTH_TLS_VERIFY_CLIENT);
        if verify.value() == "off" {
            return;
        }
        match self.cache.ca_secret_path(tls_secret.value()) {
            Ok(cafile) => {
                host.tls.client_auth = Some(ClientAuthTls {
                    ca_filename: cafile.filename,
                    ca_hash: cafile.hash,
                    ca_verify_optional: matches!(verify.value(), "optional" | "optional_no_ca"),
                    ca_error_page: mapper.get(keys::AUTH_TLS_ERROR_PAGE).value().to_string(),
                });
            }
            Err(e) => {
                self.logger.error(&format!(
                    "error building TLS auth config on {}: {}",
                    tls_secret.origin(),
                    e
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::annotations::AnnotationMap;
    use crate::convert::fixture::{source, Fixture};
    use crate::tls::{CaEntry, StaticCaStore};

    use super::*;

    fn fixture() -> Fixture {
        let mut fx = Fixture::new();
        fx.cache = StaticCaStore::new().with_ca("default/ca", "/var/haproxy/ssl/ca/default_ca.pem", "f1e2d3");
        fx.cache.insert("default/no-ca", CaEntry::NoCa);
        fx
    }

    fn mapper(secret: &str, verify: Option<&str>) -> AnnotationMap {
        let src = source();
        let mut mapper = AnnotationMap::new().with(keys::AUTH_TLS_SECRET, secret, &src);
        if let Some(verify) = verify {
            mapper.insert(keys::AUTH_TLS_VERIFY_CLIENT, verify, src);
        }
        mapper
    }

    #[test]
    fn test_secret_not_configured() {
        let fx = fixture();
        let mut host = Host::new("example.com");

        fx.updater().build_host_auth_tls(&mut host, &AnnotationMap::new());
        fx.updater().build_host_auth_tls(&mut host, &mapper("", None));

        assert!(host.tls.client_auth.is_none());
        assert!(fx.logger.entries().is_empty());
        assert_eq!(fx.cache.lookups(), 0);
    }

    #[test]
    fn test_defaulted_secret_is_ignored() {
        let fx = fixture();
        let mut defaults = std::collections::HashMap::new();
        defaults.insert(keys::AUTH_TLS_SECRET.to_string(), "default/ca".to_string());
        let mut host = Host::new("example.com");

        fx.updater()
            .build_host_auth_tls(&mut host, &AnnotationMap::with_defaults(defaults));
        assert!(host.tls.client_auth.is_none());
        assert_eq!(fx.cache.lookups(), 0);
    }

    #[test]
    fn test_verify_off_wins() {
        let fx = fixture();
        let mut host = Host::new("example.com");

        fx.updater().build_host_auth_tls(&mut host, &mapper("default/ca", Some("off")));
        fx.updater().build_host_auth_tls(&mut host, &mapper("default/missing", Some("off")));

        assert!(host.tls.client_auth.is_none());
        assert!(fx.logger.entries().is_empty());
        assert_eq!(fx.cache.lookups(), 0);
    }

    #[test]
    fn test_resolved_secret() {
        let fx = fixture();
        let mut host = Host::new("example.com");
        let mut m = mapper("default/ca", None);
        m.insert(keys::AUTH_TLS_ERROR_PAGE, "http://example.com/denied", source());

        fx.updater().build_host_auth_tls(&mut host, &m);

        let auth = host.tls.client_auth.unwrap();
        assert_eq!(auth.ca_filename, "/var/haproxy/ssl/ca/default_ca.pem");
        assert_eq!(auth.ca_hash, "f1e2d3");
        assert!(!auth.ca_verify_optional);
        assert_eq!(auth.ca_error_page, "http://example.com/denied");
        assert!(fx.logger.entries().is_empty());
    }

    #[test]
    fn test_optional_verify_modes() {
        for (verify, optional) in [
            ("on", false),
            ("optional", true),
            ("optional_no_ca", true),
            ("OFF", false),
        ] {
            let fx = fixture();
            let mut host = Host::new("example.com");
            fx.updater().build_host_auth_tls(&mut host, &mapper("default/ca", Some(verify)));
            let auth = host.tls.client_auth.unwrap();
            assert_eq!(auth.ca_verify_optional, optional, "verify={verify}");
            assert_eq!(auth.ca_error_page, "");
        }
    }

    #[test]
    fn test_unresolvable_secret() {
        for secret in ["default/missing", "default/no-ca"] {
            let fx = fixture();
            let mut host = Host::new("example.com");

            fx.updater().build_host_auth_tls(&mut host, &mapper(secret, Some("on")));

            assert!(host.tls.client_auth.is_none());
            let errors = fx.logger.errors();
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("error building TLS auth config on ingress 'default/web'"));
            assert!(errors[0].contains(secret), "{}", errors[0]);
            assert!(fx.logger.warnings().is_empty());
        }
    }
}
