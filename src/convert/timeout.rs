//! Client timeouts.

use crate::annotations::{keys, AnnotationSource};
use crate::convert::HostUpdater;
use crate::host::Host;

impl HostUpdater<'_> {
    /// Copy explicitly configured client timeouts. Defaulted keys leave the
    /// host untouched so the proxy-wide default applies.
    pub fn build_host_timeout(&self, host: &mut Host, mapper: &dyn AnnotationSource) {
        let cfg = mapper.get(keys::TIMEOUT_CLIENT);
        if cfg.is_configured() {
            host.timeout.client = self.validate_time(&cfg);
        }
        let cfg = mapper.get(keys::TIMEOUT_CLIENT_FIN);
        if cfg.is_configured() {
            host.timeout.client_fin = self.validate_time(&cfg);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::annotations::AnnotationMap;
    use crate::convert::fixture::{source, Fixture};
    use crate::host::{ProxyTime, TimeUnit};

    use super::*;

    #[test]
    fn test_absent_keeps_default() {
        let fx = Fixture::new();
        let mut defaults = HashMap::new();
        defaults.insert(keys::TIMEOUT_CLIENT.to_string(), "50s".to_string());
        let mut host = Host::new("example.com");

        fx.updater()
            .build_host_timeout(&mut host, &AnnotationMap::with_defaults(defaults));

        assert_eq!(host.timeout.client, None);
        assert_eq!(host.timeout.client_fin, None);
        assert!(fx.logger.entries().is_empty());
    }

    #[test]
    fn test_configured_values() {
        let fx = Fixture::new();
        let mapper = AnnotationMap::new()
            .with(keys::TIMEOUT_CLIENT, "30s", &source())
            .with(keys::TIMEOUT_CLIENT_FIN, "500ms", &source());
        let mut host = Host::new("example.com");

        fx.updater().build_host_timeout(&mut host, &mapper);

        assert_eq!(host.timeout.client, Some(ProxyTime::new(30, TimeUnit::Seconds)));
        assert_eq!(host.timeout.client_fin, Some(ProxyTime::new(500, TimeUnit::Millis)));
        assert!(fx.logger.entries().is_empty());
    }

    #[test]
    fn test_invalid_value_is_independent() {
        let fx = Fixture::new();
        let mapper = AnnotationMap::new()
            .with(keys::TIMEOUT_CLIENT, "thirty", &source())
            .with(keys::TIMEOUT_CLIENT_FIN, "1m", &source());
        let mut host = Host::new("example.com");
        host.timeout.client = Some(ProxyTime::new(5, TimeUnit::Seconds));

        fx.updater().build_host_timeout(&mut host, &mapper);

        assert_eq!(host.timeout.client, None);
        assert_eq!(host.timeout.client_fin, Some(ProxyTime::new(1, TimeUnit::Minutes)));
        assert_eq!(
            fx.logger.warnings(),
            vec!["ignoring invalid time format on ingress 'default/web': thirty"]
        );
    }

    #[test]
    fn test_empty_configured_value_warns() {
        let fx = Fixture::new();
        let mapper = AnnotationMap::new().with(keys::TIMEOUT_CLIENT, "", &source());
        let mut host = Host::new("example.com");
        host.timeout.client = Some(ProxyTime::new(5, TimeUnit::Seconds));

        fx.updater().build_host_timeout(&mut host, &mapper);

        assert_eq!(host.timeout.client, None);
        assert_eq!(host.timeout.client_fin, None);
        assert_eq!(
            fx.logger.warnings(),
            vec!["ignoring invalid time format on ingress 'default/web': "]
        );
    }

    #[test]
    fn test_bare_amount_in_milliseconds() {
        let fx = Fixture::new();
        let mapper = AnnotationMap::new().with(keys::TIMEOUT_CLIENT_FIN, "5000", &source());
        let mut host = Host::new("example.com");

        fx.updater().build_host_timeout(&mut host, &mapper);

        assert_eq!(host.timeout.client_fin, Some(ProxyTime::new(5000, TimeUnit::Millis)));
        assert!(fx.logger.entries().is_empty());
    }
}
