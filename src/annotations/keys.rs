//! Host-scoped annotation key names.

pub const APP_ROOT: &str = "app-root";
pub const SERVER_ALIAS: &str = "server-alias";
pub const SERVER_ALIAS_REGEX: &str = "server-alias-regex";
pub const VAR_NAMESPACE: &str = "var-namespace";

pub const AUTH_TLS_SECRET: &str = "auth-tls-secret";
pub const AUTH_TLS_VERIFY_CLIENT: &str = "auth-tls-verify-client";
pub const AUTH_TLS_ERROR_PAGE: &str = "auth-tls-error-page";

pub const CERT_SIGNER: &str = "cert-signer";

pub const SSL_PASSTHROUGH: &str = "ssl-passthrough";
pub const SSL_PASSTHROUGH_HTTP_PORT: &str = "ssl-passthrough-http-port";

pub const TIMEOUT_CLIENT: &str = "timeout-client";
pub const TIMEOUT_CLIENT_FIN: &str = "timeout-client-fin";

/// Every key the host translator reads.
pub const HOST_KEYS: &[&str] = &[
    APP_ROOT,
    SERVER_ALIAS,
    SERVER_ALIAS_REGEX,
    VAR_NAMESPACE,
    AUTH_TLS_SECRET,
    AUTH_TLS_VERIFY_CLIENT,
    AUTH_TLS_ERROR_PAGE,
    CERT_SIGNER,
    SSL_PASSTHROUGH,
    SSL_PASSTHROUGH_HTTP_PORT,
    TIMEOUT_CLIENT,
    TIMEOUT_CLIENT_FIN,
];

/// True when `key` is read by the host translator.
pub fn is_host_key(key: &str) -> bool {
    HOST_KEYS.contains(&key)
}
