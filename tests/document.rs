//! End-to-end translation of a document.

use hostconf::backend::BackendMode;
use hostconf::config::parse_document;
use hostconf::driver::translate_document;
use hostconf::observability::Level;

const DOCUMENT: &str = r#"
[acme]
endpoint = "https://acme.example/directory"
emails = []

[defaults]
timeout-client = "50s"
auth-tls-verify-client = "on"

[[ca_secrets]]
reference = "shop/client-ca"
filename = "/var/ca/shop_client-ca.pem"
hash = "c0ffee"

[[ca_secrets]]
reference = "shop/broken"
malformed = "no PEM data found"

[[backends]]
namespace = "shop"
name = "web"
port = "8080"

# passthrough with an HTTP fallback
[[hosts]]
hostname = "secure.example.com"

[[hosts.paths]]
path = "/"
backend = { namespace = "shop", name = "web", port = "8443" }

[[hosts.annotations]]
key = "ssl-passthrough"
value = "true"
source = { namespace = "shop", name = "secure" }

[[hosts.annotations]]
key = "ssl-passthrough-http-port"
value = "8080"
source = { namespace = "shop", name = "secure" }

# client auth with a signer that cannot issue
[[hosts]]
hostname = "admin.example.com"

[[hosts.paths]]
path = "/"
backend = { namespace = "shop", name = "admin", port = "80" }

[[hosts.annotations]]
key = "auth-tls-secret"
value = "shop/client-ca"
source = { namespace = "shop", name = "admin" }

[[hosts.annotations]]
key = "cert-signer"
value = "acme"
source = { namespace = "shop", name = "admin" }

# broken CA and a bad timeout
[[hosts]]
hostname = "legacy.example.com"

[[hosts.paths]]
path = "/app"
backend = { namespace = "shop", name = "legacy", port = "80" }

[[hosts.annotations]]
key = "auth-tls-secret"
value = "shop/broken"
source = { kind = "service", namespace = "shop", name = "legacy" }

[[hosts.annotations]]
key = "timeout-client-fin"
value = "10 sec"
source = { namespace = "shop", name = "legacy" }
"#;

#[test]
fn test_translate_document() {
    let doc = parse_document(DOCUMENT).unwrap();
    let report = translate_document(&doc);

    assert_eq!(report.hosts.len(), 3);

    let secure = &report.hosts[0];
    assert!(secure.host.ssl_passthrough);
    assert_eq!(
        secure.host.http_passthrough_backend.as_ref().map(|id| id.as_str()),
        Some("shop_web_8080")
    );
    assert!(secure.diagnostics.is_empty());

    let admin = &report.hosts[1];
    let auth = admin.host.tls.client_auth.as_ref().unwrap();
    assert_eq!(auth.ca_filename, "/var/ca/shop_client-ca.pem");
    assert_eq!(auth.ca_hash, "c0ffee");
    assert!(!auth.ca_verify_optional);
    assert_eq!(admin.diagnostics.len(), 1);
    assert_eq!(
        admin.diagnostics[0].message,
        "ignoring acme signer on ingress 'shop/admin' due to missing endpoint or email config"
    );
    // defaulted timeouts stay with the proxy default
    assert_eq!(admin.host.timeout.client, None);

    let legacy = &report.hosts[2];
    assert!(legacy.host.tls.client_auth.is_none());
    assert_eq!(legacy.host.timeout.client_fin, None);
    let levels: Vec<Level> = legacy.diagnostics.iter().map(|d| d.level).collect();
    assert_eq!(levels, vec![Level::Error, Level::Warn]);
    assert_eq!(
        legacy.diagnostics[0].message,
        "error building TLS auth config on service 'shop/legacy': secret 'shop/broken' is malformed: no PEM data found"
    );

    assert_eq!(report.count(Level::Error), 1);
    assert_eq!(report.count(Level::Warn), 2);
    assert!(report.has_errors());

    let modes: Vec<(&str, BackendMode)> = report
        .backends
        .iter()
        .map(|b| (b.id.as_str(), b.mode))
        .collect();
    assert_eq!(
        modes,
        vec![
            ("shop_admin_80", BackendMode::Http),
            ("shop_legacy_80", BackendMode::Http),
            ("shop_web_8080", BackendMode::Http),
            ("shop_web_8443", BackendMode::Tcp),
        ]
    );
}

#[test]
fn test_report_serializes_deterministically() {
    let doc = parse_document(DOCUMENT).unwrap();
    let first = serde_json::to_string(&translate_document(&doc)).unwrap();
    let second = serde_json::to_string(&translate_document(&doc)).unwrap();
    assert_eq!(first, second);

    let json: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(json["hosts"][0]["host"]["http_passthrough_backend"], "shop_web_8080");
    assert_eq!(json["hosts"][2]["diagnostics"][1]["level"], "warn");
    assert_eq!(json["backends"][3]["mode"], "tcp");
    assert_eq!(json["backends"][3]["port"], "8443");
}
