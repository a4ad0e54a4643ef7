//! Certificate issuer account check.

use url::Url;

use crate::config::schema::AcmeConfig;

/// Reports whether the certificate issuer can be used.
pub trait IssuerAccount: Send + Sync {
    fn has_account(&self) -> bool;
}

/// ACME account built from configuration.
#[derive(Debug, Clone, Default)]
pub struct AcmeAccount {
    endpoint: Option<Url>,
    emails: Vec<String>,
}

impl AcmeAccount {
    /// Build the account from configuration. An endpoint that is not an
    /// `http`/`https` URL is treated as missing.
    pub fn from_config(config: &AcmeConfig) -> Self {
        let endpoint = match parse_endpoint(&config.endpoint) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(endpoint = %config.endpoint, error = %e, "Ignoring invalid ACME endpoint");
                None
            }
        };
        let emails = config
            .emails
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();
        Self { endpoint, emails }
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }
}

impl IssuerAccount for AcmeAccount {
    fn has_account(&self) -> bool {
        self.endpoint.is_some() && !self.emails.is_empty()
    }
}

/// Parse an ACME endpoint. Empty means "not configured".
pub fn parse_endpoint(endpoint: &str) -> Result<Option<Url>, String> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(endpoint).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        scheme => Err(format!("unsupported scheme '{}'", scheme)),
    }
}
