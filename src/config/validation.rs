//! Document validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate hosts, paths and CA secrets
//! - Check path and backend reference shape
//! - Check the ACME endpoint URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostConfDocument → Result<(), Vec<ValidationError>>
//! - Annotation values are not validated here; the translator reports them

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::HostConfDocument;
use crate::tls::acme::parse_endpoint;

/// A semantic problem in a translation document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host #{0} has an empty hostname")]
    EmptyHostname(usize),

    #[error("host '{0}' is declared more than once")]
    DuplicateHost(String),

    #[error("host '{host}' declares path '{path}' more than once")]
    DuplicatePath { host: String, path: String },

    #[error("host '{host}' path '{path}' must start with '/'")]
    InvalidPath { host: String, path: String },

    #[error("host '{host}' path '{path}' has an empty backend {field}")]
    EmptyBackendField {
        host: String,
        path: String,
        field: &'static str,
    },

    #[error("host '{host}' has an annotation with an empty key")]
    EmptyAnnotationKey { host: String },

    #[error("CA secret '{0}' is declared more than once")]
    DuplicateCaSecret(String),

    #[error("invalid ACME endpoint '{endpoint}': {reason}")]
    InvalidAcmeEndpoint { endpoint: String, reason: String },
}

/// Validate a document, collecting every problem found.
pub fn validate_document(doc: &HostConfDocument) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut hostnames = HashSet::new();
    for (index, host) in doc.hosts.iter().enumerate() {
        if host.hostname.trim().is_empty() {
            errors.push(ValidationError::EmptyHostname(index));
        } else if !hostnames.insert(host.hostname.as_str()) {
            errors.push(ValidationError::DuplicateHost(host.hostname.clone()));
        }

        let mut paths = HashSet::new();
        for path in &host.paths {
            if !path.path.starts_with('/') {
                errors.push(ValidationError::InvalidPath {
                    host: host.hostname.clone(),
                    path: path.path.clone(),
                });
            }
            if !paths.insert(path.path.as_str()) {
                errors.push(ValidationError::DuplicatePath {
                    host: host.hostname.clone(),
                    path: path.path.clone(),
                });
            }
            for (field, value) in [
                ("namespace", &path.backend.namespace),
                ("name", &path.backend.name),
                ("port", &path.backend.port),
            ] {
                if value.is_empty() {
                    errors.push(ValidationError::EmptyBackendField {
                        host: host.hostname.clone(),
                        path: path.path.clone(),
                        field,
                    });
                }
            }
        }

        if host.annotations.iter().any(|a| a.key.trim().is_empty()) {
            errors.push(ValidationError::EmptyAnnotationKey {
                host: host.hostname.clone(),
            });
        }
    }

    let mut secrets = HashSet::new();
    for secret in &doc.ca_secrets {
        if !secrets.insert(secret.reference.as_str()) {
            errors.push(ValidationError::DuplicateCaSecret(secret.reference.clone()));
        }
    }

    if let Err(reason) = parse_endpoint(&doc.acme.endpoint) {
        errors.push(ValidationError::InvalidAcmeEndpoint {
            endpoint: doc.acme.endpoint.clone(),
            reason,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
