//! Certificate signer consistency check.
//!
//! Issuance is scheduled while ingresses are synced; this rule only reports
//! signer values that will not lead to a certificate.

use crate::annotations::{keys, AnnotationSource};
use crate::convert::HostUpdater;

/// The only signer the issuer understands.
pub const ACME_SIGNER: &str = "acme";

impl HostUpdater<'_> {
    pub fn build_host_cert_signer(&self, mapper: &dyn AnnotationSource) {
        let signer = mapper.get(keys::CERT_SIGNER);
        if signer.value().is_empty() {
            return;
        }
        if signer.value() != ACME_SIGNER {
            self.logger.warn(&format!(
                "ignoring invalid cert-signer on {}: {}",
                signer.origin(),
                signer.value()
            ));
            return;
        }
        if !self.acme.has_account() {
            self.logger.warn(&format!(
                "ignoring acme signer on {} due to missing endpoint or email config",
                signer.origin()
            ));
        }
    }
}
