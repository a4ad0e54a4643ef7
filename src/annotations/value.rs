//! Annotation values with provenance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the resource that supplied an annotation value.
///
/// Only ever rendered into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ResourceRef {
    /// Resource kind, e.g. `ingress`.
    #[serde(default = "default_kind")]
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

fn default_kind() -> String {
    "ingress".to_string()
}

impl ResourceRef {
    /// Reference an ingress resource.
    pub fn ingress(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: default_kind(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}/{}'", self.kind, self.namespace, self.name)
    }
}

/// Effective value of one annotation key for a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// Never configured by a resource. Carries the global default, `""` when none.
    Default(String),
    /// Explicitly configured by `source`.
    Set { value: String, source: ResourceRef },
}

impl AnnotationValue {
    /// An unconfigured key without a global default.
    pub fn unset() -> Self {
        AnnotationValue::Default(String::new())
    }

    pub fn set(value: impl Into<String>, source: ResourceRef) -> Self {
        AnnotationValue::Set {
            value: value.into(),
            source,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            AnnotationValue::Default(value) => value,
            AnnotationValue::Set { value, .. } => value,
        }
    }

    /// Resource that configured this value, `None` when defaulted.
    pub fn source(&self) -> Option<&ResourceRef> {
        match self {
            AnnotationValue::Default(_) => None,
            AnnotationValue::Set { source, .. } => Some(source),
        }
    }

    /// True when a resource configured the key, whatever the value.
    pub fn is_configured(&self) -> bool {
        matches!(self, AnnotationValue::Set { .. })
    }

    /// Interpret the value as a boolean. Unrecognized spellings read as `false`.
    pub fn as_bool(&self) -> bool {
        parse_bool(self.value()).unwrap_or(false)
    }

    /// Provenance rendered for diagnostics.
    pub fn origin(&self) -> Origin<'_> {
        Origin(self.source())
    }
}

/// Display adapter for an optional source.
#[derive(Debug, Clone, Copy)]
pub struct Origin<'a>(Option<&'a ResourceRef>);

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(source) => fmt::Display::fmt(source, f),
            None => f.write_str("global config"),
        }
    }
}

/// Parse the boolean spellings accepted in annotations.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
