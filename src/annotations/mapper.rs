//! Annotation lookup.
//!
//! # Responsibilities
//! - Answer "effective value and provenance of key K" for one host
//! - Layer values configured by resources over global defaults

use std::collections::HashMap;

use crate::annotations::value::{AnnotationValue, ResourceRef};

/// Read-only view of the annotations that apply to one host.
pub trait AnnotationSource {
    /// Effective value of `key`. Unknown keys yield an empty default.
    fn get(&self, key: &str) -> AnnotationValue;
}

/// In-memory annotation mapper.
#[derive(Debug, Clone, Default)]
pub struct AnnotationMap {
    defaults: HashMap<String, String>,
    values: HashMap<String, (String, ResourceRef)>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper seeded with global defaults.
    pub fn with_defaults(defaults: HashMap<String, String>) -> Self {
        Self {
            defaults,
            values: HashMap::new(),
        }
    }

    /// Record a value configured by `source`. The first resource to configure a
    /// key wins, later conflicting values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>, source: ResourceRef) -> bool {
        let key = key.into();
        let value = value.into();
        match self.values.get(&key) {
            Some((current, owner)) => {
                if current != &value {
                    tracing::debug!(
                        key = %key,
                        kept_from = %owner,
                        ignored_from = %source,
                        "Conflicting annotation value ignored"
                    );
                }
                false
            }
            None => {
                self.values.insert(key, (value, source));
                true
            }
        }
    }

    /// Builder-style variant of [`AnnotationMap::insert`].
    pub fn with(mut self, key: &str, value: &str, source: &ResourceRef) -> Self {
        self.insert(key, value, source.clone());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AnnotationSource for AnnotationMap {
    fn get(&self, key: &str) -> AnnotationValue {
        if let Some((value, source)) = self.values.get(key) {
            return AnnotationValue::set(value.clone(), source.clone());
        }
        AnnotationValue::Default(self.defaults.get(key).cloned().unwrap_or_default())
    }
}
