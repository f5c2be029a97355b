//! Extension references.
//!
//! An extension defines the namespace of the attribute keys it declares
//! (`concept:name`, `class:name`, ...). Loading and resolving extension
//! definitions happens elsewhere; this crate only carries the reference
//! so that a later serialization layer can emit the right prefix.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shared handle to an extension.
///
/// Attributes clone the `Arc`, so the extension an attribute points at is
/// the very object that was passed in when it was created.
pub type ExtensionRef = Arc<Extension>;

/// An opaque, immutable extension descriptor.
///
/// Two extensions are equal when their URIs are equal.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    prefix: String,
    uri: String,
}

impl Extension {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Convenience: build the extension already wrapped in an [`ExtensionRef`].
    pub fn shared(
        name: impl Into<String>,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> ExtensionRef {
        Arc::new(Self::new(name, prefix, uri))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Qualify a local attribute name with this extension's prefix.
    pub fn qualify(&self, local: &str) -> String {
        format!("{}:{}", self.prefix, local)
    }
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for Extension {}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uri)
    }
}
