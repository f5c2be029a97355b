//! The attribute value model.
//!
//! An [`Attribute`] is a named, typed value. The set of kinds is closed:
//!
//! | Kind | Payload |
//! |------|---------|
//! | `Literal` | text |
//! | `Discrete` | `i64` |
//! | `Continuous` | `f64` |
//! | `Boolean` | `bool` |
//! | `Container` | a nested [`AttributeContainer`] |
//! | `List` | an ordered `Vec<Attribute>` |
//!
//! The kind of an attribute is fixed when it is created. Its payload can be
//! replaced later, but only by a payload of the same kind.
//!
//! An attribute can itself carry attributes (meta-attributes, e.g. the
//! `swevent:valueType` of a parameter). They are built through
//! [`Attributable`] like those of an event.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributable::Attributable;
use crate::container::AttributeContainer;
use crate::error::{Result, XesError};
use crate::extension::ExtensionRef;
use crate::map::AttributeMap;

/// A validated attribute key: never empty, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey(String);

impl AttributeKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(XesError::EmptyKey);
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AttributeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AttributeKey {
    type Error = XesError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for AttributeKey {
    type Error = XesError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Literal,
    Discrete,
    Continuous,
    Boolean,
    Container,
    List,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Literal => "literal",
            AttributeKind::Discrete => "discrete",
            AttributeKind::Continuous => "continuous",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Container => "container",
            AttributeKind::List => "list",
        };
        f.write_str(name)
    }
}

/// Payload of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Literal(String),
    Discrete(i64),
    Continuous(f64),
    Boolean(bool),
    Container(AttributeContainer),
    List(Vec<Attribute>),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Literal(_) => AttributeKind::Literal,
            AttributeValue::Discrete(_) => AttributeKind::Discrete,
            AttributeValue::Continuous(_) => AttributeKind::Continuous,
            AttributeValue::Boolean(_) => AttributeKind::Boolean,
            AttributeValue::Container(_) => AttributeKind::Container,
            AttributeValue::List(_) => AttributeKind::List,
        }
    }
}

/// A named, typed value, optionally namespaced by an extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    key: AttributeKey,
    extension: Option<ExtensionRef>,
    value: AttributeValue,
    meta: AttributeMap,
}

impl Attribute {
    pub fn new(key: AttributeKey, value: AttributeValue, extension: Option<ExtensionRef>) -> Self {
        Self {
            key,
            extension,
            value,
            meta: AttributeMap::new(),
        }
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn extension(&self) -> Option<&ExtensionRef> {
        self.extension.as_ref()
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn kind(&self) -> AttributeKind {
        self.value.kind()
    }

    /// Replace the payload, keeping the kind and the meta-attributes.
    ///
    /// Fails with [`XesError::KindMismatch`] if `value` is of another kind;
    /// the attribute is left untouched in that case.
    pub fn set_value(&mut self, value: AttributeValue) -> Result<()> {
        if value.kind() != self.kind() {
            return Err(XesError::KindMismatch {
                key: self.key.to_string(),
                expected: self.kind(),
                found: value.kind(),
            });
        }
        self.value = value;
        Ok(())
    }

    pub fn into_value(self) -> AttributeValue {
        self.value
    }

    pub fn as_literal(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_discrete(&self) -> Option<i64> {
        match self.value {
            AttributeValue::Discrete(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_continuous(&self) -> Option<f64> {
        match self.value {
            AttributeValue::Continuous(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self.value {
            AttributeValue::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&AttributeContainer> {
        match &self.value {
            AttributeValue::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Attribute]> {
        match &self.value {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to a nested container payload.
    pub fn container_mut(&mut self) -> Option<&mut AttributeContainer> {
        match &mut self.value {
            AttributeValue::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to a list payload.
    pub fn list_mut(&mut self) -> Option<&mut Vec<Attribute>> {
        match &mut self.value {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Attributable for Attribute {
    fn attributes(&self) -> &AttributeMap {
        &self.meta
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.meta
    }
}
