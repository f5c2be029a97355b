//! # Attribute Factories
//!
//! A factory is the construction strategy for attributes and for the
//! aggregates that hold them. Code that builds events never names a concrete
//! factory; it asks the [`registry`] for the current default at the moment
//! of construction. Swapping the default changes the representation of
//! everything built afterwards, including the remaining attributes of an
//! aggregate that is half-built.
//!
//! ## Contract
//!
//! Every operation is total: keys are validated before they reach a factory
//! (see [`AttributeKey`]), and no operation performs I/O. Factories keep no
//! state between calls that callers could observe. Values produced by
//! different factories compare equal when built from the same input; only
//! the storage layout may differ.
//!
//! ## Built-in strategies
//!
//! | Name | Type | Storage |
//! |------|------|---------|
//! | `standard` | [`StandardFactory`] | grows on demand (the process default) |
//! | `fast` | [`FastFactory`] | attribute maps pre-sized to a capacity hint |
//!
//! Custom strategies implement [`AttributeFactory`]; only [`name`] and
//! [`create_attribute_map`] are required.
//!
//! [`name`]: AttributeFactory::name
//! [`create_attribute_map`]: AttributeFactory::create_attribute_map

mod fast;
pub mod registry;
mod standard;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeKey, AttributeValue};
use crate::container::AttributeContainer;
use crate::event::{Event, EventId};
use crate::extension::ExtensionRef;
use crate::map::AttributeMap;

pub use fast::FastFactory;
pub use registry::{current_default, set_default, FactoryRegistry};
pub use standard::StandardFactory;

/// Shared handle to a factory, as stored in a registry.
pub type SharedFactory = Arc<dyn AttributeFactory>;

/// What the builder does with a caller-supplied nested payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedPayloadPolicy {
    /// Wrap the supplied container or list.
    #[default]
    Preserve,
    /// Keep the factory's fresh, empty payload and drop the supplied one.
    Discard,
}

pub trait AttributeFactory: Send + Sync + fmt::Debug {
    /// Short, unique name used for registry lookup (matched case-insensitively).
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Fresh, empty attribute storage in this factory's representation.
    fn create_attribute_map(&self) -> AttributeMap;

    fn nested_payload_policy(&self) -> NestedPayloadPolicy {
        NestedPayloadPolicy::Preserve
    }

    fn create_literal(
        &self,
        key: AttributeKey,
        value: String,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        Attribute::new(key, AttributeValue::Literal(value), extension)
    }

    fn create_discrete(
        &self,
        key: AttributeKey,
        value: i64,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        Attribute::new(key, AttributeValue::Discrete(value), extension)
    }

    fn create_continuous(
        &self,
        key: AttributeKey,
        value: f64,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        Attribute::new(key, AttributeValue::Continuous(value), extension)
    }

    fn create_boolean(
        &self,
        key: AttributeKey,
        value: bool,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        Attribute::new(key, AttributeValue::Boolean(value), extension)
    }

    /// A `Container` attribute wrapping a fresh, empty container.
    fn create_container_attribute(
        &self,
        key: AttributeKey,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        let container = self.create_attribute_container(key.clone(), extension.clone());
        Attribute::new(key, AttributeValue::Container(container), extension)
    }

    /// A `List` attribute wrapping a fresh, empty list.
    fn create_list_attribute(
        &self,
        key: AttributeKey,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        Attribute::new(key, AttributeValue::List(Vec::new()), extension)
    }

    fn create_attribute_container(
        &self,
        key: AttributeKey,
        extension: Option<ExtensionRef>,
    ) -> AttributeContainer {
        AttributeContainer::with_attributes(key, extension, self.create_attribute_map())
    }

    /// An empty event with a freshly generated id.
    fn create_event(&self) -> Event {
        self.create_event_with_id(EventId::new())
    }

    fn create_event_with_id(&self, id: EventId) -> Event {
        Event::new(Some(id), self.create_attribute_map())
    }

    /// An event with a freshly generated id, adopting `attributes`.
    fn create_event_with_attributes(&self, attributes: AttributeMap) -> Event {
        Event::new(Some(EventId::new()), attributes)
    }

    fn create_event_with_id_and_attributes(&self, id: EventId, attributes: AttributeMap) -> Event {
        Event::new(Some(id), attributes)
    }
}
