//! # Fluent attribute building
//!
//! [`Attributable`] is implemented by both aggregates, [`Event`] and
//! [`AttributeContainer`]. Beyond access to the underlying
//! [`AttributeMap`], it offers chaining builder methods:
//!
//! ```
//! use xes_model::{Attributable, Event, EventId};
//! use xes_model::map::AttributeMap;
//!
//! let mut event = Event::new(Some(EventId::new()), AttributeMap::new());
//! event
//!     .add_attribute("concept:name", "Register request")?
//!     .add_attribute("cost:total", 12.5)?
//!     .add_attribute("org:resource_count", 3)?
//!     .add_attribute("urgent", true)?;
//!
//! assert_eq!(event.attributes().len(), 4);
//! # Ok::<(), xes_model::XesError>(())
//! ```
//!
//! ## Late binding
//!
//! `add_attribute`, `add_attribute_with_extension` and `add_discrete` look
//! the factory up in the process-wide registry on *every call*. Nothing is
//! cached on the aggregate, so swapping the default between two calls on the
//! same event changes how the second attribute is built.
//!
//! `add_attribute_with` takes the factory explicitly, for callers that pass
//! the construction strategy around instead of relying on the global one.
//!
//! ## Errors
//!
//! An empty or blank key is rejected with [`XesError::EmptyKey`] and an
//! integer that does not fit `i64` with [`XesError::UnrepresentableNumber`].
//! In both cases the aggregate is left unchanged.
//!
//! [`Event`]: crate::event::Event
//! [`AttributeContainer`]: crate::container::AttributeContainer
//! [`XesError::EmptyKey`]: crate::error::XesError::EmptyKey
//! [`XesError::UnrepresentableNumber`]: crate::error::XesError::UnrepresentableNumber

use crate::attribute::{Attribute, AttributeKey};
use crate::error::Result;
use crate::extension::ExtensionRef;
use crate::factory::{self, AttributeFactory};
use crate::input::{AttributeInput, Number};
use crate::map::AttributeMap;

pub trait Attributable {
    fn attributes(&self) -> &AttributeMap;

    fn attributes_mut(&mut self) -> &mut AttributeMap;

    fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes().get(key)
    }

    fn remove_attribute(&mut self, key: &str) -> Option<Attribute> {
        self.attributes_mut().remove(key)
    }

    /// Add (or replace) the attribute `key`, built by the current default factory.
    fn add_attribute(&mut self, key: &str, value: impl Into<AttributeInput>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let factory = factory::current_default();
        self.add_attribute_with(factory.as_ref(), key, value, None)
    }

    /// Like [`add_attribute`](Self::add_attribute), attaching `extension`.
    fn add_attribute_with_extension(
        &mut self,
        key: &str,
        value: impl Into<AttributeInput>,
        extension: ExtensionRef,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let factory = factory::current_default();
        self.add_attribute_with(factory.as_ref(), key, value, Some(extension))
    }

    /// Add a `Discrete` attribute from any number, truncating floats toward zero.
    fn add_discrete(
        &mut self,
        key: &str,
        value: impl Into<Number>,
        extension: Option<ExtensionRef>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let key = AttributeKey::new(key)?;
        let value = value.into().to_discrete()?;
        let attribute = factory::current_default().create_discrete(key, value, extension);
        self.attributes_mut().insert(attribute);
        Ok(self)
    }

    /// Add (or replace) the attribute `key`, built by `factory`.
    fn add_attribute_with(
        &mut self,
        factory: &dyn AttributeFactory,
        key: &str,
        value: impl Into<AttributeInput>,
        extension: Option<ExtensionRef>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let key = AttributeKey::new(key)?;
        let attribute = value.into().build(factory, key, extension)?;
        self.attributes_mut().insert(attribute);
        Ok(self)
    }
}
