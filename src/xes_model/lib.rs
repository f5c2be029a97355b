//! # XES Attribute Model
//!
//! Typed, extensible attribute data for the events of a process-mining
//! event log. This crate is the in-memory model only: reading and writing
//! logs, loading extension definitions and grouping events into traces
//! belong to other layers that consume these types.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Builders (attributable.rs)                                 │
//! │  - event.add_attribute("key", value)? chains                │
//! │  - Routes the value by its static shape                     │
//! │  - Looks the factory up on every call                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Factories (factory/)                                       │
//! │  - AttributeFactory: the construction strategy              │
//! │  - FactoryRegistry: known strategies + swappable default    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (attribute.rs, map.rs, event.rs, container.rs)       │
//! │  - Attribute: closed set of six kinds                       │
//! │  - AttributeMap: ordered, one entry per key                 │
//! │  - Event / AttributeContainer: the aggregates               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Late Binding
//!
//! Aggregates never hold on to a factory. Every builder call reads the
//! current default from the process-wide [`FactoryRegistry`], so replacing
//! the default takes effect for the very next attribute, even in the middle
//! of building one event. Code that wants a fixed strategy passes one in
//! explicitly with [`Attributable::add_attribute_with`].
//!
//! ## Module Overview
//!
//! - [`attribute`]: `Attribute`, its kinds and validated keys
//! - [`input`]: value shapes accepted by the builders, numeric narrowing
//! - [`map`]: ordered, uniquely keyed attribute storage
//! - [`event`] / [`container`]: the aggregates
//! - [`attributable`]: the fluent builder trait both aggregates implement
//! - [`factory`]: construction strategies and the registry
//! - [`extension`]: opaque extension references
//! - [`ext`]: standard extensions with typed accessors
//! - [`datetime`]: `xs:dateTime` parsing and formatting
//! - [`config`]: strategy selection from environment and TOML
//! - [`error`]: Error types

pub mod attributable;
pub mod attribute;
pub mod config;
pub mod container;
pub mod datetime;
pub mod error;
pub mod event;
pub mod ext;
pub mod extension;
pub mod factory;
pub mod input;
pub mod map;

pub use attributable::Attributable;
pub use attribute::{Attribute, AttributeKey, AttributeKind, AttributeValue};
pub use container::AttributeContainer;
pub use error::{Result, XesError};
pub use event::{Event, EventId};
pub use extension::{Extension, ExtensionRef};
pub use factory::{AttributeFactory, FactoryRegistry, NestedPayloadPolicy, SharedFactory};
pub use input::{AttributeInput, Number};
pub use map::AttributeMap;
