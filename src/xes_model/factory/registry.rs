//! The registry of construction strategies.
//!
//! A [`FactoryRegistry`] holds the set of known factories and the *current
//! default*. The process-wide instance ([`FactoryRegistry::global`]) starts
//! out with [`StandardFactory`] as default and [`FastFactory`] registered.
//!
//! ## Concurrency
//!
//! The current default sits in an [`ArcSwap`]: a reader always sees either
//! the old or the new factory, never a torn value. Nothing orders a
//! `set_default` on one thread against construction racing on another;
//! configure the factory before spawning builders if the choice matters.
//! A reader that already loaded a factory keeps using it for that call.

use std::sync::{Arc, PoisonError, RwLock};

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{FastFactory, SharedFactory, StandardFactory};
use crate::error::{Result, XesError};

static GLOBAL: Lazy<FactoryRegistry> = Lazy::new(FactoryRegistry::new);

pub struct FactoryRegistry {
    current: ArcSwap<SharedFactory>,
    available: RwLock<Vec<SharedFactory>>,
}

impl FactoryRegistry {
    /// A registry with the built-in strategies, `standard` being the default.
    pub fn new() -> Self {
        let registry = Self::with_default(Arc::new(StandardFactory::new()));
        registry.register(Arc::new(FastFactory::default()));
        registry
    }

    /// A registry whose only entry, and default, is `factory`.
    pub fn with_default(factory: SharedFactory) -> Self {
        Self {
            current: ArcSwap::from_pointee(factory.clone()),
            available: RwLock::new(vec![factory]),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static FactoryRegistry {
        &GLOBAL
    }

    /// The factory to use for the construction happening right now.
    pub fn current_default(&self) -> SharedFactory {
        let guard = self.current.load();
        Arc::clone(&**guard)
    }

    /// Make `factory` the default, registering it if needed.
    ///
    /// Takes effect for every construction that loads the default afterwards.
    /// The factory stays in the known set (and alive) after a later swap,
    /// until it is replaced by name or dropped with [`unregister`](Self::unregister).
    pub fn set_default(&self, factory: SharedFactory) {
        self.register(factory.clone());
        debug!(factory = factory.name(), "default attribute factory replaced");
        self.current.store(Arc::new(factory));
    }

    /// Add `factory` to the known set, replacing one with the same name.
    pub fn register(&self, factory: SharedFactory) {
        let mut available = self
            .available
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match available
            .iter_mut()
            .find(|known| known.name().eq_ignore_ascii_case(factory.name()))
        {
            Some(slot) => *slot = factory,
            None => {
                debug!(factory = factory.name(), "attribute factory registered");
                available.push(factory);
            }
        }
    }

    /// Drop the factory called `name` from the known set.
    ///
    /// The current default is never dropped, since `current_default` must
    /// always have something to return; `None` is returned for it as for an
    /// unknown name.
    pub fn unregister(&self, name: &str) -> Option<SharedFactory> {
        let current = self.current_default();
        if current.name().eq_ignore_ascii_case(name) {
            return None;
        }
        let mut available = self
            .available
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let index = available
            .iter()
            .position(|known| known.name().eq_ignore_ascii_case(name))?;
        let removed = available.remove(index);
        debug!(factory = removed.name(), "attribute factory unregistered");
        Some(removed)
    }

    /// All known factories, in registration order.
    pub fn available(&self) -> Vec<SharedFactory> {
        self.available
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lookup(&self, name: &str) -> Option<SharedFactory> {
        self.available
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|known| known.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Make the registered factory called `name` the default.
    pub fn select(&self, name: &str) -> Result<SharedFactory> {
        let factory = self
            .lookup(name)
            .ok_or_else(|| XesError::UnknownFactory(name.to_string()))?;
        debug!(factory = factory.name(), "attribute factory selected");
        self.current.store(Arc::new(factory.clone()));
        Ok(factory)
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The current default factory of the process-wide registry.
pub fn current_default() -> SharedFactory {
    FactoryRegistry::global().current_default()
}

/// Replace the default factory of the process-wide registry.
pub fn set_default(factory: SharedFactory) {
    FactoryRegistry::global().set_default(factory)
}
