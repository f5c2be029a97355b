//! # Configuration
//!
//! Selects the construction strategy and its settings. Loaded with
//! [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `XES_FACTORY`.
//! 2. **Config file**: a TOML file passed to [`XesConfig::load`], if it exists.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `factory` | `standard` | Name of the default factory (`standard`, `fast`, or any registered one) |
//! | `capacity_hint` | `16` | Pre-sized attribute map capacity used by `fast` |
//! | `nested_payload` | `preserve` | `preserve` or `discard` caller-supplied container/list payloads |
//!
//! Loading a configuration changes nothing by itself; [`XesConfig::apply`]
//! installs it into a registry.

use std::path::Path;
use std::sync::Arc;

use confique::Config;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, XesError};
use crate::factory::{FactoryRegistry, FastFactory, NestedPayloadPolicy, SharedFactory, StandardFactory};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct XesConfig {
    /// Name of the factory to make the default.
    #[config(env = "XES_FACTORY", default = "standard")]
    pub factory: String,

    /// Initial attribute map capacity for the `fast` factory.
    #[config(default = 16)]
    pub capacity_hint: usize,

    /// What builders do with supplied nested payloads.
    /// When absent, defaults to `preserve`.
    pub nested_payload: Option<NestedPayloadPolicy>,
}

impl Default for XesConfig {
    fn default() -> Self {
        Self {
            factory: StandardFactory::NAME.to_string(),
            capacity_hint: FastFactory::DEFAULT_CAPACITY_HINT,
            nested_payload: None,
        }
    }
}

impl XesConfig {
    /// Load from the environment, then `path` (if given and present), then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn nested_payload(&self) -> NestedPayloadPolicy {
        self.nested_payload.unwrap_or_default()
    }

    /// Register the built-in factories with these settings and select the
    /// configured default.
    ///
    /// The factory name is resolved before anything is registered, so an
    /// unknown name leaves `registry` exactly as it was.
    pub fn apply(&self, registry: &FactoryRegistry) -> Result<SharedFactory> {
        let policy = self.nested_payload();
        let built: [SharedFactory; 2] = [
            Arc::new(StandardFactory::with_policy(policy)),
            Arc::new(FastFactory::with_policy(self.capacity_hint, policy)),
        ];
        let selected = built
            .iter()
            .find(|factory| factory.name().eq_ignore_ascii_case(&self.factory))
            .cloned()
            .or_else(|| registry.lookup(&self.factory))
            .ok_or_else(|| XesError::UnknownFactory(self.factory.clone()))?;

        for factory in built {
            registry.register(factory);
        }
        registry.set_default(selected.clone());
        info!(
            factory = selected.name(),
            capacity_hint = self.capacity_hint,
            nested_payload = ?policy,
            "attribute factory configured"
        );
        Ok(selected)
    }
}
