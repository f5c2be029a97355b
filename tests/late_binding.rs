//! These tests swap the process-wide default factory, so they live in their
//! own test binary and take `GLOBAL` before touching the registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use xes_model::factory::{self, FastFactory, StandardFactory};
use xes_model::map::AttributeMap;
use xes_model::{
    Attributable, Attribute, AttributeContainer, AttributeFactory, AttributeKey, Event,
    ExtensionRef, FactoryRegistry, NestedPayloadPolicy,
};

static GLOBAL: Mutex<()> = Mutex::new(());

/// Counts the attributes it builds and marks literals with its tag.
#[derive(Debug)]
struct TaggingFactory {
    tag: &'static str,
    built: AtomicUsize,
}

impl TaggingFactory {
    fn new(tag: &'static str) -> Arc<Self> {
        Arc::new(Self {
            tag,
            built: AtomicUsize::new(0),
        })
    }

    fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl AttributeFactory for TaggingFactory {
    fn name(&self) -> &str {
        self.tag
    }

    fn create_attribute_map(&self) -> AttributeMap {
        AttributeMap::new()
    }

    fn create_literal(
        &self,
        key: AttributeKey,
        value: String,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        self.built.fetch_add(1, Ordering::SeqCst);
        StandardFactory::new().create_literal(key, format!("{}:{}", self.tag, value), extension)
    }

    fn create_discrete(
        &self,
        key: AttributeKey,
        value: i64,
        extension: Option<ExtensionRef>,
    ) -> Attribute {
        self.built.fetch_add(1, Ordering::SeqCst);
        StandardFactory::new().create_discrete(key, value, extension)
    }
}

fn reset() {
    factory::set_default(Arc::new(StandardFactory::new()));
}

fn empty_event() -> Event {
    Event::new(None, AttributeMap::new())
}

#[test]
fn swap_mid_construction_affects_only_later_attributes() {
    let _guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    let first = TaggingFactory::new("f1");
    let second = TaggingFactory::new("f2");

    factory::set_default(first.clone());
    let mut event = empty_event();
    event.add_attribute("a", "x").unwrap();

    factory::set_default(second.clone());
    event.add_attribute("b", "y").unwrap();

    assert_eq!(event.attribute("a").unwrap().as_literal(), Some("f1:x"));
    assert_eq!(event.attribute("b").unwrap().as_literal(), Some("f2:y"));
    assert_eq!(first.built(), 1);
    assert_eq!(second.built(), 1);
    reset();
}

#[test]
fn aggregates_do_not_remember_their_factory() {
    let _guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    let tagging = TaggingFactory::new("tagged");

    // Built while the standard factory is the default...
    let mut event = StandardFactory::new().create_event();
    factory::set_default(tagging.clone());
    // ...but extended after the swap.
    event.add_attribute("n", 5).unwrap();

    assert_eq!(tagging.built(), 1);
    reset();
}

#[test]
fn explicit_factory_bypasses_the_registry() {
    let _guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    let global = TaggingFactory::new("global");
    let injected = TaggingFactory::new("injected");
    factory::set_default(global.clone());

    let mut event = empty_event();
    event
        .add_attribute_with(&*injected, "a", "x", None)
        .unwrap();

    assert_eq!(event.attribute("a").unwrap().as_literal(), Some("injected:x"));
    assert_eq!(global.built(), 0);
    reset();
}

#[test]
fn nested_payload_policy_follows_the_current_factory() {
    let _guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    let payload = || {
        let mut container = AttributeContainer::new(AttributeKey::new("tmp").unwrap(), None);
        container.add_attribute("inner", true).unwrap();
        container
    };

    let mut event = empty_event();
    factory::set_default(Arc::new(StandardFactory::with_policy(
        NestedPayloadPolicy::Discard,
    )));
    event.add_attribute("legacy", payload()).unwrap();
    reset();
    event.add_attribute("kept", payload()).unwrap();

    assert!(event.attribute("legacy").unwrap().as_container().unwrap().is_empty());
    assert_eq!(event.attribute("kept").unwrap().as_container().unwrap().len(), 1);
}

#[test]
fn global_registry_selects_registered_strategies() {
    let _guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    let registry = FactoryRegistry::global();
    registry.register(Arc::new(FastFactory::new(64)));
    registry.select("fast").unwrap();

    assert_eq!(factory::current_default().name(), "fast");
    let event = factory::current_default().create_event();
    assert!(event.attributes().capacity() >= 64);

    registry.select("standard").unwrap();
    assert_eq!(factory::current_default().name(), "standard");
}
