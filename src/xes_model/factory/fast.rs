use super::{AttributeFactory, NestedPayloadPolicy};
use crate::map::AttributeMap;

/// Strategy that pre-sizes every attribute map.
///
/// Worth it when events carry a predictable number of attributes: the map
/// is allocated once instead of growing through several reallocations.
#[derive(Debug, Clone)]
pub struct FastFactory {
    capacity_hint: usize,
    nested_payload: NestedPayloadPolicy,
}

impl FastFactory {
    pub const NAME: &'static str = "fast";
    pub const DEFAULT_CAPACITY_HINT: usize = 16;

    pub fn new(capacity_hint: usize) -> Self {
        Self::with_policy(capacity_hint, NestedPayloadPolicy::default())
    }

    pub fn with_policy(capacity_hint: usize, nested_payload: NestedPayloadPolicy) -> Self {
        Self {
            capacity_hint,
            nested_payload,
        }
    }

    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }
}

impl Default for FastFactory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_HINT)
    }
}

impl AttributeFactory for FastFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "In-memory attributes with pre-sized storage"
    }

    fn create_attribute_map(&self) -> AttributeMap {
        AttributeMap::with_capacity(self.capacity_hint)
    }

    fn nested_payload_policy(&self) -> NestedPayloadPolicy {
        self.nested_payload
    }
}
