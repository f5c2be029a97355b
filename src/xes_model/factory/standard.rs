use super::{AttributeFactory, NestedPayloadPolicy};
use crate::map::AttributeMap;

/// The built-in default strategy: plain, grow-on-demand storage.
#[derive(Debug, Clone, Default)]
pub struct StandardFactory {
    nested_payload: NestedPayloadPolicy,
}

impl StandardFactory {
    pub const NAME: &'static str = "standard";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(nested_payload: NestedPayloadPolicy) -> Self {
        Self { nested_payload }
    }
}

impl AttributeFactory for StandardFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Plain in-memory attributes with storage that grows on demand"
    }

    fn create_attribute_map(&self) -> AttributeMap {
        AttributeMap::new()
    }

    fn nested_payload_policy(&self) -> NestedPayloadPolicy {
        self.nested_payload
    }
}
