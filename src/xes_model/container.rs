use crate::attributable::Attributable;
use crate::attribute::AttributeKey;
use crate::extension::ExtensionRef;
use crate::map::AttributeMap;

/// A keyed aggregate of child attributes.
///
/// Used standalone, and as the payload of a `Container` attribute. When
/// nested, `key` is the name it is known by in its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeContainer {
    key: AttributeKey,
    extension: Option<ExtensionRef>,
    attributes: AttributeMap,
}

impl AttributeContainer {
    pub fn new(key: AttributeKey, extension: Option<ExtensionRef>) -> Self {
        Self::with_attributes(key, extension, AttributeMap::new())
    }

    pub fn with_attributes(
        key: AttributeKey,
        extension: Option<ExtensionRef>,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            key,
            extension,
            attributes,
        }
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn extension(&self) -> Option<&ExtensionRef> {
        self.extension.as_ref()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }

    /// The same container, adopted by the attribute `key` with `extension`.
    pub(crate) fn rekeyed(mut self, key: AttributeKey, extension: Option<ExtensionRef>) -> Self {
        self.key = key;
        self.extension = extension;
        self
    }
}

impl Attributable for AttributeContainer {
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}
