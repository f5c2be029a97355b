use once_cell::sync::Lazy;

use crate::attributable::Attributable;
use crate::error::Result;
use crate::extension::{Extension, ExtensionRef};

static INSTANCE: Lazy<ClassExtension> = Lazy::new(|| ClassExtension {
    extension: Extension::shared("Class", "class", ClassExtension::URI),
});

/// The `class` extension: an event's class name.
#[derive(Debug)]
pub struct ClassExtension {
    extension: ExtensionRef,
}

impl ClassExtension {
    pub const URI: &'static str = "http://www.xes-standard.org/class.xesext";
    pub const KEY_NAME: &'static str = "class:name";

    pub fn instance() -> &'static ClassExtension {
        &INSTANCE
    }

    pub fn extension(&self) -> &ExtensionRef {
        &self.extension
    }

    /// The class name, if present and a literal.
    pub fn extract_name<'a>(&self, element: &'a impl Attributable) -> Option<&'a str> {
        element.attribute(Self::KEY_NAME)?.as_literal()
    }

    /// Set the class name. Blank names are ignored.
    pub fn assign_name<A: Attributable>(&self, element: &mut A, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Ok(());
        }
        element.add_attribute_with_extension(Self::KEY_NAME, name, self.extension.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::map::AttributeMap;
    use std::sync::Arc;

    #[test]
    fn assign_then_extract() {
        let class = ClassExtension::instance();
        let mut event = Event::new(None, AttributeMap::new());
        class.assign_name(&mut event, "Approval").unwrap();

        assert_eq!(class.extract_name(&event), Some("Approval"));
        let attr = event.attribute("class:name").unwrap();
        assert!(Arc::ptr_eq(attr.extension().unwrap(), class.extension()));
    }

    #[test]
    fn blank_names_are_ignored() {
        let class = ClassExtension::instance();
        let mut event = Event::new(None, AttributeMap::new());
        class.assign_name(&mut event, "   ").unwrap();
        assert!(event.is_empty());
        assert_eq!(class.extract_name(&event), None);
    }

    #[test]
    fn non_literal_name_is_not_extracted() {
        let class = ClassExtension::instance();
        let mut event = Event::new(None, AttributeMap::new());
        event.add_attribute("class:name", 3).unwrap();
        assert_eq!(class.extract_name(&event), None);
    }
}
