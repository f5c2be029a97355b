//! Standard XES extensions with typed accessors.
//!
//! Each extension is a process-wide singleton holding its [`Extension`]
//! descriptor. Assigning through an extension creates the attribute with the
//! current default factory and attaches the extension.
//!
//! [`Extension`]: crate::extension::Extension

pub mod class;
pub mod swevent;

pub use class::ClassExtension;
pub use swevent::{AttributeLevel, SoftwareEventExtension, SwEventAttribute};
