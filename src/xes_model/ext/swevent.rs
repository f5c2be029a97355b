//! The software event extension (`swevent`).
//!
//! Describes events recorded from running software: caller and callee
//! coordinates, exceptions, timing, and the application that produced them.
//!
//! All defined attributes live in [`DEFINED`], one row per
//! [`SwEventAttribute`]. Adding an attribute means adding a variant and a row,
//! in the same position.

use once_cell::sync::Lazy;

use crate::attributable::Attributable;
use crate::attribute::{Attribute, AttributeKind};
use crate::error::{Result, XesError};
use crate::extension::{Extension, ExtensionRef};

/// Where a defined attribute is meant to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeLevel {
    Event,
    Log,
    /// Meta-attributes, carried by an attribute rather than an event
    /// (e.g. the value and runtime type of a `swevent:params` entry).
    Meta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwEventAttribute {
    AppName,
    AppNode,
    AppSession,
    AppTier,
    CalleeClass,
    CalleeFilename,
    CalleeInstanceId,
    CalleeIsConstructor,
    CalleeLineNr,
    CalleeMethod,
    CalleePackage,
    CalleeParamSig,
    CalleeReturnSig,
    CallerClass,
    CallerFilename,
    CallerInstanceId,
    CallerIsConstructor,
    CallerLineNr,
    CallerMethod,
    CallerPackage,
    CallerParamSig,
    CallerReturnSig,
    ExCaught,
    ExThrown,
    HasData,
    HasException,
    NanoTime,
    Params,
    ParamValue,
    ReturnValue,
    ThreadId,
    Type,
    ValueType,
}

#[derive(Debug)]
struct DefinedAttribute {
    attribute: SwEventAttribute,
    key: &'static str,
    level: AttributeLevel,
    kind: AttributeKind,
    alias: &'static str,
}

impl DefinedAttribute {
    const fn new(
        attribute: SwEventAttribute,
        key: &'static str,
        level: AttributeLevel,
        kind: AttributeKind,
        alias: &'static str,
    ) -> Self {
        Self {
            attribute,
            key,
            level,
            kind,
            alias,
        }
    }
}

use AttributeKind::{Boolean, Discrete, List, Literal};
use AttributeLevel::{Event, Log, Meta};
use SwEventAttribute as A;

#[rustfmt::skip]
const DEFINED: &[DefinedAttribute] = &[
    DefinedAttribute::new(A::AppName,             "swevent:appName",              Event, Literal, "User defined application name"),
    DefinedAttribute::new(A::AppNode,             "swevent:appNode",              Event, Literal, "User defined application node"),
    DefinedAttribute::new(A::AppSession,          "swevent:appSession",           Event, Literal, "User defined application session"),
    DefinedAttribute::new(A::AppTier,             "swevent:appTier",              Event, Literal, "User defined application tier"),
    DefinedAttribute::new(A::CalleeClass,         "swevent:callee-class",         Event, Literal, "Callee - Class"),
    DefinedAttribute::new(A::CalleeFilename,      "swevent:callee-filename",      Event, Literal, "Callee - File name source code artifact"),
    DefinedAttribute::new(A::CalleeInstanceId,    "swevent:callee-instanceId",    Event, Literal, "Callee - Instance id of class instance"),
    DefinedAttribute::new(A::CalleeIsConstructor, "swevent:callee-isConstructor", Event, Boolean, "Callee - Is a class constructor"),
    DefinedAttribute::new(A::CalleeLineNr,        "swevent:callee-lineNr",        Event, Literal, "Callee - Line number in source code artifact"),
    DefinedAttribute::new(A::CalleeMethod,        "swevent:callee-method",        Event, Literal, "Callee - Method"),
    DefinedAttribute::new(A::CalleePackage,       "swevent:callee-package",       Event, Literal, "Callee - Package"),
    DefinedAttribute::new(A::CalleeParamSig,      "swevent:callee-paramSig",      Event, Literal, "Callee - Parameter signature"),
    DefinedAttribute::new(A::CalleeReturnSig,     "swevent:callee-returnSig",     Event, Literal, "Callee - Return signature"),
    DefinedAttribute::new(A::CallerClass,         "swevent:caller-class",         Event, Literal, "Caller - Class"),
    DefinedAttribute::new(A::CallerFilename,      "swevent:caller-filename",      Event, Literal, "Caller - File name source code artifact"),
    DefinedAttribute::new(A::CallerInstanceId,    "swevent:caller-instanceId",    Event, Literal, "Caller - Instance id of class instance"),
    DefinedAttribute::new(A::CallerIsConstructor, "swevent:caller-isConstructor", Event, Boolean, "Caller - Is a class constructor"),
    DefinedAttribute::new(A::CallerLineNr,        "swevent:caller-lineNr",        Event, Literal, "Caller - Line number in source code artifact"),
    DefinedAttribute::new(A::CallerMethod,        "swevent:caller-method",        Event, Literal, "Caller - Method"),
    DefinedAttribute::new(A::CallerPackage,       "swevent:caller-package",       Event, Literal, "Caller - Package"),
    DefinedAttribute::new(A::CallerParamSig,      "swevent:caller-paramSig",      Event, Literal, "Caller - Parameter signature"),
    DefinedAttribute::new(A::CallerReturnSig,     "swevent:caller-returnSig",     Event, Literal, "Caller - Return signature"),
    DefinedAttribute::new(A::ExCaught,            "swevent:exCaught",             Event, Literal, "Caught exception type"),
    DefinedAttribute::new(A::ExThrown,            "swevent:exThrown",             Event, Literal, "Thrown exception type"),
    DefinedAttribute::new(A::HasData,             "swevent:hasData",              Log,   Boolean, "Has method data"),
    DefinedAttribute::new(A::HasException,        "swevent:hasException",         Log,   Boolean, "Has exception data"),
    DefinedAttribute::new(A::NanoTime,            "swevent:nanotime",             Event, Discrete, "Elapsed nano time"),
    DefinedAttribute::new(A::Params,              "swevent:params",               Event, List,    "List of parameters for the called method"),
    DefinedAttribute::new(A::ParamValue,          "swevent:paramValue",           Meta,  Literal, "A parameter value in the list params"),
    DefinedAttribute::new(A::ReturnValue,         "swevent:returnValue",          Event, Literal, "Return value for the returning method"),
    DefinedAttribute::new(A::ThreadId,            "swevent:threadId",             Event, Literal, "Thread id for generated event"),
    DefinedAttribute::new(A::Type,                "swevent:type",                 Event, Literal, "Event type"),
    DefinedAttribute::new(A::ValueType,           "swevent:valueType",            Meta,  Literal, "A runtime value type for a return or parameter value"),
];

impl SwEventAttribute {
    fn definition(self) -> &'static DefinedAttribute {
        &DEFINED[self as usize]
    }

    /// Fully qualified key, e.g. `swevent:nanotime`.
    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn level(self) -> AttributeLevel {
        self.definition().level
    }

    pub fn kind(self) -> AttributeKind {
        self.definition().kind
    }

    /// Human-readable description.
    pub fn alias(self) -> &'static str {
        self.definition().alias
    }

    pub fn all() -> impl Iterator<Item = SwEventAttribute> {
        DEFINED.iter().map(|d| d.attribute)
    }

    pub fn from_key(key: &str) -> Option<SwEventAttribute> {
        DEFINED.iter().find(|d| d.key == key).map(|d| d.attribute)
    }

    fn expect_kind(self, found: AttributeKind) -> Result<()> {
        if self.kind() != found {
            return Err(XesError::KindMismatch {
                key: self.key().to_string(),
                expected: self.kind(),
                found,
            });
        }
        Ok(())
    }
}

static INSTANCE: Lazy<SoftwareEventExtension> = Lazy::new(|| SoftwareEventExtension {
    extension: Extension::shared(
        "Software Event",
        SoftwareEventExtension::PREFIX,
        SoftwareEventExtension::URI,
    ),
});

#[derive(Debug)]
pub struct SoftwareEventExtension {
    extension: ExtensionRef,
}

impl SoftwareEventExtension {
    pub const URI: &'static str = "http://www.xes-standard.org/swevent.xesext";
    pub const PREFIX: &'static str = "swevent";

    pub fn instance() -> &'static SoftwareEventExtension {
        &INSTANCE
    }

    pub fn extension(&self) -> &ExtensionRef {
        &self.extension
    }

    /// The attributes this extension defines for `level`.
    pub fn defined_attributes(&self, level: AttributeLevel) -> Vec<SwEventAttribute> {
        SwEventAttribute::all().filter(|a| a.level() == level).collect()
    }

    pub fn extract_literal<'a>(
        &self,
        element: &'a impl Attributable,
        attribute: SwEventAttribute,
    ) -> Option<&'a str> {
        element.attribute(attribute.key())?.as_literal()
    }

    pub fn extract_discrete(
        &self,
        element: &impl Attributable,
        attribute: SwEventAttribute,
    ) -> Option<i64> {
        element.attribute(attribute.key())?.as_discrete()
    }

    pub fn extract_boolean(
        &self,
        element: &impl Attributable,
        attribute: SwEventAttribute,
    ) -> Option<bool> {
        element.attribute(attribute.key())?.as_boolean()
    }

    pub fn extract_list<'a>(
        &self,
        element: &'a impl Attributable,
        attribute: SwEventAttribute,
    ) -> Option<&'a [Attribute]> {
        element.attribute(attribute.key())?.as_list()
    }

    pub fn assign_literal<E: Attributable>(
        &self,
        element: &mut E,
        attribute: SwEventAttribute,
        value: &str,
    ) -> Result<()> {
        attribute.expect_kind(AttributeKind::Literal)?;
        element.add_attribute_with_extension(attribute.key(), value, self.extension.clone())?;
        Ok(())
    }

    pub fn assign_discrete<E: Attributable>(
        &self,
        element: &mut E,
        attribute: SwEventAttribute,
        value: i64,
    ) -> Result<()> {
        attribute.expect_kind(AttributeKind::Discrete)?;
        element.add_attribute_with_extension(attribute.key(), value, self.extension.clone())?;
        Ok(())
    }

    pub fn assign_boolean<E: Attributable>(
        &self,
        element: &mut E,
        attribute: SwEventAttribute,
        value: bool,
    ) -> Result<()> {
        attribute.expect_kind(AttributeKind::Boolean)?;
        element.add_attribute_with_extension(attribute.key(), value, self.extension.clone())?;
        Ok(())
    }

    pub fn assign_list<E: Attributable>(
        &self,
        element: &mut E,
        attribute: SwEventAttribute,
        items: Vec<Attribute>,
    ) -> Result<()> {
        attribute.expect_kind(AttributeKind::List)?;
        element.add_attribute_with_extension(attribute.key(), items, self.extension.clone())?;
        Ok(())
    }

    pub fn remove<E: Attributable>(
        &self,
        element: &mut E,
        attribute: SwEventAttribute,
    ) -> Option<Attribute> {
        element.remove_attribute(attribute.key())
    }
}
