//! Value shapes accepted by the builder methods.
//!
//! Callers pass ordinary Rust values; the `From` impls below sort them into
//! an [`AttributeInput`] by their *static* type before any factory is
//! involved. An `f64` is always a float, even when it has no fractional
//! part, and an integer type is always an integer.
//!
//! `u128` is the one integer type without a `From` impl, since it does not
//! fit [`Number::Integer`]; convert it with `Number::try_from`, which reports
//! values beyond `i128` as [`XesError::UnrepresentableNumber`].

use tracing::warn;

use crate::attribute::{Attribute, AttributeKey, AttributeValue};
use crate::container::AttributeContainer;
use crate::error::{Result, XesError};
use crate::extension::ExtensionRef;
use crate::factory::{AttributeFactory, NestedPayloadPolicy};

/// A numeric input, tagged by the shape it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Float(f64),
}

impl Number {
    /// Narrow to a discrete value, truncating toward zero.
    ///
    /// Values outside the `i64` range, NaN and infinities are rejected
    /// with [`XesError::UnrepresentableNumber`].
    pub fn to_discrete(self) -> Result<i64> {
        match self {
            Number::Integer(v) => {
                i64::try_from(v).map_err(|_| XesError::UnrepresentableNumber(v.to_string()))
            }
            Number::Float(v) => {
                let truncated = v.trunc();
                // i64::MIN is exactly representable as f64; i64::MAX + 1 is the first value out.
                if !truncated.is_finite()
                    || truncated < i64::MIN as f64
                    || truncated >= 9_223_372_036_854_775_808.0
                {
                    return Err(XesError::UnrepresentableNumber(v.to_string()));
                }
                Ok(truncated as i64)
            }
        }
    }
}

macro_rules! number_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Integer(value as i128)
                }
            }

            impl From<$t> for AttributeInput {
                fn from(value: $t) -> Self {
                    AttributeInput::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl TryFrom<u128> for Number {
    type Error = XesError;

    fn try_from(value: u128) -> Result<Self> {
        i128::try_from(value)
            .map(Number::Integer)
            .map_err(|_| XesError::UnrepresentableNumber(value.to_string()))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A value to be turned into an attribute by the current factory.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeInput {
    Literal(String),
    Number(Number),
    Boolean(bool),
    Container(AttributeContainer),
    List(Vec<Attribute>),
}

impl AttributeInput {
    /// Build the attribute through `factory`.
    ///
    /// Integers become `Discrete`, floats become `Continuous`. Container
    /// and list payloads are kept or dropped according to the factory's
    /// [`NestedPayloadPolicy`].
    pub fn build(
        self,
        factory: &dyn AttributeFactory,
        key: AttributeKey,
        extension: Option<ExtensionRef>,
    ) -> Result<Attribute> {
        match self {
            AttributeInput::Literal(text) => Ok(factory.create_literal(key, text, extension)),
            AttributeInput::Number(Number::Float(v)) => {
                Ok(factory.create_continuous(key, v, extension))
            }
            AttributeInput::Number(n) => {
                let value = n.to_discrete()?;
                Ok(factory.create_discrete(key, value, extension))
            }
            AttributeInput::Boolean(b) => Ok(factory.create_boolean(key, b, extension)),
            AttributeInput::Container(payload) => {
                let mut attribute =
                    factory.create_container_attribute(key.clone(), extension.clone());
                match factory.nested_payload_policy() {
                    NestedPayloadPolicy::Preserve => {
                        let payload = payload.rekeyed(key, extension);
                        attribute.set_value(AttributeValue::Container(payload))?;
                    }
                    NestedPayloadPolicy::Discard => {
                        if !payload.is_empty() {
                            warn!(key = %key, dropped = payload.len(), "nested container payload discarded");
                        }
                    }
                }
                Ok(attribute)
            }
            AttributeInput::List(items) => {
                let mut attribute = factory.create_list_attribute(key.clone(), extension);
                match factory.nested_payload_policy() {
                    NestedPayloadPolicy::Preserve => {
                        attribute.set_value(AttributeValue::List(items))?;
                    }
                    NestedPayloadPolicy::Discard => {
                        if !items.is_empty() {
                            warn!(key = %key, dropped = items.len(), "nested list payload discarded");
                        }
                    }
                }
                Ok(attribute)
            }
        }
    }
}

impl From<Number> for AttributeInput {
    fn from(value: Number) -> Self {
        AttributeInput::Number(value)
    }
}

impl From<f32> for AttributeInput {
    fn from(value: f32) -> Self {
        AttributeInput::Number(Number::from(value))
    }
}

impl From<f64> for AttributeInput {
    fn from(value: f64) -> Self {
        AttributeInput::Number(Number::Float(value))
    }
}

impl From<&str> for AttributeInput {
    fn from(value: &str) -> Self {
        AttributeInput::Literal(value.to_string())
    }
}

impl From<String> for AttributeInput {
    fn from(value: String) -> Self {
        AttributeInput::Literal(value)
    }
}

impl From<&String> for AttributeInput {
    fn from(value: &String) -> Self {
        AttributeInput::Literal(value.clone())
    }
}

impl From<bool> for AttributeInput {
    fn from(value: bool) -> Self {
        AttributeInput::Boolean(value)
    }
}

impl From<AttributeContainer> for AttributeInput {
    fn from(value: AttributeContainer) -> Self {
        AttributeInput::Container(value)
    }
}

impl From<Vec<Attribute>> for AttributeInput {
    fn from(value: Vec<Attribute>) -> Self {
        AttributeInput::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;
    use crate::factory::StandardFactory;

    fn key(k: &str) -> AttributeKey {
        AttributeKey::new(k).unwrap()
    }

    #[test]
    fn integer_shapes_become_discrete() {
        let factory = StandardFactory::new();
        let attr = AttributeInput::from(7).build(&factory, key("x"), None).unwrap();
        assert_eq!(attr.kind(), AttributeKind::Discrete);
        assert_eq!(attr.as_discrete(), Some(7));

        let attr = AttributeInput::from(7u8).build(&factory, key("x"), None).unwrap();
        assert_eq!(attr.as_discrete(), Some(7));
    }

    #[test]
    fn float_shapes_become_continuous_even_when_whole() {
        let factory = StandardFactory::new();
        let attr = AttributeInput::from(7.9).build(&factory, key("y"), None).unwrap();
        assert_eq!(attr.kind(), AttributeKind::Continuous);
        assert_eq!(attr.as_continuous(), Some(7.9));

        let attr = AttributeInput::from(3.0_f64).build(&factory, key("z"), None).unwrap();
        assert_eq!(attr.kind(), AttributeKind::Continuous);
    }

    #[test]
    fn float_narrowing_truncates_toward_zero() {
        assert_eq!(Number::from(7.9).to_discrete().unwrap(), 7);
        assert_eq!(Number::from(-7.9).to_discrete().unwrap(), -7);
        assert_eq!(Number::from(0.999).to_discrete().unwrap(), 0);
        assert_eq!(Number::from(-0.5).to_discrete().unwrap(), 0);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(matches!(
            Number::from(u64::MAX).to_discrete(),
            Err(XesError::UnrepresentableNumber(_))
        ));
        assert!(matches!(
            Number::from(i128::MIN).to_discrete(),
            Err(XesError::UnrepresentableNumber(_))
        ));
        assert!(Number::from(f64::NAN).to_discrete().is_err());
        assert!(Number::from(f64::INFINITY).to_discrete().is_err());
        assert!(Number::from(1e19).to_discrete().is_err());
        assert!(Number::from(9_223_372_036_854_775_808.0).to_discrete().is_err());
    }

    #[test]
    fn range_edges_are_representable() {
        assert_eq!(Number::from(i64::MAX).to_discrete().unwrap(), i64::MAX);
        assert_eq!(Number::from(i64::MIN).to_discrete().unwrap(), i64::MIN);
        assert_eq!(Number::from(i64::MIN as f64).to_discrete().unwrap(), i64::MIN);
    }

    #[test]
    fn oversized_integer_input_fails_before_reaching_factory() {
        let factory = StandardFactory::new();
        let result = AttributeInput::from(u64::MAX).build(&factory, key("big"), None);
        assert!(matches!(result, Err(XesError::UnrepresentableNumber(_))));
    }

    #[test]
    fn u128_converts_when_it_fits() {
        let factory = StandardFactory::new();
        let number = Number::try_from(42u128).unwrap();
        let attr = AttributeInput::from(number).build(&factory, key("n"), None).unwrap();
        assert_eq!(attr.as_discrete(), Some(42));

        // Fits i128 but not i64: rejected at narrowing.
        let wide = Number::try_from(u64::MAX as u128 + 1).unwrap();
        assert!(matches!(wide.to_discrete(), Err(XesError::UnrepresentableNumber(_))));

        match Number::try_from(u128::MAX) {
            Err(XesError::UnrepresentableNumber(text)) => assert_eq!(text, u128::MAX.to_string()),
            other => panic!("Expected UnrepresentableNumber, got {other:?}"),
        }
    }

    #[test]
    fn text_and_bool_shapes() {
        let factory = StandardFactory::new();
        let attr = AttributeInput::from("hello").build(&factory, key("s"), None).unwrap();
        assert_eq!(attr.as_literal(), Some("hello"));
        let attr = AttributeInput::from(false).build(&factory, key("b"), None).unwrap();
        assert_eq!(attr.as_boolean(), Some(false));
    }
}
