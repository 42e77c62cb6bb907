//! Conversions into attribute values, including JSON interop.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::{Map, Number, Value};

use super::{AttrKey, AttrMap, AttrValue};

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for AttrValue {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(number: $ty) -> Self {
                    Self::Number(Number::from(number))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats have no JSON representation and become `Nil`.
impl From<f64> for AttrValue {
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or(Self::Nil, Self::Number)
    }
}

impl From<f32> for AttrValue {
    fn from(number: f32) -> Self {
        Self::from(f64::from(number))
    }
}

impl From<Number> for AttrValue {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<AttrMap> for AttrValue {
    fn from(map: AttrMap) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Self>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// JSON object keys arrive as identifier-form keys.
impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => Self::Map(AttrMap::from(object)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::String(text) => Self::Text(text),
            Value::Number(number) => Self::Number(number),
            Value::Bool(flag) => Self::Bool(flag),
            Value::Null => Self::Nil,
        }
    }
}

impl From<Map<String, Value>> for AttrMap {
    fn from(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (AttrKey::Name(key), AttrValue::from(value)))
            .collect()
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(object) => Ok(Self::from(object)),
            other => Err(D::Error::custom(format!(
                "expected an attribute mapping, found {}",
                AttrValue::from(other).kind()
            ))),
        }
    }
}
