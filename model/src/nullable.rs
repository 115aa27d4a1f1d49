use super::Number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A number that may be null.
///
/// Decoding JSON `null` gives a null instance, and so does an absent key as
/// long as the field is marked `#[serde(default)]`. Both cases are reported
/// the same way by [`Nullable::is_null`]. A null instance serializes back to
/// `null`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Nullable<T> {
    value: Option<T>,
}

/// Integer flavour, the one most payloads use.
pub type NullableInt = Nullable<i64>;

impl<T: Number> Nullable<T> {
    pub const fn null() -> Self {
        Nullable { value: None }
    }

    pub const fn new(value: T) -> Self {
        Nullable { value: Some(value) }
    }

    /// Returns the held number, or zero when null.
    pub fn value(&self) -> T {
        self.value.unwrap_or_else(T::zero)
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_option(&self) -> Option<T> {
        self.value
    }
}

impl<T: Number> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Number> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::new(value)
    }
}

impl<T: Number> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable { value }
    }
}

impl<T: Number> From<Nullable<T>> for Option<T> {
    fn from(nullable: Nullable<T>) -> Self {
        nullable.value
    }
}

impl<T: Number> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.value {
            Some(value) => value.serialize_json(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Number> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

impl<T: Number> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "null"),
        }
    }
}
