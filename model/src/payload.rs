use super::{Nullable, NullableInt, Number};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A request body carrying a single `count` field.
pub trait CountPayload: Serialize + DeserializeOwned + Send {
    /// Whether a count was supplied that can be incremented.
    fn has_count(&self) -> bool;

    fn increment(&mut self);
}

/// Bare integer. A missing key decodes to 0 and cannot be told apart from an
/// explicit 0; `null` is a type error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayloadWithBasicTypes {
    #[serde(default)]
    pub count: i64,
}

impl CountPayload for PayloadWithBasicTypes {
    fn has_count(&self) -> bool {
        true
    }

    fn increment(&mut self) {
        self.count = self.count.increment();
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayloadWithPointerTypes {
    #[serde(default)]
    pub count: Option<i64>,
}

impl CountPayload for PayloadWithPointerTypes {
    fn has_count(&self) -> bool {
        self.count.is_some()
    }

    fn increment(&mut self) {
        if let Some(count) = self.count.as_mut() {
            *count = count.increment();
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayloadWithCustomTypes {
    #[serde(default)]
    pub count: NullableInt,
}

impl CountPayload for PayloadWithCustomTypes {
    fn has_count(&self) -> bool {
        !self.count.is_null()
    }

    fn increment(&mut self) {
        self.count.set(self.count.value().increment());
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "T: Number")]
pub struct PayloadWithGenericNumberType<T = f64> {
    #[serde(default)]
    pub count: Nullable<T>,
}

impl<T: Number> CountPayload for PayloadWithGenericNumberType<T> {
    fn has_count(&self) -> bool {
        !self.count.is_null()
    }

    fn increment(&mut self) {
        self.count.set(self.count.value().increment());
    }
}
