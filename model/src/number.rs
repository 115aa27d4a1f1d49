use num_traits::Num;
use serde::de::DeserializeOwned;
use serde::ser::Error;
use serde::{Serialize, Serializer};
use std::fmt;

// Integral floats below this magnitude are written as plain digits
const MAX_INTEGER_LITERAL: f64 = 1e21;

/// A primitive numeric kind that can be carried by a [`Nullable`](crate::Nullable).
///
/// Implemented for every primitive integer and for `f32`/`f64`. The trait is
/// sealed, other types cannot implement it.
pub trait Number:
    Num
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    /// Adds one. Integers wrap around at their maximum.
    fn increment(self) -> Self;

    /// Writes the number as a JSON literal.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }
}

macro_rules! impl_integer {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                fn increment(self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                fn increment(self) -> Self {
                    self + 1.0
                }

                // Integral floats are written without a fraction, 2.0 goes out as `2`
                fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    if !self.is_finite() {
                        return Err(S::Error::custom(format!("unsupported value: {}", self)));
                    }

                    if self.fract() == 0.0 && (*self as f64).abs() < MAX_INTEGER_LITERAL {
                        return serializer.serialize_i128(*self as i128);
                    }

                    self.serialize(serializer)
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

mod private {
    pub trait Sealed {}
}
