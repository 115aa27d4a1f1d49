mod number;
pub use number::Number;

mod nullable;
pub use nullable::{Nullable, NullableInt};

pub mod payload;
pub use payload::CountPayload;
