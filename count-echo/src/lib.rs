pub mod http;
pub mod pipeline;

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

mod util;
