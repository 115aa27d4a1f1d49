mod server;
pub use server::{router, Server};

pub mod routes;
