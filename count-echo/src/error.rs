use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::{io, net};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error while decoding json payload: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("count is missing or null")]
    MissingValue,

    #[error("error while encoding json payload: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("error while reading config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::DecodeError(_) => StatusCode::BAD_REQUEST,
            Error::MissingValue => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
