use crate::pipeline;
use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use model::CountPayload;
use tracing::debug;

pub async fn count_handler<P: CountPayload + 'static>(body: Bytes) -> Response {
    match pipeline::process::<P>(&body[..]) {
        Ok(res_body) => (
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            res_body,
        )
            .into_response(),
        Err(e) => {
            debug!(error = %e, status = %e.status_code(), "Rejected request");
            e.into_response()
        }
    }
}
