use super::routes::count_handler;
use crate::{util, Config, Result};
use axum::routing::post;
use axum::Router;
use model::payload::{
    PayloadWithBasicTypes, PayloadWithCustomTypes, PayloadWithGenericNumberType,
    PayloadWithPointerTypes,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct Server {
    pub config: Config,
}

impl Server {
    pub fn new(config: Config) -> Server {
        Server { config }
    }

    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self.config.server_addr.parse()?;
        let shutdown = util::shutdown_signal()?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Starting server");

        axum::serve(listener, router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// One route per payload representation, all running the same pipeline.
pub fn router() -> Router {
    Router::new()
        .route("/basic", post(count_handler::<PayloadWithBasicTypes>))
        .route("/pointer", post(count_handler::<PayloadWithPointerTypes>))
        .route("/custom", post(count_handler::<PayloadWithCustomTypes>))
        .route("/generic", post(count_handler::<PayloadWithGenericNumberType>))
        .layer(TraceLayer::new_for_http())
}
