use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

use crate::error::{HuntError, Result};

/// What every request gets back. Built once from the render result and never mutated.
#[derive(Debug, Clone)]
pub enum ServedPage {
    Page(String),
    RenderError(String),
}

impl ServedPage {
    pub fn from_render(rendered: &Result<String>) -> Self {
        match rendered {
            Ok(page) => ServedPage::Page(page.clone()),
            Err(e) => ServedPage::RenderError(e.to_string()),
        }
    }
}

/// Same response on every method and path.
pub fn build_router(page: Arc<ServedPage>) -> Router {
    Router::new().fallback(serve_page).with_state(page)
}

async fn serve_page(State(page): State<Arc<ServedPage>>) -> Response {
    match page.as_ref() {
        ServedPage::Page(html) => Html(html.clone()).into_response(),
        // Render failures go into the body with a 200, like the page would.
        ServedPage::RenderError(msg) => msg.clone().into_response(),
    }
}

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| HuntError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve `page` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, page: Arc<ServedPage>) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "serving dump page");
    }
    axum::serve(listener, build_router(page))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(HuntError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("ctrl-c received, shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
