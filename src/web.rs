//
// web.rs
// Dicom-Tree-rs
//
// Axum-based viewer: serves a collapsible tree page and the tree JSON for one decoded file until interrupted.
//
// Thales Matheus Mendonça Santos - October 2026

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::tree::TreeNode;

#[derive(Clone)]
struct AppState {
    tree: Arc<TreeNode>,
    title: Arc<str>,
}

/// Routes for a single, already built tree.
pub fn router(tree: TreeNode, title: &str) -> Router {
    let state = AppState {
        tree: Arc::new(tree),
        title: Arc::from(title),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/api/tree", get(tree_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Serve the viewer and block until Ctrl-C.
pub async fn serve(tree: TreeNode, title: &str, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(tree, title);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    println!("Tree view running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;
    info!("viewer closed");
    Ok(())
}

/// Resolves once `signal` fires. A signal that cannot be installed never resolves,
/// leaving the server running until the process is killed.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

async fn root_handler(State(state): State<AppState>) -> Html<String> {
    let page = include_str!("templates/index.html").replace("{{title}}", &escape_html(&state.title));
    Html(page)
}

async fn tree_handler(State(state): State<AppState>) -> Json<TreeNode> {
    Json(state.tree.as_ref().clone())
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
