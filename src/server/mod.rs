// SPDX-License-Identifier: MIT

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::EXAMPLE_CATEGORIES;
use crate::error::ExprGraphError;
use crate::expr::{DocumentCompiler, ExpressionCompiler};
use crate::graph::NodeCategory;
use crate::visualize::{visualize_ast, visualize_heuristic, Mode};

/// Settings shared by all handlers
#[derive(Debug, Clone, Copy)]
pub struct ServerState {
    /// Mode used when a request does not name one
    pub default_mode: Mode,
}

impl ServerState {
    pub fn new(default_mode: Mode) -> Self {
        Self { default_mode }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/examples", get(list_examples))
        .route("/api/legend", get(legend))
        .route("/api/visualize", post(visualize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(port: u16, default_mode: Mode) -> Result<(), ExprGraphError> {
    let app = router(ServerState::new(default_mode));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{} (default mode: {})", addr, default_mode);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_examples() -> Json<Value> {
    Json(json!(EXAMPLE_CATEGORIES))
}

async fn legend() -> Json<Value> {
    let entries: Vec<Value> = NodeCategory::ALL
        .iter()
        .map(|category| {
            json!({
                "category": category,
                "description": category.description(),
                "style": category.style(),
            })
        })
        .collect();
    Json(json!(entries))
}

#[derive(Deserialize)]
struct VisualizeRequest {
    /// Falls back to the server's configured mode
    mode: Option<Mode>,
    /// Raw expression text (heuristic mode) or a serialized AST document
    expression: Option<String>,
    /// Inline AST document (structured mode)
    ast: Option<Value>,
}

async fn visualize(
    State(state): State<ServerState>,
    Json(payload): Json<VisualizeRequest>,
) -> (StatusCode, Json<Value>) {
    match payload.mode.unwrap_or(state.default_mode) {
        Mode::Heuristic => match payload.expression {
            Some(expression) => {
                log::info!("Heuristic visualization of: {}", expression);
                let viz = visualize_heuristic(&expression);
                (StatusCode::OK, Json(json!(viz)))
            }
            None => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Heuristic mode requires an expression"})),
            ),
        },
        Mode::Structured => {
            let compiler = DocumentCompiler::new();
            let compiled = match (payload.ast, payload.expression) {
                (Some(ast), _) => compiler.compile_value(ast),
                (None, Some(document)) => compiler.compile(&document),
                (None, None) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": "Structured mode requires an ast document"})),
                    )
                }
            };

            match compiled {
                Ok(ast) => {
                    log::info!("Structured visualization of: {}", ast);
                    (StatusCode::OK, Json(json!(visualize_ast(&ast))))
                }
                Err(e) => {
                    log::warn!("Rejected AST document: {}", e);
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"error": format!("Compilation failed: {}", e)})),
                    )
                }
            }
        }
    }
}
