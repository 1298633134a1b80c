use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use shim_stack::units::round3;
use shim_stack::{
    Catalog, CatalogError, Solution, Solver, SummaryEntry, UnitScale, validate_target,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
}

#[derive(Deserialize, Serialize)]
struct SolveRequest {
    target: f64,
    #[serde(default)]
    sizes: Option<Vec<f64>>,
    #[serde(default)]
    unit_scale: Option<u32>,
}

#[derive(Serialize)]
struct SolveResponse {
    target: f64,
    width: f64,
    under: f64,
    exact: bool,
    piece_count: usize,
    pieces: Vec<SummaryEntry>,
}

impl From<Solution> for SolveResponse {
    fn from(sol: Solution) -> Self {
        Self {
            target: round3(sol.target()),
            width: round3(sol.width()),
            under: round3(sol.under()),
            exact: sol.is_exact(),
            piece_count: sol.piece_count(),
            pieces: sol
                .summary()
                .into_iter()
                .map(|e| SummaryEntry {
                    size: round3(e.size),
                    count: e.count,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct CatalogResponse {
    unit_scale: UnitScale,
    sizes: Vec<f64>,
}

async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        unit_scale: state.catalog.scale(),
        sizes: state.catalog.sizes(),
    })
}

fn request_catalog(
    req: &SolveRequest,
    default: &Arc<Catalog>,
) -> Result<Arc<Catalog>, CatalogError> {
    if req.sizes.is_none() && req.unit_scale.is_none() {
        return Ok(Arc::clone(default));
    }

    let scale = match req.unit_scale {
        Some(raw) => UnitScale::new(raw)?,
        None => default.scale(),
    };
    let sizes = req.sizes.clone().unwrap_or_else(|| default.sizes());
    Catalog::new(&sizes, scale).map(Arc::new)
}

async fn solve(
    State(state): State<AppState>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /solve"
    );

    let catalog = request_catalog(&req, &state.catalog)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let target = validate_target(req.target, catalog.scale())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    // Each solve allocates its own table; keep it off the async workers
    let solution = tokio::task::spawn_blocking(move || {
        let solver = Solver::new(Catalog::clone(&catalog));
        solver.solve(target)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "solve task failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "solve failed".to_string())
    })?;

    tracing::info!(
        target_inches = solution.target(),
        width_inches = solution.width(),
        pieces = solution.piece_count(),
        "solved"
    );

    Ok(Json(solution.into()))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/catalog", get(catalog))
        .route("/solve", post(solve))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let state = AppState {
        catalog: Arc::new(Catalog::steel()),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app(state)).await.unwrap();
}
