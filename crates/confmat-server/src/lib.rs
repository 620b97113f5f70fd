//! HTTP front end for the confusion-matrix calculator.
//!
//! Serves the two-column form page (inputs and results on the left, a static
//! illustrative image on the right) plus machine-readable endpoints for the
//! same calculate → render pipeline.

pub mod page;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    extract::{self, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Deserializer, Serialize, de};

use confmat_core::svg::render_svg;
use confmat_core::{ConfusionCounts, Evaluation};

/// Server settings supplied by the CLI.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory the side-panel image (and any sibling assets) is served from.
    pub images_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
        }
    }
}

/// Shared server state.
struct AppState {
    images_dir: PathBuf,
}

/// The four form fields. Missing or empty fields read as 0; negative or
/// fractional values fail to deserialize and are rejected by the extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CountsParams {
    #[serde(default, deserialize_with = "count_or_empty")]
    pub tp: u64,
    #[serde(default, rename = "fn", deserialize_with = "count_or_empty")]
    pub fn_: u64,
    #[serde(default, deserialize_with = "count_or_empty")]
    pub tn: u64,
    #[serde(default, deserialize_with = "count_or_empty")]
    pub fp: u64,
}

/// A cleared number input submits `name=`; treat that like a missing field.
fn count_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    struct CountVisitor;

    impl de::Visitor<'_> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a non-negative integer or an empty string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0);
            }
            v.parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

impl From<CountsParams> for ConfusionCounts {
    fn from(p: CountsParams) -> Self {
        ConfusionCounts::new(p.tp, p.fn_, p.tn, p.fp)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn handle_index() -> Html<String> {
    Html(page::render_page(&ConfusionCounts::default(), None))
}

async fn handle_form(Query(params): Query<CountsParams>) -> Html<String> {
    let counts = ConfusionCounts::from(params);
    log::debug!("form submission {counts:?}");
    let evaluation = counts.evaluate();
    Html(page::render_page(&counts, Some(&evaluation)))
}

async fn handle_calculate(Query(params): Query<CountsParams>) -> Json<Evaluation> {
    Json(ConfusionCounts::from(params).evaluate())
}

async fn handle_matrix_svg(Query(params): Query<CountsParams>) -> Response {
    let grid = ConfusionCounts::from(params).grid();
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        render_svg(&grid),
    )
        .into_response()
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: confmat_core::VERSION,
    })
}

async fn handle_image(
    State(state): State<Arc<AppState>>,
    extract::Path(name): extract::Path<String>,
) -> Response {
    let Some(path) = resolve_asset(&state.images_dir, &name) else {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            log::warn!("static image {} unavailable: {e}", path.display());
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}

/// Join `name` onto `dir` if it is a plain file name (no separators, no `..`).
fn resolve_asset(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if name.is_empty() || candidate.file_name()? != candidate.as_os_str() || name.starts_with('.')
    {
        return None;
    }
    Some(dir.join(candidate))
}

fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Build the axum router.
pub fn build_router(config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        images_dir: config.images_dir,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/calculate", get(handle_form))
        .route("/api/v1/calculate", get(handle_calculate))
        .route("/api/v1/matrix.svg", get(handle_matrix_svg))
        .route("/images/{name}", get(handle_image))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP form server until the process is stopped.
pub async fn run_server(config: ServerConfig, host: &str, port: u16) -> std::io::Result<()> {
    if !config.images_dir.join("CM.png").is_file() {
        log::warn!(
            "side-panel image {} not found; the page will show a broken image",
            config.images_dir.join("CM.png").display()
        );
    }
    let app = build_router(config);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app).await
}
