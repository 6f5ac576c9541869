use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use discard_core::{AssetCatalog, ProblemSet};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod page;

use config::WebConfig;
use page::QuizQuery;

struct AppState {
    problems: ProblemSet,
    catalog: AssetCatalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env()?;
    let problems = load_problems(&config)?;
    tracing::info!(count = problems.len(), "problems loaded");

    let state = Arc::new(AppState {
        problems,
        catalog: AssetCatalog::with_base(&config.asset_base_url),
    });
    let app = Router::new()
        .route("/", get(index))
        .route("/quiz", get(quiz))
        .nest_service("/assets", ServeDir::new(&config.asset_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("open http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn load_problems(config: &WebConfig) -> anyhow::Result<ProblemSet> {
    let problems = match &config.problems_path {
        Some(path) => ProblemSet::load(path)?,
        None => ProblemSet::builtin(),
    };

    if config.strict_problems {
        return Ok(problems.validated()?);
    }
    for issue in problems.validate() {
        tracing::warn!(%issue, "problem data issue");
    }
    Ok(problems)
}

async fn index() -> Response {
    (StatusCode::FOUND, [("Location", "/quiz")]).into_response()
}

async fn quiz(State(state): State<Arc<AppState>>, Query(query): Query<QuizQuery>) -> Html<String> {
    let session = query.session(state.problems.len());
    tracing::debug!(?session, "render quiz");
    Html(page::quiz_page(&state.problems, &state.catalog, session))
}
