//! Local preview host.
//!
//! Pages are rendered per request, so a resume dropped into the asset
//! directory shows up on the next reload. The contact form posts back here
//! and receives the same page with a generated mail draft.

use std::{path::Path, sync::Arc};

use axum::{
    Form, Router,
    extract::{Path as UrlPath, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use folio_core::{ContactDraft, Section, resume::DOWNLOAD_FILE_NAME, resume::RESUME_MIME};
use folio_generator::{RenderedPage, SiteRenderer, render::RenderError};
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Preview host errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("resume error: {0}")]
    Resume(#[from] folio_core::CoreError),

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "The page could not be rendered.",
        )
            .into_response()
    }
}

type Result<T> = std::result::Result<T, ServerError>;

/// Shared state for request handlers.
#[derive(Debug)]
pub struct AppState {
    pub renderer: SiteRenderer,
}

impl AppState {
    #[must_use]
    pub fn new(renderer: SiteRenderer) -> Self {
        Self { renderer }
    }
}

/// Create the preview host router. `assets_dir` is served under `/assets`.
pub fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/resume.pdf", get(resume_pdf))
        .route("/contact", get(contact).post(contact_draft))
        .route("/{section}", get(section))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_page(state, Section::Home, None).await
}

async fn contact(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_page(state, Section::Contact, None).await
}

async fn contact_draft(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<ContactDraft>,
) -> Result<Html<String>> {
    tracing::debug!("generating contact draft");
    render_page(state, Section::Contact, Some(draft)).await
}

async fn section(
    State(state): State<Arc<AppState>>,
    UrlPath(name): UrlPath<String>,
) -> Result<Response> {
    match name.parse::<Section>() {
        Ok(section) => Ok(render_page(state, section, None).await?.into_response()),
        Err(_) => {
            tracing::debug!(%name, "unknown section");
            let page = tokio::task::spawn_blocking(move || state.renderer.render_not_found(&name))
                .await??;
            Ok((StatusCode::NOT_FOUND, Html(page.html)).into_response())
        }
    }
}

async fn resume_pdf(State(state): State<Arc<AppState>>) -> Result<Response> {
    let asset = tokio::task::spawn_blocking(move || state.renderer.resume_asset()).await??;

    match asset {
        Some(asset) => Ok((
            [
                (header::CONTENT_TYPE, RESUME_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
                ),
            ],
            asset.bytes,
        )
            .into_response()),
        None => Ok((StatusCode::NOT_FOUND, "No resume has been provided.").into_response()),
    }
}

/// Render on the blocking pool: every render touches the asset directory.
async fn render_page(
    state: Arc<AppState>,
    section: Section,
    draft: Option<ContactDraft>,
) -> Result<Html<String>> {
    let page: RenderedPage =
        tokio::task::spawn_blocking(move || state.renderer.render(section, draft.as_ref()))
            .await??;

    for warning in &page.warnings {
        tracing::warn!(%section, warning = %warning, "section degraded");
    }

    Ok(Html(page.html))
}
