use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, Utc};
use ideas_core::{Category, Note};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::db::{IdeaPatch, IdeaRepository, IdeaStats, NewIdea};
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    repo: Arc<Mutex<IdeaRepository>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, repo: IdeaRepository) -> Self {
        Self {
            config,
            repo: Arc::new(Mutex::new(repo)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/ideas", get(list_ideas).post(create_idea))
        .route(
            "/ideas/{id}",
            axum::routing::put(replace_idea)
                .patch(patch_idea)
                .delete(delete_idea),
        )
        .route("/stats", get(stats));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl MessageResponse {
    const fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

#[derive(Debug, Deserialize)]
struct CreateIdeaRequest {
    title: Option<String>,
    content: Option<String>,
    category: Option<Category>,
    date: Option<String>,
    completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ReplaceIdeaRequest {
    title: Option<String>,
    content: Option<String>,
    category: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct PatchIdeaRequest {
    completed: Option<bool>,
    title: Option<String>,
    content: Option<String>,
    category: Option<Category>,
}

async fn list_ideas(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    let ideas = state.repo.lock().await.list()?;
    Ok(Json(ideas))
}

async fn create_idea(
    State(state): State<AppState>,
    payload: Result<Json<CreateIdeaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(request) = payload?;
    let (Some(title), Some(content)) = (request.title, request.content) else {
        return Err(AppError::bad_request("title and content are required"));
    };
    let idea = NewIdea {
        title,
        content,
        category: request.category.unwrap_or_default(),
        date: request
            .date
            .unwrap_or_else(|| Local::now().fixed_offset().to_rfc3339()),
        completed: request.completed.unwrap_or(false),
    };

    let id = state.repo.lock().await.insert(&idea)?;
    tracing::info!(id, category = %idea.category, "Created idea");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Idea added",
            id: Some(id),
        }),
    ))
}

async fn replace_idea(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ReplaceIdeaRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let (Some(title), Some(content)) = (request.title, request.content) else {
        return Err(AppError::bad_request("title and content are required"));
    };
    let category = request.category.unwrap_or_default();

    let matched = state
        .repo
        .lock()
        .await
        .replace(id, &title, &content, &category)?;
    if !matched {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Updated idea");
    Ok(Json(MessageResponse::new("Idea updated")))
}

async fn patch_idea(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PatchIdeaRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let patch = IdeaPatch {
        completed: request.completed,
        title: request.title,
        content: request.content,
        category: request.category,
    };
    if patch.is_empty() {
        return Err(AppError::bad_request("no fields to update"));
    }

    if !state.repo.lock().await.patch(id, &patch)? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, completed = ?patch.completed, "Patched idea");
    Ok(Json(MessageResponse::new("Idea updated")))
}

async fn delete_idea(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    if !state.repo.lock().await.delete(id)? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Deleted idea");
    Ok(Json(MessageResponse::new("Idea deleted")))
}

async fn stats(State(state): State<AppState>) -> Result<Json<IdeaStats>, AppError> {
    let today = Local::now().date_naive();
    let stats = state.repo.lock().await.stats(today)?;
    Ok(Json(stats))
}
