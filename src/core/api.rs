//! HTTP API for Aura Match
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /score - Score one (viewer, candidate) pair
//! - POST /rank - Rank candidates for a viewer
//! - POST /aura/swipe - Apply a swipe to an aura
//! - POST /aura/message - Apply a sent message to an aura
//! - POST /aura/seed - Initial aura from bio and personality

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::{AuraEngine, Matcher, ScoreCache};
use crate::error::{AuraMatchError, Result};
use crate::types::{
    personality, Aura, CompatibilityResult, MessageEvent, PersonalityType, Profile,
    RankedCandidate, SwipeDirection, SwipeEvent,
};

/// App state
#[derive(Debug, Default)]
pub struct AppState {
    pub engine: AuraEngine,
    pub matcher: Matcher,
    pub cache: ScoreCache,
}

/// Score request
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub viewer: Profile,
    pub candidate: Profile,
}

/// Rank request
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub viewer: Profile,
    #[serde(default)]
    pub candidates: Vec<Profile>,
}

/// Swipe request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    #[serde(default)]
    pub aura: Option<Aura>,
    pub direction: SwipeDirection,
    #[serde(default)]
    pub candidate_bio: String,
    pub elapsed_ms: i64,
}

/// Message request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub aura: Option<Aura>,
    pub text: String,
    #[serde(default)]
    pub elapsed_since_previous_ms: Option<i64>,
}

/// Seed request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRequest {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "personality::deserialize_lenient")]
    pub personality_type: Option<PersonalityType>,
}

/// Health response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cached_scores: usize,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/health", get(health))
        .route("/score", post(score))
        .route("/rank", post(rank))
        .route("/aura/swipe", post(swipe))
        .route("/aura/message", post(message))
        .route("/aura/seed", post(seed))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        cached_scores: state.cache.len(),
    })
}

/// Score one pair
async fn score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Json<CompatibilityResult> {
    Json(state.cache.get_or_score(&state.matcher, &req.viewer, &req.candidate))
}

/// Rank candidates for a viewer
async fn rank(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RankRequest>,
) -> Json<Vec<RankedCandidate>> {
    Json(state.cache.rank(&state.matcher, &req.viewer, &req.candidates))
}

/// Apply a swipe
async fn swipe(State(state): State<Arc<AppState>>, Json(req): Json<SwipeRequest>) -> Json<Aura> {
    let event = SwipeEvent::new(req.direction, req.candidate_bio, req.elapsed_ms);
    Json(state.engine.on_swipe(req.aura.as_ref(), &event))
}

/// Apply a sent message
async fn message(State(state): State<Arc<AppState>>, Json(req): Json<MessageRequest>) -> Json<Aura> {
    let event = MessageEvent::new(req.text, req.elapsed_since_previous_ms);
    Json(state.engine.on_message(req.aura.as_ref(), &event))
}

/// Initial aura
async fn seed(State(state): State<Arc<AppState>>, Json(req): Json<SeedRequest>) -> Json<Aura> {
    Json(state.engine.seed(req.bio.as_deref(), req.personality_type))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<()> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AuraMatchError::Server)?;

    tracing::info!(%addr, "aura-match API listening");
    tracing::info!("POST /score, POST /rank, POST /aura/swipe, POST /aura/message, POST /aura/seed, GET /health");

    axum::serve(listener, router)
        .await
        .map_err(AuraMatchError::Server)?;
    Ok(())
}
