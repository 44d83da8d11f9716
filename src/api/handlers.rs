//! API Handlers
//!
//! HTTP request handlers for each profile service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tokio::task;

use crate::error::{ProfileError, Result};
use crate::models::{
    HealthResponse, ProfileUpdateRequest, StatsResponse, UpdateProfileResponse, WelcomeResponse,
};
use crate::profile::{CacheManager, PlaceholderSource, ProfileDocument};
use crate::store::{open_store, ProfileStore};

/// Application state shared across all handlers.
///
/// The store handle is built once and passed down; handlers never open their own.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<CacheManager>,
}

impl AppState {
    pub fn new(manager: CacheManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }

    /// Creates state over `store` with the placeholder profile source.
    pub fn with_store(store: Arc<dyn ProfileStore>) -> Self {
        Self::new(CacheManager::new(store, Arc::new(PlaceholderSource)))
    }

    /// Creates state from configuration, opening the configured store.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::with_store(open_store(config)?))
    }
}

/// Runs a blocking manager call off the async executor.
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T>
where
    F: FnOnce(&CacheManager) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let manager = state.manager.clone();
    task::spawn_blocking(move || f(&manager))
        .await
        .map_err(|e| ProfileError::Internal(format!("Blocking task failed: {}", e)))?
}

/// Handler for GET /
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /profile/:ens_name
///
/// Serves the cached profile, refetching it when missing or stale.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(ens_name): Path<String>,
) -> Result<Json<ProfileDocument>> {
    let profile = run_blocking(&state, move |manager| manager.get_profile(&ens_name)).await?;
    Ok(Json(profile))
}

/// Handler for PUT /profile/:ens_name
///
/// Applies the allow-listed fields of the body. No authentication.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Path(ens_name): Path<String>,
    Json(req): Json<ProfileUpdateRequest>,
) -> Result<Json<UpdateProfileResponse>> {
    let profile = run_blocking(&state, move |manager| {
        manager.apply_partial_update(&ens_name, &req.fields)
    })
    .await?;
    Ok(Json(UpdateProfileResponse::new(profile)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let (stats, total_records) = run_blocking(&state, |manager| {
        Ok((manager.stats(), manager.record_count()?))
    })
    .await?;
    Ok(Json(StatsResponse::new(&stats, total_records)))
}
