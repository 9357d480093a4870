use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{resolve_distance, Matcher};
use crate::error::ApiError;
use crate::models::{HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score))
        .route("/compatibility/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one candidate against a user
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "user": { "id": "string", "age": 28, ... },
///   "candidate": { "id": "string", "age": 30, "distance": 4.2, ... }
/// }
/// ```
async fn score(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!(%request_id, "Validation failed for score request: {:?}", errors);
        return Err(errors.into());
    }

    let ScoreRequest { user, mut candidate } = req.into_inner();
    resolve_distance(&user, &mut candidate);

    let compatibility = state.matcher.calculate_compatibility(&user, &candidate);

    tracing::info!(
        %request_id,
        "Scored {} against {}: {:.3}",
        user.id,
        candidate.id,
        compatibility.overall
    );

    Ok(HttpResponse::Ok().json(ScoreResponse {
        request_id,
        user_id: user.id,
        candidate_id: candidate.id,
        compatibility,
    }))
}

/// Rank candidates for a user
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "user": { "id": "string", "age": 28, ... },
///   "candidates": [{ "id": "string", "age": 30, ... }],
///   "limit": 20,
///   "minScore": 0.5
/// }
/// ```
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!(%request_id, "Validation failed for rank request: {:?}", errors);
        return Err(errors.into());
    }

    let max_candidates = state.matching.max_candidates();
    if req.candidates.len() > max_candidates {
        tracing::warn!(
            %request_id,
            "Rejecting rank request with {} candidates (max {})",
            req.candidates.len(),
            max_candidates
        );
        return Err(ApiError::TooManyCandidates {
            count: req.candidates.len(),
            max: max_candidates,
        });
    }

    let RankRequest { user, mut candidates, limit, min_score } = req.into_inner();
    let total_candidates = candidates.len();
    // Cap limit to prevent oversized responses
    let limit = limit
        .unwrap_or_else(|| state.matching.default_limit())
        .min(state.matching.max_limit());

    tracing::info!(
        %request_id,
        "Ranking {} candidates for user {}, limit: {}",
        total_candidates,
        user.id,
        limit
    );

    for candidate in &mut candidates {
        resolve_distance(&user, candidate);
    }

    let mut results = state.matcher.rank_users(&user, candidates);

    if let Some(min_score) = min_score {
        results.retain(|r| r.compatibility.overall >= min_score);
    }
    results.truncate(limit);

    tracing::info!(
        %request_id,
        "Returning {} ranked candidates for user {} (from {} candidates)",
        results.len(),
        user.id,
        total_candidates
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        request_id,
        results,
        total_candidates,
    }))
}
