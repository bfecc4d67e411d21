//! HTTP surface for the steady-mind wellness service
//!
//! Axum routes for burnout analysis and static wellness content, with
//! permissive CORS for browser clients. Health, info, and metrics are
//! plain JSON.

use crate::analysis::{AnalysisResponse, BurnoutLevel};
use crate::classify::classify;
use crate::config::Config;
use crate::error::{Result, SteadyMindError};
use crate::providers::Analyzer;
use crate::recommend::recommend;
use crate::wellness::{WellnessResponse, wellness_for};
use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<Config>,
    pub analyzer: Arc<dyn Analyzer>,
    pub metrics: Arc<Mutex<HttpMetrics>>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl HttpState {
    pub fn new(config: Arc<Config>, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            config,
            analyzer,
            metrics: Arc::new(Mutex::new(HttpMetrics::new())),
            started_at: chrono::Utc::now(),
        }
    }
}

/// Metrics for HTTP server
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    pub total_requests: u64,
    pub last_request_unix: u64,
    pub errors_total: u64,
    /// Analyses answered by keyword rules after a provider failure
    pub fallbacks_total: u64,
    pub latencies: Vec<f64>, // ring buffer for p95
    pub levels_count: HashMap<String, u64>,
}

impl HttpMetrics {
    fn new() -> Self {
        Self {
            total_requests: 0,
            last_request_unix: std::time::SystemTime::UNIX_EPOCH
                .elapsed()
                .unwrap_or_default()
                .as_secs(),
            errors_total: 0,
            fallbacks_total: 0,
            latencies: Vec::with_capacity(256),
            levels_count: HashMap::new(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Info endpoint
pub async fn info_handler(State(state): State<HttpState>) -> impl IntoResponse {
    let uptime_secs = (chrono::Utc::now() - state.started_at).num_seconds();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "llm": {
                "provider": state.analyzer.name(),
                "model": state.config.system.llm_model,
                "base_url": state.config.system.llm_base_url
            },
            "server": {
                "bind": state.config.runtime.http_bind.to_string(),
                "started_at": state.started_at.to_rfc3339(),
                "uptime_secs": uptime_secs
            }
        })
        .to_string(),
    )
}

/// Metrics endpoint
pub async fn metrics_handler(State(state): State<HttpState>) -> impl IntoResponse {
    let metrics = state.metrics.lock().await.clone();

    // Compute latency stats
    let (avg_latency_ms, p95_latency_ms) = if metrics.latencies.is_empty() {
        (None, None)
    } else {
        let sum: f64 = metrics.latencies.iter().sum();
        let avg = sum / metrics.latencies.len() as f64;
        let mut sorted = metrics.latencies.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let p95_idx = (sorted.len() as f64 * 0.95) as usize;
        let p95 = sorted.get(p95_idx).copied();
        (Some(avg), p95)
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "metrics_version": "1",
            "total_requests": metrics.total_requests,
            "last_request_unix": metrics.last_request_unix,
            "errors_total": metrics.errors_total,
            "fallbacks_total": metrics.fallbacks_total,
            "avg_latency_ms": avg_latency_ms,
            "p95_latency_ms": p95_latency_ms,
            "analyses_by_level": metrics.levels_count
        })
        .to_string(),
    )
}

/// Analyze endpoint: journal text in, assessment plus recommendations out
pub async fn analyze_handler(
    State(state): State<HttpState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<AnalysisResponse>> {
    let text = body
        .get("text")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    if text.is_empty() {
        return Err(SteadyMindError::Validation {
            message: "Valid text input is required".to_string(),
        });
    }
    let capped: String = text
        .chars()
        .take(state.config.analysis.max_text_chars)
        .collect();

    let request_id = uuid::Uuid::new_v4();
    let (assessment, used_fallback) = match state.analyzer.analyze(&capped).await {
        Ok(assessment) => (assessment, false),
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                error = %e,
                "analyzer failed, falling back to keyword rules"
            );
            (classify(&capped), true)
        }
    };
    let recommendations = recommend(&assessment, &capped);

    {
        let mut m = state.metrics.lock().await;
        if used_fallback {
            m.fallbacks_total = m.fallbacks_total.saturating_add(1);
        }
        *m.levels_count
            .entry(assessment.burnout_level.as_str().to_string())
            .or_insert(0) += 1;
    }

    let response = AnalysisResponse::new(assessment, recommendations);
    // Journal text stays out of the logs
    tracing::info!(
        request_id = %request_id,
        burnout_level = %response.burnout_level,
        sentiment = %response.sentiment,
        confidence = response.confidence,
        fallback = used_fallback,
        "analysis completed"
    );

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct WellnessQuery {
    pub level: Option<String>,
}

/// Wellness endpoint: detox schedule and breathing data for a level
pub async fn wellness_handler(
    Query(params): Query<WellnessQuery>,
) -> Result<Json<WellnessResponse>> {
    let level = match params.level.as_deref() {
        None => BurnoutLevel::Low,
        Some(raw) => raw.parse().map_err(|_| SteadyMindError::Validation {
            message: format!("unknown burnout level '{raw}'"),
        })?,
    };
    Ok(Json(wellness_for(level)))
}

/// Build the service router with CORS and latency tracking
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/wellness", get(wellness_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            |State(metrics): State<Arc<Mutex<HttpMetrics>>>,
             req: axum::http::Request<Body>,
             next: axum::middleware::Next| async move {
                let is_api = req.uri().path().starts_with("/api/");
                let start = if is_api {
                    Some(std::time::Instant::now())
                } else {
                    None
                };
                let resp = next.run(req).await;
                if let Some(start_time) = start {
                    let latency_ms = start_time.elapsed().as_millis() as f64;
                    let mut m = metrics.lock().await;
                    if latency_ms > 0.0 {
                        m.latencies.push(latency_ms);
                        if m.latencies.len() > 256 {
                            m.latencies.remove(0);
                        }
                    }
                    if !resp.status().is_success() {
                        m.errors_total = m.errors_total.saturating_add(1);
                    }
                    m.total_requests = m.total_requests.saturating_add(1);
                    m.last_request_unix = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap_or_default()
                        .as_secs();
                }
                resp
            },
        ))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(config: Arc<Config>, analyzer: Arc<dyn Analyzer>) -> Result<()> {
    let state = HttpState::new(config.clone(), analyzer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.runtime.http_bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting HTTP server on {}", config.runtime.http_bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
