//! Liveness and readiness probes.

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    database: String,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    database: String,
    latency_ms: u64,
    timestamp: String,
}

/// Basic health check, only probes the database connection.
pub async fn health_check(pool: web::Data<PgPool>) -> impl Responder {
    let db_status = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    HttpResponse::Ok().json(HealthResponse {
        status: if db_status == "healthy" {
            "ok"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status.to_string(),
    })
}

/// Readiness check, returns 503 when Postgres is unreachable.
pub async fn readiness_check(pool: web::Data<PgPool>) -> impl Responder {
    let start = std::time::Instant::now();
    let (ready, database) = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => (true, "healthy".to_string()),
        Err(e) => (false, format!("unhealthy: {e}")),
    };

    let body = ReadinessResponse {
        ready,
        database,
        latency_ms: start.elapsed().as_millis() as u64,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
