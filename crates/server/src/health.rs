use actix_web::HttpResponse;
use actix_web::web;
use roster_core::DASHBOARD_PATH;
use roster_core::LOGIN_PATH;
use roster_members::MemberError;
use roster_members::MemberRepository;
use roster_members::Roster;
use serde_json::json;

/// Liveness, with the storage kind and a map of the routes served.
pub async fn health(roster: web::Data<Roster>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "storage": roster.store().kind(),
        "routes": {
            "root": "/",
            "login": LOGIN_PATH,
            "dashboard": DASHBOARD_PATH,
            "api": {
                "health": "/health",
                "database": "/health/db",
                "login": "/login",
                "logout": "/logout",
                "members": "/members",
            },
        },
    }))
}

pub async fn database(roster: web::Data<Roster>) -> HttpResponse {
    match roster
        .store()
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "connected",
            "storage": roster.store().kind(),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({
            "status": "error",
            "error": match e {
                MemberError::StorageUnavailable => e.to_string(),
                _ => "database unavailable".to_string(),
            },
        })),
    }
}
