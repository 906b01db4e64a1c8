use actix_web::HttpResponse;
use actix_web::http::header;
use roster_core::LOGIN_PATH;

const LOGIN: &str = include_str!("../assets/login.html");
const DASHBOARD: &str = include_str!("../assets/dashboard.html");

fn html(page: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

pub async fn login() -> HttpResponse {
    html(LOGIN)
}

pub async fn dashboard() -> HttpResponse {
    html(DASHBOARD)
}

/// `/`, `/index`, and `/home` all land on the login page.
pub async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .finish()
}
