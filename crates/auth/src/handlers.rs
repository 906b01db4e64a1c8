use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::cookie::time::Duration;
use actix_web::web;
use roster_core::SESSION_COOKIE;
use roster_dto::LoginRequest;
use roster_dto::Success;

fn cookie(value: String, lifetime: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(lifetime)
        .finish()
}

/// Session cookie carrying a freshly signed token.
pub fn issue(token: String, secure: bool) -> Cookie<'static> {
    let lifetime = Duration::seconds(roster_core::SESSION_DURATION.as_secs() as i64);
    cookie(token, lifetime, secure)
}

/// Session cookie that expires on arrival.
pub fn clear(secure: bool) -> Cookie<'static> {
    cookie(String::new(), Duration::ZERO, secure)
}

pub async fn login(gate: web::Data<Gate>, req: web::Json<LoginRequest>) -> HttpResponse {
    match gate.login(&req.username, &req.password).await {
        Ok(token) => HttpResponse::Ok()
            .cookie(issue(token, gate.secure()))
            .json(Success::default()),
        Err(e) => actix_web::ResponseError::error_response(&e),
    }
}

pub async fn logout(gate: web::Data<Gate>, req: HttpRequest) -> HttpResponse {
    let token = req.cookie(SESSION_COOKIE);
    gate.logout(token.as_ref().map(Cookie::value)).await;
    HttpResponse::Ok()
        .cookie(clear(gate.secure()))
        .json(Success::default())
}
