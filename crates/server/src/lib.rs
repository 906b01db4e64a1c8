//! Member administration server.
//!
//! Wires the login gate and the member store into a single actix-web
//! server, alongside the health routes and the two UI pages.
//!
//! ## Submodules
//!
//! - [`config`] — Command-line and environment configuration
//! - [`health`] — Liveness and storage probes
//! - [`pages`] — Static login and dashboard pages, root redirects
pub mod config;
pub mod health;
pub mod pages;

pub use config::Config;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpServer;
use actix_web::error::JsonPayloadError;
use actix_web::middleware::Logger;
use actix_web::middleware::from_fn;
use actix_web::web;
use roster_members::MemberError;
use roster_members::Roster;

/// Malformed JSON bodies answer `400 {error}` like every other rejection.
fn malformed(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::debug!("[server] rejected request body: {}", err);
    MemberError::Validation(format!("Malformed request body: {}", err)).into()
}

/// Route table. Expects `web::Data<Gate>` and `web::Data<Roster>` on the app.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(malformed))
        .route("/",                 web::get().to(pages::home))
        .route("/index",            web::get().to(pages::home))
        .route("/home",             web::get().to(pages::home))
        .route("/health",           web::get().to(health::health))
        .route("/health/db",        web::get().to(health::database))
        .route("/login",            web::get().to(pages::login))
        .route("/login",            web::post().to(roster_auth::login))
        .route("/logout",           web::post().to(roster_auth::logout))
        .route("/dashboard/members", web::get().to(pages::dashboard))
        .route("/members",          web::get().to(roster_members::list))
        .route("/members",          web::post().to(roster_members::create))
        .route("/members/{id}",     web::put().to(roster_members::update))
        .route("/members/{id}",     web::delete().to(roster_members::delete));
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let gate = web::Data::new(config.gate()?);
    let roster = web::Data::new(Roster::new(config.store().await?));
    log::info!(
        "starting roster server on {} ({} storage, {} workers)",
        config.bind,
        roster.store().kind(),
        config.workers
    );
    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(roster_auth::intercept))
            .wrap(
                Cors::default()
                    .allowed_methods(["GET", "POST", "PUT", "DELETE"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(gate.clone())
            .app_data(roster.clone())
            .configure(routes)
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;
    use roster_auth::Admins;
    use roster_auth::Crypto;
    use roster_auth::Gate;
    use roster_core::SESSION_COOKIE;
    use roster_dto::MemberView;
    use roster_members::Memory;
    use roster_members::Store;
    use serde_json::Value;
    use serde_json::json;

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .wrap(from_fn(roster_auth::intercept))
                    .app_data(web::Data::new(Gate::new(
                        Admins::parse("root:toor").unwrap(),
                        Crypto::random(),
                        false,
                    )))
                    .app_data(web::Data::new(Roster::new($store)))
                    .configure(routes),
            )
            .await
        };
    }

    macro_rules! login {
        ($app:expr) => {{
            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(json!({ "username": "root", "password": "toor" }))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            resp.response()
                .cookies()
                .find(|c| c.name() == SESSION_COOKIE)
                .map(Cookie::into_owned)
                .unwrap()
        }};
    }

    fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[actix_web::test]
    async fn create_then_list_masks_passwords() {
        let app = app!(Store::from(Memory::default()));
        let cookie = login!(app);
        let req = test::TestRequest::post()
            .uri("/members")
            .cookie(cookie.clone())
            .set_json(json!({ "username": "alice", "password": "pw1" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/members").cookie(cookie).to_request();
        let listed: Vec<MemberView> = test::call_and_read_body_json(&app, req).await;
        let alices = listed.iter().filter(|m| m.username == "alice").collect::<Vec<_>>();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].password, "********");
    }

    #[actix_web::test]
    async fn second_create_conflicts() {
        let app = app!(Store::from(Memory::default()));
        let cookie = login!(app);
        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/members")
                .cookie(cookie.clone())
                .set_json(json!({ "username": "alice", "password": "pw1" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), expected);
        }
    }

    #[actix_web::test]
    async fn dashboard_requires_login() {
        let app = app!(Store::from(Memory::default()));
        let req = test::TestRequest::get().uri("/dashboard/members").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");

        let cookie = login!(app);
        let req = test::TestRequest::get()
            .uri("/dashboard/members")
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/login").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/dashboard/members");
    }

    #[actix_web::test]
    async fn encoded_dashboard_paths_still_require_login() {
        let app = app!(Store::from(Memory::default()));
        for uri in ["/%64ashboard/members", "/dashboard/%6Dembers", "/%64%61shboard/members"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND, "{}", uri);
            assert_eq!(location(&resp), "/login");
        }
    }

    #[actix_web::test]
    async fn forged_cookie_is_rejected() {
        let app = app!(Store::from(Memory::default()));
        let forged = Cookie::new(SESSION_COOKIE, "true");
        let req = test::TestRequest::get()
            .uri("/dashboard/members")
            .cookie(forged.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FOUND);
        let req = test::TestRequest::get().uri("/members").cookie(forged).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn logout_revokes_the_session() {
        let app = app!(Store::from(Memory::default()));
        let cookie = login!(app);
        let req = test::TestRequest::post()
            .uri("/logout")
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let req = test::TestRequest::get().uri("/members").cookie(cookie).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let app = app!(Store::from(Memory::default()));
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "root", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.response().cookies().next().is_none());
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = app!(Store::from(Memory::default()));
        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn root_paths_redirect_to_login() {
        let app = app!(Store::Offline);
        for uri in ["/", "/index", "/home"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/login");
        }
    }

    #[actix_web::test]
    async fn health_reports_storage_and_routes() {
        let app = app!(Store::Offline);
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "offline");
        assert_eq!(body["routes"]["api"]["members"], "/members");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn database_probe() {
        let app = app!(Store::Offline);
        let req = test::TestRequest::get().uri("/health/db").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");

        let app = app!(Store::from(Memory::default()));
        let req = test::TestRequest::get().uri("/health/db").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "connected");
    }

    #[actix_web::test]
    async fn offline_member_routes_fail_generically() {
        let app = app!(Store::Offline);
        let cookie = login!(app);
        let req = test::TestRequest::get().uri("/members").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
