use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::Payload;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::Method;
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::web;
use roster_core::DASHBOARD_PATH;
use roster_core::LOGIN_PATH;
use roster_core::PROTECTED_PREFIX;
use roster_core::SESSION_COOKIE;
use std::future::Future;
use std::pin::Pin;

/// Extractor for requests carrying a live administrator session.
pub struct Admin(pub Claims);

impl Admin {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn name(&self) -> &str {
        self.0.admin()
    }
}

impl FromRequest for Admin {
    type Error = AuthError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = req.app_data::<web::Data<Gate>>().cloned();
        let token = req.cookie(SESSION_COOKIE);
        Box::pin(async move {
            let gate = gate.ok_or(AuthError::Unconfigured)?;
            let token = token.ok_or(AuthError::Unauthenticated)?;
            gate.authenticate(token.value())
                .await
                .map(Admin)
                .ok_or(AuthError::Unauthenticated)
        })
    }
}

fn guarded(path: &str) -> bool {
    path.strip_prefix(PROTECTED_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn redirect<B>(req: ServiceRequest, location: &'static str) -> ServiceResponse<EitherBody<B>> {
    req.into_response(
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish(),
    )
    .map_into_right_body()
}

/// Request interception for the UI.
///
/// Sends visitors without a live session away from protected pages to the
/// login page, and sends logged-in administrators from the login page to
/// the dashboard. Every other request passes through untouched.
pub async fn intercept<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    // Routing matches on the percent-decoded path, so the gate must too.
    let path = req.match_info().as_str().to_string();
    let protected = guarded(&path);
    let landing = path == LOGIN_PATH && req.method() == Method::GET;
    if protected || landing {
        let gate = req.app_data::<web::Data<Gate>>().cloned();
        let token = req.cookie(SESSION_COOKIE);
        let authed = match (gate, token) {
            (Some(gate), Some(token)) => gate.authenticate(token.value()).await.is_some(),
            _ => false,
        };
        if protected && !authed {
            log::debug!("[gate] redirecting anonymous {} to login", path);
            return Ok(redirect(req, LOGIN_PATH));
        }
        if landing && authed {
            return Ok(redirect(req, DASHBOARD_PATH));
        }
    }
    next.call(req)
        .await
        .map(ServiceResponse::map_into_left_body)
}
