use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use roster_dto::Failure;

/// Everything that can go wrong between a browser and a session.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("session gate not configured")]
    Unconfigured,
    #[error("malformed administrator entry {0:?}")]
    Entry(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        match self.status_code() {
            StatusCode::UNAUTHORIZED => HttpResponse::Unauthorized().json(Failure {
                error: self.to_string(),
            }),
            status => {
                log::error!("{}", self);
                HttpResponse::build(status).json(Failure {
                    error: "internal error".to_string(),
                })
            }
        }
    }
}
