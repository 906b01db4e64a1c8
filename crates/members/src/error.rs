use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use roster_database::PgErr;
use roster_dto::Failure;
use tokio_postgres::error::SqlState;

#[derive(Debug, thiserror::Error)]
pub enum MemberError {
    #[error("Username already exists.")]
    DuplicateUsername,
    #[error("Member not found.")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("storage is not configured")]
    StorageUnavailable,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("storage failure: {0}")]
    Storage(PgErr),
}

/// Unique violations are duplicates; anything else is a storage failure.
impl From<PgErr> for MemberError {
    fn from(e: PgErr) -> Self {
        match e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
            true => Self::DuplicateUsername,
            false => Self::Storage(e),
        }
    }
}

impl ResponseError for MemberError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUsername => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    /// Server-side failures are logged in full and reported generically.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = match status.is_server_error() {
            false => self.to_string(),
            true => {
                log::error!("[members] {}", self);
                "Internal server error.".to_string()
            }
        };
        HttpResponse::build(status).json(Failure { error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses() {
        assert_eq!(MemberError::DuplicateUsername.status_code(), StatusCode::CONFLICT);
        assert_eq!(MemberError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            MemberError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MemberError::StorageUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn hides_server_side_detail() {
        let resp = MemberError::Hashing("salt exploded".into()).error_response();
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let failure: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(failure["error"], "Internal server error.");
    }
}
