use super::*;
use roster_core::ID;
use roster_core::Unique;

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub sid: uuid::Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(session: &Session) -> Self {
        let iat = now();
        Self {
            sub: session.admin().to_string(),
            sid: session.id().inner(),
            iat,
            exp: iat + roster_core::SESSION_DURATION.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < now()
    }
    pub fn session(&self) -> ID<Session> {
        ID::from(self.sid)
    }
    pub fn admin(&self) -> &str {
        &self.sub
    }
}
