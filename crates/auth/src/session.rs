use roster_core::ID;
use roster_core::Unique;
use std::collections::HashMap;
use std::time::SystemTime;
use tokio::sync::RwLock;

/// Live administrator session.
#[derive(Debug, Clone)]
pub struct Session {
    id: ID<Self>,
    admin: String,
    expires: SystemTime,
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Session {
    pub fn new(admin: &str) -> Self {
        Self {
            id: ID::default(),
            admin: admin.to_string(),
            expires: SystemTime::now() + roster_core::SESSION_DURATION,
        }
    }
    pub fn admin(&self) -> &str {
        &self.admin
    }
    pub fn expires_at(&self) -> SystemTime {
        self.expires
    }
    pub fn expired(&self) -> bool {
        self.expires < SystemTime::now()
    }
}

/// Registry of sessions that have not been revoked.
///
/// A token only authenticates while its session id is present here, so
/// logout takes effect immediately even though the token itself would
/// still verify.
#[derive(Debug, Default)]
pub struct Sessions {
    live: RwLock<HashMap<ID<Session>, Session>>,
}

impl Sessions {
    /// Opens a session, sweeping out any that have lapsed.
    pub async fn open(&self, admin: &str) -> Session {
        let session = Session::new(admin);
        let mut live = self.live.write().await;
        live.retain(|_, s| !s.expired());
        live.insert(session.id(), session.clone());
        log::debug!("[sessions] opened {} for {}", session.id(), admin);
        session
    }
    pub async fn alive(&self, id: ID<Session>) -> bool {
        self.live
            .read()
            .await
            .get(&id)
            .map(|s| !s.expired())
            .unwrap_or(false)
    }
    pub async fn revoke(&self, id: ID<Session>) -> bool {
        self.live
            .write()
            .await
            .remove(&id)
            .inspect(|s| log::debug!("[sessions] revoked {} for {}", id, s.admin()))
            .is_some()
    }
    pub async fn len(&self) -> usize {
        self.live.read().await.len()
    }
}
