use super::*;
use roster_core::ID;
use std::sync::Arc;
use tokio_postgres::Client;

/// Backend chosen once at startup and shared by every handler.
pub enum Store {
    Postgres(Arc<Client>),
    Memory(Memory),
    /// No database configured. Every data call fails with
    /// [`MemberError::StorageUnavailable`]; non-data routes keep working.
    Offline,
}

impl Store {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
            Self::Offline => "offline",
        }
    }
}

impl From<Arc<Client>> for Store {
    fn from(client: Arc<Client>) -> Self {
        Self::Postgres(client)
    }
}

impl From<Memory> for Store {
    fn from(memory: Memory) -> Self {
        Self::Memory(memory)
    }
}

impl MemberRepository for Store {
    async fn members(&self) -> Result<Vec<Member>, MemberError> {
        match self {
            Self::Postgres(db) => db.members().await,
            Self::Memory(mem) => mem.members().await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
    async fn taken(&self, username: &str, except: Option<ID<Member>>) -> Result<bool, MemberError> {
        match self {
            Self::Postgres(db) => db.taken(username, except).await,
            Self::Memory(mem) => mem.taken(username, except).await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
    async fn insert(&self, member: &Member) -> Result<(), MemberError> {
        match self {
            Self::Postgres(db) => db.insert(member).await,
            Self::Memory(mem) => mem.insert(member).await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
    async fn amend(
        &self,
        id: ID<Member>,
        username: &str,
        hashword: Option<&str>,
    ) -> Result<Member, MemberError> {
        match self {
            Self::Postgres(db) => db.amend(id, username, hashword).await,
            Self::Memory(mem) => mem.amend(id, username, hashword).await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
    async fn remove(&self, id: ID<Member>) -> Result<(), MemberError> {
        match self {
            Self::Postgres(db) => db.remove(id).await,
            Self::Memory(mem) => mem.remove(id).await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
    async fn ping(&self) -> Result<(), MemberError> {
        match self {
            Self::Postgres(db) => db.ping().await,
            Self::Memory(mem) => mem.ping().await,
            Self::Offline => Err(MemberError::StorageUnavailable),
        }
    }
}
