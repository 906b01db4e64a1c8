use super::*;
use roster_auth::password;
use roster_core::ID;

/// Member administration over some backend.
///
/// Validates input, runs the advisory duplicate pre-check for early
/// feedback, and hashes passwords before anything is written. The
/// backend's own uniqueness enforcement has the final word.
pub struct Roster<R = Store> {
    store: R,
}

impl<R> Roster<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }
    pub fn store(&self) -> &R {
        &self.store
    }
}

/// Blank names are refused; anything else is kept exactly as sent.
fn username(raw: &str) -> Result<&str, MemberError> {
    match raw.trim().is_empty() {
        true => Err(MemberError::Validation("Username cannot be empty.".to_string())),
        false => Ok(raw),
    }
}

fn hashed(secret: &str) -> Result<String, MemberError> {
    match secret.trim().is_empty() {
        true => Err(MemberError::Validation("Password cannot be empty.".to_string())),
        false => password::hash(secret).map_err(|e| MemberError::Hashing(e.to_string())),
    }
}

impl<R: MemberRepository> Roster<R> {
    pub async fn list(&self) -> Result<Vec<Member>, MemberError> {
        self.store.members().await
    }

    /// Advisory only: the answer may be stale by the time of any write.
    pub async fn taken(&self, name: &str, except: Option<ID<Member>>) -> Result<bool, MemberError> {
        self.store.taken(name, except).await
    }

    pub async fn create(&self, name: &str, secret: &str) -> Result<Member, MemberError> {
        let name = username(name)?;
        if self.store.taken(name, None).await? {
            return Err(MemberError::DuplicateUsername);
        }
        let member = Member::new(name.to_string(), hashed(secret)?);
        self.store.insert(&member).await?;
        Ok(member)
    }

    /// An absent or blank password keeps the stored hash.
    pub async fn update(
        &self,
        id: ID<Member>,
        name: &str,
        secret: Option<&str>,
    ) -> Result<Member, MemberError> {
        let name = username(name)?;
        if self.store.taken(name, Some(id)).await? {
            return Err(MemberError::DuplicateUsername);
        }
        let hashword = secret
            .filter(|s| !s.trim().is_empty())
            .map(hashed)
            .transpose()?;
        self.store.amend(id, name, hashword.as_deref()).await
    }

    pub async fn delete(&self, id: ID<Member>) -> Result<(), MemberError> {
        self.store.remove(id).await
    }
}
