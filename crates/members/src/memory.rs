use super::*;
use roster_core::ID;
use roster_core::Unique;
use tokio::sync::RwLock;

/// In-process member store.
///
/// Keeps members in insertion order. Uniqueness is checked under the same
/// write lock as the write itself, so concurrent inserts of one username
/// cannot both land.
#[derive(Debug, Default)]
pub struct Memory {
    members: RwLock<Vec<Member>>,
}

impl MemberRepository for Memory {
    async fn members(&self) -> Result<Vec<Member>, MemberError> {
        Ok(self.members.read().await.clone())
    }

    async fn taken(&self, username: &str, except: Option<ID<Member>>) -> Result<bool, MemberError> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .filter(|m| Some(m.id()) != except)
            .any(|m| m.username() == username))
    }

    async fn insert(&self, member: &Member) -> Result<(), MemberError> {
        let mut members = self.members.write().await;
        if members.iter().any(|m| m.username() == member.username()) {
            return Err(MemberError::DuplicateUsername);
        }
        members.push(member.clone());
        Ok(())
    }

    async fn amend(
        &self,
        id: ID<Member>,
        username: &str,
        hashword: Option<&str>,
    ) -> Result<Member, MemberError> {
        let mut members = self.members.write().await;
        if !members.iter().any(|m| m.id() == id) {
            return Err(MemberError::NotFound);
        }
        if members
            .iter()
            .any(|m| m.id() != id && m.username() == username)
        {
            return Err(MemberError::DuplicateUsername);
        }
        members
            .iter_mut()
            .find(|m| m.id() == id)
            .map(|m| {
                m.amend(username, hashword);
                m.clone()
            })
            .ok_or(MemberError::NotFound)
    }

    async fn remove(&self, id: ID<Member>) -> Result<(), MemberError> {
        let mut members = self.members.write().await;
        match members.iter().position(|m| m.id() == id) {
            Some(i) => {
                members.remove(i);
                Ok(())
            }
            None => Err(MemberError::NotFound),
        }
    }

    async fn ping(&self) -> Result<(), MemberError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> Member {
        Member::new(name.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = Memory::default();
        for name in ["carol", "alice", "bob"] {
            store.insert(&member(name)).await.unwrap();
        }
        let names = store
            .members()
            .await
            .unwrap()
            .iter()
            .map(|m| m.username().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["carol", "alice", "bob"]);
    }

    #[tokio::test]
    async fn insert_enforces_uniqueness() {
        let store = Memory::default();
        store.insert(&member("alice")).await.unwrap();
        assert!(matches!(
            store.insert(&member("alice")).await,
            Err(MemberError::DuplicateUsername)
        ));
        store.insert(&member("Alice")).await.unwrap();
    }

    #[tokio::test]
    async fn taken_ignores_the_excepted_member() {
        let store = Memory::default();
        let alice = member("alice");
        store.insert(&alice).await.unwrap();
        assert!(store.taken("alice", None).await.unwrap());
        assert!(!store.taken("alice", Some(alice.id())).await.unwrap());
        assert!(!store.taken("bob", None).await.unwrap());
    }

    #[tokio::test]
    async fn amend_and_remove_unknown_ids() {
        let store = Memory::default();
        assert!(matches!(
            store.amend(ID::default(), "x", None).await,
            Err(MemberError::NotFound)
        ));
        assert!(matches!(
            store.remove(ID::default()).await,
            Err(MemberError::NotFound)
        ));
    }
}
