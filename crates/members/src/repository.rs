use super::*;
use roster_core::ID;
use roster_core::Unique;
use roster_database::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Storage operations for members.
///
/// `insert` and `amend` must enforce username uniqueness atomically with
/// the write and report a clash as [`MemberError::DuplicateUsername`];
/// `taken` is only ever advisory.
#[allow(async_fn_in_trait)]
pub trait MemberRepository {
    async fn members(&self) -> Result<Vec<Member>, MemberError>;
    async fn taken(&self, username: &str, except: Option<ID<Member>>) -> Result<bool, MemberError>;
    async fn insert(&self, member: &Member) -> Result<(), MemberError>;
    async fn amend(
        &self,
        id: ID<Member>,
        username: &str,
        hashword: Option<&str>,
    ) -> Result<Member, MemberError>;
    async fn remove(&self, id: ID<Member>) -> Result<(), MemberError>;
    async fn ping(&self) -> Result<(), MemberError>;
}

impl MemberRepository for Arc<Client> {
    async fn members(&self) -> Result<Vec<Member>, MemberError> {
        self.query(
            const_format::concatcp!(
                "SELECT id, username, hashword, created_at, updated_at FROM ",
                MEMBERS,
                " ORDER BY created_at, id"
            ),
            &[],
        )
        .await
        .map(|rows| rows.into_iter().map(Member::from).collect())
        .map_err(MemberError::from)
    }

    async fn taken(&self, username: &str, except: Option<ID<Member>>) -> Result<bool, MemberError> {
        let except = except.map(|id| id.inner());
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                MEMBERS,
                " WHERE username = $1 AND ($2::UUID IS NULL OR id <> $2)"
            ),
            &[&username, &except],
        )
        .await
        .map(|opt| opt.is_some())
        .map_err(MemberError::from)
    }

    async fn insert(&self, member: &Member) -> Result<(), MemberError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                MEMBERS,
                " (id, username, hashword, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &member.id().inner(),
                &member.username(),
                &member.hashword(),
                &member.created_at(),
                &member.updated_at(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(MemberError::from)
    }

    async fn amend(
        &self,
        id: ID<Member>,
        username: &str,
        hashword: Option<&str>,
    ) -> Result<Member, MemberError> {
        self.query_opt(
            const_format::concatcp!(
                "UPDATE ",
                MEMBERS,
                " SET username = $2, hashword = COALESCE($3, hashword), updated_at = now()
                  WHERE id = $1
                  RETURNING id, username, hashword, created_at, updated_at"
            ),
            &[&id.inner(), &username, &hashword],
        )
        .await
        .map_err(MemberError::from)?
        .map(Member::from)
        .ok_or(MemberError::NotFound)
    }

    async fn remove(&self, id: ID<Member>) -> Result<(), MemberError> {
        match self
            .execute(
                const_format::concatcp!("DELETE FROM ", MEMBERS, " WHERE id = $1"),
                &[&id.inner()],
            )
            .await?
        {
            0 => Err(MemberError::NotFound),
            _ => Ok(()),
        }
    }

    async fn ping(&self) -> Result<(), MemberError> {
        roster_database::ping(self).await.map_err(MemberError::from)
    }
}
