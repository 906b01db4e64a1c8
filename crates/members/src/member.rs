use chrono::DateTime;
use chrono::Utc;
use roster_core::ID;
use roster_core::PASSWORD_MASK;
use roster_core::Unique;
use roster_dto::MemberView;

/// Administered credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: ID<Self>,
    username: String,
    hashword: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl Member {
    pub fn new(username: String, hashword: String) -> Self {
        let now = Utc::now();
        Self {
            id: ID::default(),
            username,
            hashword,
            created: now,
            updated: now,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn hashword(&self) -> &str {
        &self.hashword
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated
    }
    /// Renames, optionally rehashes, and bumps the update timestamp.
    pub fn amend(&mut self, username: &str, hashword: Option<&str>) {
        self.username = username.to_string();
        if let Some(hashword) = hashword {
            self.hashword = hashword.to_string();
        }
        self.updated = Utc::now().max(self.created);
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl From<&Member> for MemberView {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().to_string(),
            username: member.username().to_string(),
            password: PASSWORD_MASK.to_string(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}

mod schema {
    use super::*;
    use roster_database::*;

    /// Row layout: `id, username, hashword, created_at, updated_at`.
    impl From<tokio_postgres::Row> for Member {
        fn from(row: tokio_postgres::Row) -> Self {
            Self {
                id: ID::from(row.get::<_, uuid::Uuid>(0)),
                username: row.get::<_, String>(1),
                hashword: row.get::<_, String>(2),
                created: row.get::<_, DateTime<Utc>>(3),
                updated: row.get::<_, DateTime<Utc>>(4),
            }
        }
    }

    /// The unique constraint on username is the authority on duplicates.
    impl Schema for Member {
        fn name() -> &'static str {
            MEMBERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                MEMBERS,
                " (
                    id          UUID PRIMARY KEY,
                    username    TEXT UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_members_created ON ",
                MEMBERS,
                " (created_at);"
            )
        }
    }
}
