use super::*;
use roster_dto::CreateMember;
use roster_dto::MemberView;
use roster_dto::UpdateMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Request a validated form turns into.
#[derive(Debug, Clone)]
pub enum Submission {
    Create(CreateMember),
    Update(String, UpdateMember),
}

/// The single add/edit form.
///
/// `Idle -> Submitting` on [`Form::submit`], then back to `Idle` on
/// [`Form::settle`]: cleared after a success, left intact after a failure so
/// the admin can correct it. Nothing is retried.
#[derive(Debug, Default)]
pub struct Form {
    username: String,
    password: String,
    editing: Option<String>,
    phase: Phase,
}

impl Form {
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fill(&mut self, username: &str, password: &str) {
        self.username = username.to_string();
        self.password = password.to_string();
    }

    /// Switches to edit mode. The password is never carried over; an empty
    /// one keeps whatever the server has stored.
    pub fn edit(&mut self, member: &MemberView) {
        self.username = member.username.clone();
        self.password.clear();
        self.editing = Some(member.id.clone());
    }

    pub fn cancel(&mut self) {
        self.username.clear();
        self.password.clear();
        self.editing = None;
    }

    /// Advisory checks against the loaded list.
    pub fn validate(&self, members: &[MemberView]) -> Result<Submission, ConsoleError> {
        let username = self.username.as_str();
        if username.trim().is_empty() {
            return Err(ConsoleError::Invalid("Username is required".to_string()));
        }
        if self.editing.is_none() && self.password.trim().is_empty() {
            return Err(ConsoleError::Invalid("Password is required".to_string()));
        }
        let lower = username.to_lowercase();
        if members
            .iter()
            .filter(|m| Some(m.id.as_str()) != self.editing())
            .any(|m| m.username.to_lowercase() == lower)
        {
            return Err(ConsoleError::Invalid("Username already exists.".to_string()));
        }
        Ok(match &self.editing {
            None => Submission::Create(CreateMember {
                username: username.to_string(),
                password: self.password.clone(),
            }),
            Some(id) => Submission::Update(
                id.clone(),
                UpdateMember {
                    username: username.to_string(),
                    password: Some(self.password.clone()).filter(|p| !p.is_empty()),
                },
            ),
        })
    }

    pub fn submit(&mut self, members: &[MemberView]) -> Result<Submission, ConsoleError> {
        if self.phase == Phase::Submitting {
            return Err(ConsoleError::Busy);
        }
        let submission = self.validate(members)?;
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    pub fn settle(&mut self, succeeded: bool) {
        match succeeded {
            true => *self = Self::default(),
            false => self.phase = Phase::Idle,
        }
    }
}

/// Case-insensitive substring search on usernames.
pub fn filter<'a>(members: &'a [MemberView], term: &str) -> Vec<&'a MemberView> {
    let term = term.to_lowercase();
    members
        .iter()
        .filter(|m| m.username.to_lowercase().contains(&term))
        .collect()
}
