use super::*;
use std::collections::HashMap;

/// Fixed table of administrators allowed through the gate.
///
/// Built once at startup. Only Argon2 hashes are retained; the plaintext
/// passwords handed to [`Admins::new`] are dropped after hashing.
#[derive(Debug, Default)]
pub struct Admins(HashMap<String, String>);

impl Admins {
    pub fn new<I>(pairs: I) -> Result<Self, AuthError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .map(|(username, secret)| {
                password::hash(&secret)
                    .map(|hashword| (username, hashword))
                    .map_err(|e| AuthError::Hash(e.to_string()))
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(Self)
    }
    /// Parses `user:password,user:password`. Passwords may contain `:`.
    pub fn parse(table: &str) -> Result<Self, AuthError> {
        table
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((user, pass)) if !user.trim().is_empty() && !pass.is_empty() => {
                    Ok((user.trim().to_string(), pass.to_string()))
                }
                _ => Err(AuthError::Entry(entry.split(':').next().unwrap_or_default().to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::new)
    }
    /// Unknown usernames fail regardless of password.
    pub fn verify(&self, username: &str, secret: &str) -> bool {
        self.0
            .get(username)
            .map(|hashword| password::verify(secret, hashword))
            .unwrap_or(false)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
