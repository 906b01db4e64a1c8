use super::*;

/// The session gate: who may log in, how their tokens are signed, and
/// which sessions are still live.
pub struct Gate {
    admins: Admins,
    crypto: Crypto,
    sessions: Sessions,
    secure: bool,
}

impl Gate {
    pub fn new(admins: Admins, crypto: Crypto, secure: bool) -> Self {
        Self {
            admins,
            crypto,
            sessions: Sessions::default(),
            secure,
        }
    }
    /// Whether issued cookies carry the `Secure` attribute.
    pub fn secure(&self) -> bool {
        self.secure
    }
    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }
    /// Checks credentials against the administrator table and, on a match,
    /// opens a session and returns its signed token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !self.admins.verify(username, password) {
            log::info!("[gate] rejected login for {:?}", username);
            return Err(AuthError::InvalidCredentials);
        }
        let session = self.sessions.open(username).await;
        let token = self.crypto.encode(&Claims::new(&session))?;
        log::info!("[gate] {} logged in", username);
        Ok(token)
    }
    /// Claims of a token that verifies, has not expired, and whose session
    /// has not been revoked.
    pub async fn authenticate(&self, token: &str) -> Option<Claims> {
        let claims = self
            .crypto
            .decode(token)
            .ok()
            .filter(|claims| !claims.expired())?;
        match self.sessions.alive(claims.session()).await {
            true => Some(claims),
            false => None,
        }
    }
    /// Revokes whatever session the token names. Never fails.
    pub async fn logout(&self, token: Option<&str>) {
        if let Some(claims) = token.and_then(|t| self.crypto.decode(t).ok()) {
            if self.sessions.revoke(claims.session()).await {
                log::info!("[gate] {} logged out", claims.admin());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> Gate {
        Gate::new(Admins::parse("root:toor").unwrap(), Crypto::random(), false)
    }

    #[tokio::test]
    async fn issues_tokens_that_authenticate() {
        let gate = gate();
        let token = gate.login("root", "toor").await.unwrap();
        let claims = gate.authenticate(&token).await.unwrap();
        assert_eq!(claims.admin(), "root");
    }

    #[tokio::test]
    async fn refuses_bad_credentials() {
        let gate = gate();
        assert!(matches!(
            gate.login("root", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            gate.login("nobody", "toor").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(gate.sessions().len().await, 0);
    }

    #[tokio::test]
    async fn logout_kills_the_token() {
        let gate = gate();
        let token = gate.login("root", "toor").await.unwrap();
        gate.logout(Some(&token)).await;
        assert!(gate.authenticate(&token).await.is_none());
    }

    #[tokio::test]
    async fn logout_without_token_is_harmless() {
        let gate = gate();
        gate.logout(None).await;
        gate.logout(Some("garbage")).await;
    }

    #[tokio::test]
    async fn forged_flags_do_not_authenticate() {
        assert!(gate().authenticate("true").await.is_none());
    }

    #[tokio::test]
    async fn tokens_from_another_process_do_not_authenticate() {
        let theirs = gate();
        let token = theirs.login("root", "toor").await.unwrap();
        assert!(gate().authenticate(&token).await.is_none());
    }
}
