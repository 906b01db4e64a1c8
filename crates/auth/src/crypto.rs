use super::*;

pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    /// Per-process key. Every session dies with the process.
    pub fn random() -> Self {
        use rand::Rng;
        let ref mut secret = [0u8; 32];
        rand::rng().fill(secret);
        Self::new(secret)
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let crypto = Crypto::new(b"secret");
        let claims = Claims::new(&Session::new("root"));
        let token = crypto.encode(&claims).unwrap();
        let back = crypto.decode(&token).unwrap();
        assert_eq!(back.admin(), "root");
        assert_eq!(back.sid, claims.sid);
        assert!(!back.expired());
    }

    #[test]
    fn rejects_foreign_signatures() {
        let claims = Claims::new(&Session::new("root"));
        let token = Crypto::new(b"theirs").encode(&claims).unwrap();
        assert!(Crypto::new(b"ours").decode(&token).is_err());
    }

    #[test]
    fn rejects_bare_flags() {
        assert!(Crypto::random().decode("true").is_err());
    }

    #[test]
    fn rejects_expired_tokens() {
        let crypto = Crypto::new(b"secret");
        let mut claims = Claims::new(&Session::new("root"));
        claims.iat -= 7200;
        claims.exp -= 7200;
        assert!(claims.expired());
        assert!(crypto.decode(&crypto.encode(&claims).unwrap()).is_err());
    }
}
