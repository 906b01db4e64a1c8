use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    pub username: String,
    pub password: String,
}

/// An absent or empty password leaves the stored one alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMember {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateMember {
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_optional_on_update() {
        let req: UpdateMember = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.password(), None);
        let req: UpdateMember =
            serde_json::from_str(r#"{"username":"alice","password":""}"#).unwrap();
        assert_eq!(req.password(), None);
        let req: UpdateMember =
            serde_json::from_str(r#"{"username":"alice","password":"pw2"}"#).unwrap();
        assert_eq!(req.password(), Some("pw2"));
    }
}
