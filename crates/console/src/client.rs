use super::*;
use reqwest::Response;
use reqwest::StatusCode;
use roster_dto::CreateMember;
use roster_dto::Failure;
use roster_dto::LoginRequest;
use roster_dto::MemberView;
use roster_dto::Message;
use roster_dto::UpdateMember;

/// HTTP client for the JSON API. Keeps the session cookie between calls.
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(base: &str) -> Result<Self, ConsoleError> {
        Ok(Self {
            http: reqwest::Client::builder().cookie_store(true).build()?,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn reason(resp: Response) -> String {
        let status = resp.status();
        resp.json::<Failure>()
            .await
            .map(|f| f.error)
            .unwrap_or_else(|_| status.to_string())
    }

    /// A `401` from the member API means the session is gone.
    async fn check(resp: Response) -> Result<Response, ConsoleError> {
        match resp.status() {
            s if s.is_success() => Ok(resp),
            StatusCode::UNAUTHORIZED => Err(ConsoleError::Expired),
            _ => Err(ConsoleError::Rejected(Self::reason(resp).await)),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), ConsoleError> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        match resp.status() {
            StatusCode::UNAUTHORIZED => Err(ConsoleError::Rejected(Self::reason(resp).await)),
            _ => Self::check(resp).await.map(std::mem::drop),
        }
    }

    pub async fn logout(&self) -> Result<(), ConsoleError> {
        let resp = self.http.post(self.url("/logout")).send().await?;
        Self::check(resp).await.map(std::mem::drop)
    }

    pub async fn members(&self) -> Result<Vec<MemberView>, ConsoleError> {
        let resp = self.http.get(self.url("/members")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn create(&self, req: &CreateMember) -> Result<MemberView, ConsoleError> {
        let resp = self.http.post(self.url("/members")).json(req).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn update(&self, id: &str, req: &UpdateMember) -> Result<MemberView, ConsoleError> {
        let resp = self
            .http
            .put(self.url(&format!("/members/{}", id)))
            .json(req)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<String, ConsoleError> {
        let resp = self
            .http
            .delete(self.url(&format!("/members/{}", id)))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<Message>().await?.message)
    }
}
