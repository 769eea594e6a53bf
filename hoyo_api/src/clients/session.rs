use std::fmt::Debug;

use super::common::UnauthorizedError;

/// 复用连接池与Cookie的会话
#[derive(Clone)]
pub struct Session {
    cookie: Option<String>,
    pub client: reqwest::Client,
}

impl Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cookie", &self.cookie.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(client: reqwest::Client, cookie: Option<String>) -> Self {
        Self {
            cookie: cookie.filter(|x| !x.trim().is_empty()),
            client,
        }
    }

    pub fn default_client_builder() -> reqwest::ClientBuilder {
        super::common::client_builder()
    }

    pub fn cookie(&self) -> Result<&str, UnauthorizedError> {
        self.cookie
            .as_deref()
            .ok_or(UnauthorizedError::MissingCookie)
    }

    pub fn get(&self, url: reqwest::Url) -> Result<reqwest::RequestBuilder, UnauthorizedError> {
        Ok(self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, self.cookie()?))
    }
}
