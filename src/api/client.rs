use crate::error::ApiError;
use reqwest::header::HeaderValue;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// GraphQL endpoint every Monarch API call goes through
pub const GRAPHQL_PATH: &str = "/graphql";
const USER_AGENT: &str = concat!("monarch-session/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct MonarchClient {
    client: Client,
    pub base_url: String,
    token: Option<String>,
}

impl MonarchClient {
    // Create an unauthenticated client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(MonarchClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(base_url: String, token: String) -> Result<Self, ApiError> {
        let mut client = MonarchClient::new(base_url)?;
        client.set_token(token)?;
        Ok(client)
    }

    /// Replace the token. It must be non-empty and usable as an HTTP header value.
    pub fn set_token(&mut self, token: String) -> Result<(), ApiError> {
        if token.is_empty() {
            return Err(ApiError::InvalidToken {
                reason: "token is empty".to_string(),
            });
        }
        auth_header(&token)?;
        self.token = Some(token);
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        // set_token already checked that the header value is valid
        if let Some(header) = self.token.as_deref().and_then(|t| auth_header(t).ok()) {
            request = request.header(reqwest::header::AUTHORIZATION, header);
        }

        request
    }
}

fn auth_header(token: &str) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(&format!("Token {}", token)).map_err(|_| {
        ApiError::InvalidToken {
            reason: "token contains characters not allowed in an HTTP header".to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}
