//! `reqwest` implementation of [`HttpClient`].

use keyrelay_app::ports::HttpClient;
use keyrelay_domain::error::TransportError;
use reqwest::header::CONTENT_TYPE;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// HTTP client shared by every HTTP rule.
///
/// Wraps a single [`reqwest::Client`] so its connection pool is reused
/// across dispatches.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Build)?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<u16, TransportError> {
        let response = self.client.get(url).send().await.map_err(transport)?;
        Ok(response.status().as_u16())
    }

    async fn post(&self, url: &str, body: &str) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body.to_owned())
            .send()
            .await
            .map_err(transport)?;
        Ok(response.status().as_u16())
    }
}

fn transport(err: reqwest::Error) -> TransportError {
    TransportError(Box::new(err))
}
