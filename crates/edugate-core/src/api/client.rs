use std::time::Duration;

use anyhow::{Context, Result};

use super::AuthApi;
use super::errors::TransportError;
use super::types::{LoginReply, LoginRequest};
use crate::config::Config;
use crate::endpoints::Endpoints;

/// HTTP client for the backend login endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    login_url: String,
}

impl HttpAuthClient {
    /// Creates a client posting to `login_url`. `None` disables the timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(login_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            login_url: login_url.into(),
        })
    }

    /// Creates a client for the configured backend.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            Endpoints::from_config(config).login(),
            config.request_timeout(),
        )
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl AuthApi for HttpAuthClient {
    /// The HTTP status is not inspected: rejections arrive as JSON bodies with
    /// `ok: false`, whatever the status code.
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, TransportError> {
        tracing::debug!(url = %self.login_url, identifier = request.identifier(), "login request");

        let response = self
            .http
            .post(&self.login_url)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        tracing::debug!(%status, bytes = body.len(), "login response");
        LoginReply::from_body(&body)
    }
}
