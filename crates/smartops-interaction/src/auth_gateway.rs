//! HTTP implementation of the login call.

use async_trait::async_trait;
use reqwest::Client;
use smartops_core::auth::{AuthGateway, LoginRequest, LoginResponse};
use smartops_core::config::Endpoints;
use smartops_core::error::Result;
use smartops_core::session::AuthHeaders;

use crate::http::{header_map, network_error};

/// Posts credentials to the configured login endpoint.
#[derive(Clone)]
pub struct HttpAuthGateway {
    http: Client,
    login_url: String,
}

impl HttpAuthGateway {
    pub fn new(http: Client, endpoints: &Endpoints) -> Self {
        Self {
            http,
            login_url: endpoints.login.clone(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        tracing::info!(endpoint = %self.login_url, "Attempting login");
        tracing::debug!(email = %request.email, "Login request");

        let response = self
            .http
            .post(&self.login_url)
            .headers(header_map(&AuthHeaders::anonymous())?)
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        tracing::debug!(status, "Login response received");

        LoginResponse::from_http(status, &body).inspect_err(|err| {
            tracing::warn!(status, error = %err, "Login failed");
        })
    }
}
