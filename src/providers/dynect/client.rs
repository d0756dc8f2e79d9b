use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

use crate::auth::credentials::Credentials;
use crate::config::Config;
use crate::providers::dynect::error::DynectProviderError;
use crate::providers::dynect::types::*;

const REST_PREFIX: &str = "/REST";
const AUTH_HEADER: &str = "Auth-Token";

pub struct DynectConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl From<&Config> for DynectConfig {
    fn from(config: &Config) -> Self {
        DynectConfig {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        }
    }
}

pub struct DynectProvider {
    config: DynectConfig,
    client: Client,
    token: Mutex<Option<String>>,
}

/// Places `path` under the `/REST` prefix unless it is already there.
pub(crate) fn rest_path(path: &str) -> String {
    if path.starts_with(REST_PREFIX) {
        path.to_string()
    } else {
        format!("{REST_PREFIX}{path}")
    }
}

/// Path of the node listing for `fqdn` inside `zone`.
pub(crate) fn node_list_path(zone: &str, fqdn: &str) -> String {
    format!("/NodeList/{zone}/{fqdn}/")
}

impl DynectProvider {
    pub fn new(config: DynectConfig) -> Result<Self, DynectProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            client,
            token: Mutex::new(None),
        })
    }

    #[cfg(test)]
    pub async fn has_session(&self) -> bool {
        self.token.lock().await.is_some()
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_url, rest_path(path));
        debug!("dynect request {method} {url}");
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        match self.token.lock().await.as_deref() {
            Some(token) => builder.header(AUTH_HEADER, token),
            None => builder,
        }
    }

    /// Sends a request and unwraps the `data` of a successful envelope.
    ///
    /// 4xx responses still carry an envelope; the HTTP status is only used
    /// when the body is not one.
    async fn handle_request<T, F>(&self, fut: F) -> Result<T, DynectProviderError>
    where
        F: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
        T: DeserializeOwned,
    {
        let response = fut.await?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: DynectResponse = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(DynectProviderError::Status(status)),
            Err(e) => return Err(e.into()),
        };
        debug!(status = %envelope.status, job_id = ?envelope.job_id, "dynect response");

        if !envelope.is_success() {
            return Err(DynectProviderError::Api {
                status: envelope.status,
                msgs: envelope.msgs,
            });
        }
        Ok(serde_json::from_value(envelope.data)?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), DynectProviderError> {
        let login = LoginRequest {
            customer_name: &credentials.customer,
            user_name: &credentials.user,
            password: &credentials.password,
        };
        let req = self.request(Method::POST, "/Session/").await.json(&login);

        let session: SessionData = match self.handle_request(req.send()).await {
            Ok(session) => session,
            Err(DynectProviderError::Api { status, msgs }) if msgs.is_empty() => {
                return Err(DynectProviderError::Credential(format!(
                    "login returned `{status}`"
                )));
            }
            Err(DynectProviderError::Api { msgs, .. }) => {
                return Err(DynectProviderError::Credential(join_messages(&msgs)));
            }
            Err(e) => return Err(e),
        };
        debug!(version = ?session.version, "session established");
        *self.token.lock().await = Some(session.token);
        Ok(())
    }

    pub async fn list_zones(&self) -> Result<Vec<String>, DynectProviderError> {
        let req = self.request(Method::GET, "/Zone/").await;
        self.handle_request(req.send()).await
    }

    pub async fn list_nodes(
        &self,
        zone: &str,
        fqdn: &str,
    ) -> Result<Vec<String>, DynectProviderError> {
        let req = self
            .request(Method::GET, &node_list_path(zone, fqdn))
            .await;
        self.handle_request(req.send()).await
    }

    /// Ends the session. The local token is dropped even if the API refuses.
    pub async fn logout(&self) -> Result<(), DynectProviderError> {
        let req = self.request(Method::DELETE, "/Session/").await;
        let result = self
            .handle_request::<serde_json::Value, _>(req.send())
            .await;
        *self.token.lock().await = None;
        result.map(|_| ())
    }
}
