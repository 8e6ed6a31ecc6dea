//! HashiCorp Vault backend.
//!
//! Logs in with the GitHub auth method and reads from the KV v2 engine
//! mounted at [`KV_MOUNT`].
//!
//! ## Usage
//!
//! ```ignore
//! let vault = Vault::login("https://vault.example.com", &github_token)?;
//! let data = vault.read("clusters/neuroai/prod/db-creds")?;
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{SecretData, SecretStore};
use crate::core::constants::{KV_MOUNT, REQUEST_TIMEOUT_SECS};
use crate::error::{Result, StoreError};

const TOKEN_HEADER: &str = "X-Vault-Token";

/// Authenticated Vault session.
pub struct Vault {
    client: Client,
    url: String,
    token: Zeroizing<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    auth: Option<LoginAuth>,
}

#[derive(Deserialize)]
struct LoginAuth {
    client_token: String,
}

#[derive(Deserialize)]
struct KvResponse {
    data: Option<KvData>,
}

#[derive(Deserialize)]
struct KvData {
    data: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

impl Vault {
    /// Log in to the Vault server at `url` with a GitHub token.
    ///
    /// # Errors
    ///
    /// Every failure shape is reported distinctly: `LoginDenied` when Vault
    /// rejects the token, `Timeout` and `Unreachable` for transport problems,
    /// `MalformedResponse` when the reply carries no client token.
    pub fn login(url: &str, github_token: &str) -> Result<Self> {
        let url = url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let endpoint = format!("{}/v1/auth/github/login", url);
        debug!(endpoint = %endpoint, "logging in to vault");

        let response = client
            .post(&endpoint)
            .json(&LoginRequest {
                token: github_token,
            })
            .send()
            .map_err(|e| transport_error(&endpoint, e))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(StoreError::LoginDenied {
                url: endpoint,
                reason: error_reason(status, response),
            }
            .into());
        }
        if !status.is_success() {
            return Err(StoreError::Unreachable {
                url: endpoint,
                reason: error_reason(status, response),
            }
            .into());
        }

        let body: LoginResponse =
            response
                .json()
                .map_err(|e| StoreError::MalformedResponse {
                    url: endpoint.clone(),
                    reason: e.to_string(),
                })?;
        let auth = body.auth.ok_or_else(|| StoreError::MalformedResponse {
            url: endpoint,
            reason: "missing auth block".to_string(),
        })?;

        debug!("vault login succeeded");
        Ok(Self {
            client,
            url,
            token: Zeroizing::new(auth.client_token),
        })
    }

    fn data_url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}/data/{}",
            self.url,
            KV_MOUNT,
            path.trim_start_matches('/')
        )
    }
}

impl SecretStore for Vault {
    fn read(&self, path: &str) -> Result<Option<SecretData>> {
        let url = self.data_url(path);
        trace!(url = %url, "reading secret");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::ReadFailed {
                path: path.to_string(),
                reason: error_reason(status, response),
            }
            .into());
        }

        let body: KvResponse = response
            .json()
            .map_err(|e| StoreError::MalformedResponse {
                url,
                reason: e.to_string(),
            })?;

        Ok(body.data.and_then(|d| d.data).map(into_secret_data))
    }
}

/// Convert KV fields to text. Nulls are dropped; scalars keep their JSON
/// rendering (`5432`, `true`).
fn into_secret_data(fields: BTreeMap<String, serde_json::Value>) -> SecretData {
    fields
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, Zeroizing::new(text)))
        })
        .collect()
}

fn transport_error(url: &str, e: reqwest::Error) -> StoreError {
    if e.is_timeout() {
        StoreError::Timeout {
            url: url.to_string(),
        }
    } else {
        StoreError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

fn error_reason(status: StatusCode, response: Response) -> String {
    let errors = response
        .json::<ErrorBody>()
        .map(|b| b.errors)
        .unwrap_or_default();
    if errors.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, errors.join("; "))
    }
}
