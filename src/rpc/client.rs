use std::env;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::model::{JsonRpcRequest, JsonRpcResponse, MiningInfo, RpcError};
use super::{DEFAULT_RPC_URL, MINING_INFO_METHOD, STATE_REQUEST_ID};

/// Anything that can report the node's current mining info.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn mining_info(&self) -> Result<MiningInfo, RpcError>;
}

/// Minimal JSON-RPC client for a Verus daemon.
///
/// Every call is a single POST; there is no retry and no client timeout.
#[derive(Clone)]
pub struct RpcClient {
    url: String,
    user: Option<String>,
    password: Option<String>,
    client: Client,
}

impl RpcClient {
    pub fn new(url: impl Into<String>, user: Option<String>, password: Option<String>) -> Self {
        Self {
            url: url.into(),
            user,
            password,
            client: Client::new(),
        }
    }

    /// Build from `VERUS_RPC_URL`, `VERUS_RPC_USER` and `VERUS_RPC_PASSWORD`.
    pub fn from_env() -> Self {
        let url = env::var("VERUS_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let user = env::var("VERUS_RPC_USER").ok();
        let password = env::var("VERUS_RPC_PASSWORD").ok();
        Self::new(url, user, password)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one JSON-RPC call and return its `result` member.
    pub async fn query(
        &self,
        method: &str,
        params: serde_json::Value,
        request_id: &str,
    ) -> Result<serde_json::Value, RpcError> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: request_id,
            method,
            params,
        };
        debug!("RPC -> {} {} id={}", self.url, method, request_id);

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(user) = &self.user {
            req = req.basic_auth(user, self.password.as_deref());
        }

        // The daemon reports RPC errors with a non-2xx status and a JSON
        // envelope, so the body is decoded regardless of status.
        let resp = req.send().await.inspect_err(|e| {
            warn!("RPC {method} to {} failed: {e}", self.url);
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let envelope = match serde_json::from_slice::<JsonRpcResponse>(&bytes) {
            Ok(envelope) => envelope,
            Err(e) if !status.is_success() => {
                warn!("RPC {method} answered {status} with undecodable body: {e}");
                return Err(RpcError::Http {
                    status: status.as_u16(),
                });
            }
            Err(e) => {
                warn!("RPC {method} returned undecodable body: {e}");
                return Err(e.into());
            }
        };

        envelope.into_result()
    }
}

#[async_trait]
impl StatsSource for RpcClient {
    async fn mining_info(&self) -> Result<MiningInfo, RpcError> {
        let result = self
            .query(MINING_INFO_METHOD, serde_json::json!([]), STATE_REQUEST_ID)
            .await?;
        Ok(serde_json::from_value(result)?)
    }
}
