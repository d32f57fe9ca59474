use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("node returned error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("response has no result")]
    MissingResult,

    #[error("node answered HTTP {status} without a JSON-RPC body")]
    Http { status: u16 },
}

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    /// Turn the envelope into its `result`, surfacing node-side errors.
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        if let Some(err) = self.error {
            return Err(RpcError::Node {
                code: err.code,
                message: err.message,
            });
        }
        match self.result {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(RpcError::MissingResult),
        }
    }
}

/// Subset of `getmininginfo` the estimators read.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MiningInfo {
    /// Estimated coins currently staking.
    pub stakingsupply: f64,
    /// Network hash rate in H/s.
    pub networkhashps: f64,
}
