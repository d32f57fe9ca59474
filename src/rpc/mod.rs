pub mod client;
pub mod model;

pub use client::{RpcClient, StatsSource};
pub use model::{MiningInfo, RpcError};

/// Node method that reports both staking supply and network hash rate.
pub const MINING_INFO_METHOD: &str = "getmininginfo";

/// Request id sent with every stats query.
pub const STATE_REQUEST_ID: &str = "getstate";

/// Fallback node endpoint (Verus daemon default RPC port).
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:27486";
