use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::estimator::Projection;
use crate::rpc::StatsSource;

/// Shared application state: the node connection used by every handler.
pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
}

impl AppState {
    pub fn new(stats: Arc<dyn StatsSource>) -> Self {
        Self { stats }
    }
}

/* ---------- Query Models ---------- */

/// Query string as ordered `(name, value)` pairs; repeated names are kept.
pub type QueryPairs = Vec<(String, String)>;

/* ---------- Response Models ---------- */

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectionResponse {
    pub percentage: f64,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl From<Projection> for ProjectionResponse {
    fn from(p: Projection) -> Self {
        Self {
            percentage: p.percentage,
            daily: p.daily,
            weekly: p.weekly,
            monthly: p.monthly,
            yearly: p.yearly,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: u8,
    pub error_detail: String,
}
