use log::debug;
use thiserror::Error;

use super::{BLOCKS_PER_DAY, DAYS_PER_WEEK, DAYS_PER_YEAR, HASH_UNIT_STEP, MONTHS_PER_YEAR};
use crate::rpc::{MiningInfo, RpcError, StatsSource};

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("network {0} reported as zero")]
    DivisionByZero(&'static str),
}

/// Which network figure to read from the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Staking,
    Mining,
}

impl StateKind {
    fn label(self) -> &'static str {
        match self {
            StateKind::Staking => "staking supply",
            StateKind::Mining => "hash rate",
        }
    }
}

/// Live figures from one `getmininginfo` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStats {
    pub staking_supply: f64,
    /// Raw network hash rate in H/s.
    pub network_hashrate: f64,
}

impl From<MiningInfo> for NetworkStats {
    fn from(info: MiningInfo) -> Self {
        Self {
            staking_supply: info.stakingsupply,
            network_hashrate: info.networkhashps,
        }
    }
}

impl NetworkStats {
    /// Network hash rate divided by 1024 twice. Mining inputs are compared
    /// against this figure.
    pub fn scaled_hashrate(&self) -> f64 {
        self.network_hashrate / HASH_UNIT_STEP / HASH_UNIT_STEP
    }

    pub fn figure(&self, kind: StateKind) -> f64 {
        match kind {
            StateKind::Staking => self.staking_supply,
            StateKind::Mining => self.scaled_hashrate(),
        }
    }
}

/// Reward share and expected payouts over fixed windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub percentage: f64,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl Projection {
    /// Project `input` against a network-wide `total` of the same unit.
    pub fn from_share(input: f64, total: f64, kind: StateKind) -> Result<Self, EstimateError> {
        if total == 0.0 {
            return Err(EstimateError::DivisionByZero(kind.label()));
        }
        let percentage = input / total;
        let daily = percentage * BLOCKS_PER_DAY;
        let weekly = daily * DAYS_PER_WEEK;
        let yearly = daily * DAYS_PER_YEAR;
        let monthly = yearly / MONTHS_PER_YEAR;
        Ok(Self {
            percentage,
            daily,
            weekly,
            monthly,
            yearly,
        })
    }
}

/// Fetch fresh stats and return the requested figure.
pub async fn current_state(
    source: &dyn StatsSource,
    kind: StateKind,
) -> Result<f64, EstimateError> {
    let stats = NetworkStats::from(source.mining_info().await?);
    Ok(stats.figure(kind))
}

pub async fn stake_projection(
    source: &dyn StatsSource,
    balance: f64,
) -> Result<Projection, EstimateError> {
    let supply = current_state(source, StateKind::Staking).await?;
    debug!("STAKE balance={balance} supply={supply}");
    Projection::from_share(balance, supply, StateKind::Staking)
}

pub async fn mine_projection(
    source: &dyn StatsSource,
    hashrate: f64,
) -> Result<Projection, EstimateError> {
    let network = current_state(source, StateKind::Mining).await?;
    debug!("MINE hashrate={hashrate} network={network}");
    Projection::from_share(hashrate, network, StateKind::Mining)
}
