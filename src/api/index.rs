use actix_web::{HttpResponse, get, http::header::ContentType, web};

use super::error::ApiError;
use super::models::AppState;
use crate::estimator::{EstimateError, HASH_UNIT_STEP, NetworkStats, StateKind};

/// Landing page with the live network figures and calculator usage.
#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stats = NetworkStats::from(
        state
            .stats
            .mining_info()
            .await
            .map_err(EstimateError::from)?,
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(&stats)))
}

/// The hash rate line shows the mining figure divided by a further 1024.
fn render_index(stats: &NetworkStats) -> String {
    let supply = stats.figure(StateKind::Staking);
    let hashrate = stats.figure(StateKind::Mining) / HASH_UNIT_STEP;
    format!(
        r#"
    <h1>Welcome to the Verus calculator API</h1>
    <h4> Current estimated supply: {supply:.6} </h4>
    <h4> Current network hashrate {hashrate:.6} GH/s </h4>
    <p> Staking calculator: <code> /stake/?balance=[balance] </code> </p>
    <p> Mining calculator: <code> /mine/?hashrate=[hashrate (MH/s)] </code> </p>
    "#
    )
}
