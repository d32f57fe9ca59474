use actix_web::{HttpResponse, get, web};
use log::debug;

use super::error::{ApiError, first_param, parse_amount};
use super::models::{AppState, ProjectionResponse, QueryPairs};
use crate::estimator::{mine_projection, stake_projection};

/// Staking share of the network and expected rewards for `balance`.
#[get("/stake/")]
pub async fn stake(
    state: web::Data<AppState>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, ApiError> {
    let balance = parse_amount("balance", first_param(&query, "balance"))?;
    let projection = stake_projection(state.stats.as_ref(), balance).await?;
    debug!("STAKE -> {projection:?}");
    Ok(HttpResponse::Ok().json(ProjectionResponse::from(projection)))
}

/// Mining share of the network and expected blocks for `hashrate` (MH/s).
#[get("/mine/")]
pub async fn mine(
    state: web::Data<AppState>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, ApiError> {
    let hashrate = parse_amount("hashrate", first_param(&query, "hashrate"))?;
    let projection = mine_projection(state.stats.as_ref(), hashrate).await?;
    debug!("MINE -> {projection:?}");
    Ok(HttpResponse::Ok().json(ProjectionResponse::from(projection)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};

    use crate::api::models::{ErrorResponse, ProjectionResponse};
    use crate::api::{AppState, init_routes};
    use crate::estimator::projection::tests::MockStats;
    use crate::rpc::RpcClient;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    fn state(stats: MockStats) -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(stats)))
    }

    #[actix_web::test]
    async fn stake_without_balance_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1_000_000.0, 1.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/stake/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": 2, "error_detail": "No balance specified" })
        );
    }

    #[actix_web::test]
    async fn mine_without_hashrate_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1.0, 1_048_576.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/mine/?balance=100")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": 2, "error_detail": "No hashrate specified" })
        );
    }

    #[actix_web::test]
    async fn stake_projection_response() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1_000_000.0, 1.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/stake/?balance=100")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ProjectionResponse = test::read_body_json(resp).await;
        assert!(close(body.percentage, 0.0001));
        assert!(close(body.daily, 0.072));
        assert!(close(body.weekly, 0.072 * 7.0));
        assert!(close(body.yearly, 0.072 * 365.25));
        assert!(close(body.monthly, 0.072 * 365.25 / 12.0));
    }

    #[actix_web::test]
    async fn mine_projection_response() {
        // 2048 * 1024^2 H/s -> 2048 after scaling
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1.0, 2_147_483_648.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/mine/?hashrate=1024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ProjectionResponse = test::read_body_json(resp).await;
        assert!(close(body.percentage, 0.5));
        assert!(close(body.daily, 360.0));
        assert!(close(body.weekly, 2520.0));
    }

    #[actix_web::test]
    async fn non_numeric_balance_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1_000_000.0, 1.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/stake/?balance=lots")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, 3);
        assert!(body.error_detail.contains("balance"));
    }

    #[actix_web::test]
    async fn zero_network_figure_is_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(0.0, 0.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/mine/?hashrate=5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, 4);
    }

    #[actix_web::test]
    async fn node_failure_surfaces_as_rpc_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::failing()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/stake/?balance=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, 1);
        assert_eq!(body.error_detail, "node RPC unavailable");
    }

    #[actix_web::test]
    async fn unreachable_node_address_is_not_disclosed() {
        let client = RpcClient::new("http://127.0.0.1:9/", None, None);
        let state = web::Data::new(AppState::new(Arc::new(client)));
        let app =
            test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::get()
            .uri("/mine/?hashrate=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(!text.contains("127.0.0.1"), "{text}");
        assert!(!text.contains(":9"), "{text}");
        let body: ErrorResponse = serde_json::from_str(text).unwrap();
        assert_eq!(body.error, 1);
    }

    #[actix_web::test]
    async fn repeated_balance_uses_first_value() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1_000_000.0, 1.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/stake/?balance=100&balance=200")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ProjectionResponse = test::read_body_json(resp).await;
        assert!(close(body.percentage, 0.0001));
    }

    #[actix_web::test]
    async fn repeated_hashrate_uses_first_value() {
        let app = test::init_service(
            App::new()
                .app_data(state(MockStats::new(1.0, 2_147_483_648.0)))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/mine/?hashrate=1024&hashrate=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ProjectionResponse = test::read_body_json(resp).await;
        assert!(close(body.percentage, 0.5));
    }
}
