mod calculator;
pub mod error;
mod headers;
mod index;
pub mod models;

use actix_web::web::{self, ServiceConfig};

pub use headers::security_headers;
pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(index::index)
        .service(calculator::stake)
        .service(calculator::mine);
}
