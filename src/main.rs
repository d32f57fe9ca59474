mod api;
mod config;
mod estimator;
mod rpc;
mod tls;

use std::fmt::Display;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use log::{error, info};

use api::AppState;
use config::ApiConfig;
use rpc::RpcClient;

fn fatal(err: impl Display) -> ! {
    error!("{err}");
    eprintln!("ERROR: {err}");
    std::process::exit(1)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let conf = ApiConfig::load(config::config_path()).unwrap_or_else(|e| fatal(e));
    let tls_config = conf
        .tls
        .as_ref()
        .map(tls::load_server_config)
        .transpose()
        .unwrap_or_else(|e| fatal(e));

    let rpc = RpcClient::from_env();
    info!("node RPC endpoint: {}", rpc.url());

    println!(
        "⛓️ Starting Verus calculator API at {}://{}:{}",
        conf.scheme(),
        conf.host,
        conf.port
    );

    let state = web::Data::new(AppState::new(Arc::new(rpc)));
    let hardened = conf.tls.is_some();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(api::security_headers(hardened))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api::init_routes)
    });

    let addr = (conf.host.as_str(), conf.port);
    let server = match tls_config {
        Some(tls_config) => server.bind_rustls_0_23(addr, tls_config)?,
        None => server.bind(addr)?,
    };

    server.run().await
}
