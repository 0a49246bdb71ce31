mod config;
mod database;
mod modules;
mod server;
mod tracer;

#[cfg(test)]
mod test_utils;

use config::app_config;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[tokio::main]
pub async fn main() {
    let cfg = app_config();

    tracer::init(cfg.is_development);

    let db = database::db::create_db_conn(&cfg.db_url).await;
    database::db::run_migrations(&db).await;

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), cfg.http_port);
    tracing::info!("[WEB] listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|_| panic!("[WEB] failed to get address {}", addr));

    axum::serve(listener, server::controller::new(db))
        .await
        .unwrap_or_else(|_| panic!("[WEB] failed to serve app on address {}", addr));
}
