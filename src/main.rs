use clap::Parser;
use std::net::SocketAddr;

mod app_context;
mod cli;
mod health;
mod http;
mod imagery;
mod logging;
mod map;
mod rounds;
mod spawn;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let imagery = imagery::init();
    let app_context = app_context::init(&args, imagery);
    let app = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Server started.");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("Failed to run the server.");
}
