use std::{env, io, process, sync::Arc};

use bank_holidays::Region;
use log::{error, info};
use tokio::{net::TcpListener, signal};

mod cli;
mod loader;
mod routes;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "bank_holidays_server=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    info!("Loading holiday dataset from {}", args.source);
    let data = match loader::load(&args.source, args.timeout).await {
        Ok(data) => data,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    for region in Region::ALL {
        info!(
            "Loaded {} events for {region}",
            data.division(region).events.len()
        );
    }

    let router = routes::router(Arc::new(data));

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        return std::future::pending().await;
    }

    info!("Shutting down");
}
