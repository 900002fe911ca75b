//! Rebate JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use rebate_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod healthcheck;
mod numbers;
mod observability;
mod pricing;
mod promotions;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(e) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report this"
        )]
        {
            eprintln!("{e}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.retry_policy(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    if config.database.seed_sample_promotions {
        match app.promotions.seed_sample_promotions().await {
            Ok(0) => info!("promotions already present, skipping sample data"),
            Ok(inserted) => info!(inserted, "seeded sample promotions"),
            Err(seed_error) => warn!("failed to seed sample promotions: {seed_error}"),
        }
    }

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Rebate API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
