//! Mock chat-completions endpoint binary.
//!
//! Startup order matters: arguments are validated first (an unparseable
//! port terminates the process before any network activity), the reply
//! payload is loaded next (failure degrades to an empty reply), and only
//! then does the listener bind.

use std::path::Path;

use bytes::Bytes;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mockprox::config::Cli;
use mockprox::http::HttpServer;
use mockprox::lifecycle::Shutdown;
use mockprox::net::Listener;
use mockprox::payload::{self, REPLY_FILE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockprox=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Exits with a diagnostic before any bind if the port is unparseable.
    let config = Cli::parse().into_config();

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        "mockprox v0.1.0 starting"
    );

    let reply = match payload::load_reply(Path::new(REPLY_FILE)) {
        Ok(reply) => {
            tracing::info!(
                file = REPLY_FILE,
                bytes = reply.len(),
                "Reply payload loaded"
            );
            reply
        }
        Err(e) => {
            tracing::warn!(
                file = REPLY_FILE,
                error = %e,
                "Failed to load reply payload, trigger requests will receive an empty reply"
            );
            Bytes::new()
        }
    };

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config, reply);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
