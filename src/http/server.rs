//! HTTP server and request responder.
//!
//! # Responsibilities
//! - Accept connections and spawn one handler task per connection
//! - Parse the request head and select the payload via the route table
//! - Take over the raw socket and write the payload verbatim
//! - Fall back to a structured 500 only when takeover is unavailable
//!
//! # Design Decisions
//! - The reply buffer is immutable and shared by cheap clone; handlers
//!   never coordinate with each other
//! - Malformed requests are answered with the fallback payload, not
//!   dropped
//! - Write failures after takeover are absorbed; there is no structured
//!   channel left to report on

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::http::request::{self, RequestError, RequestHead};
use crate::net::{Connection, Listener, ListenerError};
use crate::routing::{RouteAction, RouteTable};

/// Payload for every request that is not the recognized trigger.
pub const FALLBACK_PAYLOAD: &[u8] = b"Unknown request";

/// HTTP server for the mock endpoint.
pub struct HttpServer {
    config: ServerConfig,
    routes: Arc<RouteTable>,
    reply: Bytes,
}

impl HttpServer {
    /// Create a new server over an already-loaded reply buffer.
    pub fn new(config: ServerConfig, reply: Bytes) -> Self {
        Self {
            config,
            routes: Arc::new(RouteTable::standard()),
            reply,
        }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the accept loop until shutdown is signalled.
    ///
    /// Accept errors are logged and the loop continues; only the shutdown
    /// signal stops serving.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        let addr = listener.local_addr().map_err(ListenerError::Bind)?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                accepted = listener.accept() => {
                    match accepted {
                        Ok(conn) => {
                            let routes = Arc::clone(&self.routes);
                            let reply = self.reply.clone();
                            tokio::spawn(async move {
                                handle_connection(conn, routes, reply).await;
                            });
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to accept connection");
                        }
                    }
                }
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handle one connection end-to-end: parse, select, hijack, write, close.
async fn handle_connection(mut conn: Connection, routes: Arc<RouteTable>, reply: Bytes) {
    let connection_id = conn.id();
    let peer = conn.peer_addr();

    let head = match conn.stream_mut() {
        Some(stream) => match request::read_head(stream).await {
            Ok(head) => Some(head),
            Err(RequestError::Io(e)) => {
                // The peer went away before sending a head; nothing to answer.
                tracing::debug!(
                    connection_id = %connection_id,
                    peer = %peer,
                    error = %e,
                    "Connection failed before request head"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    connection_id = %connection_id,
                    peer = %peer,
                    error = %e,
                    "Unparseable request head"
                );
                None
            }
        },
        None => None,
    };

    let (route, action) = match &head {
        Some(head) => routes.match_head(head),
        None => ("fallback", RouteAction::Fallback),
    };
    let payload = match action {
        RouteAction::ServeReply => reply,
        RouteAction::Fallback => Bytes::from_static(FALLBACK_PAYLOAD),
    };

    log_request(connection_id, peer, head.as_ref(), route);

    // Echo the outgoing payload to stdout, observability only.
    println!("{}", String::from_utf8_lossy(&payload));

    let mut raw = match conn.try_hijack() {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(
                connection_id = %connection_id,
                peer = %peer,
                error = %e,
                "Connection takeover failed"
            );
            conn.respond_error(500, "Internal Server Error", &e.to_string())
                .await;
            return;
        }
    };

    if let Err(e) = raw.send(&payload).await {
        // Post-takeover there is no client-visible signal left; the socket
        // still closes when `raw` drops.
        tracing::debug!(
            connection_id = %connection_id,
            peer = %peer,
            error = %e,
            "Raw payload write failed"
        );
    }

    tracing::debug!(connection_id = %connection_id, "End of handler");
}

fn log_request(
    connection_id: crate::net::ConnectionId,
    peer: std::net::SocketAddr,
    head: Option<&RequestHead>,
    route: &str,
) {
    match head {
        Some(head) => tracing::info!(
            connection_id = %connection_id,
            peer = %peer,
            host = head.host.as_deref().unwrap_or(""),
            method = %head.method,
            path = %head.path,
            route = route,
            "Received request"
        ),
        None => tracing::info!(
            connection_id = %connection_id,
            peer = %peer,
            route = route,
            "Received malformed request"
        ),
    }
}
