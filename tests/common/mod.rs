//! Shared utilities for integration testing.

use std::net::SocketAddr;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use mockprox::config::ServerConfig;
use mockprox::http::HttpServer;
use mockprox::lifecycle::Shutdown;
use mockprox::net::Listener;

/// Start the server on an ephemeral port with the given reply buffer.
/// Returns the bound address and the shutdown handle keeping it alive.
pub async fn start_server(reply: Bytes) -> (SocketAddr, Shutdown) {
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, reply);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Send raw bytes and collect everything the server writes back until it
/// closes the connection. No HTTP client here on purpose: the reply is not
/// a framed HTTP response.
pub async fn raw_request(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    // Close our write side so even a headless request reaches EOF server-side.
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

/// The trigger request as raw bytes.
pub fn trigger_request() -> Vec<u8> {
    b"POST /v1/chat/completions HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n".to_vec()
}
