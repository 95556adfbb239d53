//! Mock chat-completions endpoint.
//!
//! A small HTTP mock server built with Tokio. It serves a single purpose:
//! when a client sends `POST /v1/chat/completions`, the server hijacks the
//! raw TCP connection and writes the contents of `reply.txt` verbatim —
//! no status line, no headers, no framing. Every other request receives
//! the literal bytes `Unknown request`, delivered the same raw way.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                 MOCKPROX                   │
//!                    │                                            │
//!   Client Request   │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│   net   │──▶│  http   │──▶│ routing │  │
//!                    │  │listener │   │ request │   │  table  │  │
//!                    │  └─────────┘   │  head   │   └────┬────┘  │
//!                    │                └─────────┘        │       │
//!                    │                                   ▼       │
//!   Raw payload      │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!   ◀────────────────┼──│   raw   │◀──│ hijack  │◀──│ payload │  │
//!                    │  │  write  │   │ (conn   │   │ select  │  │
//!                    │  └─────────┘   │takeover)│   └─────────┘  │
//!                    │                └─────────┘                │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns        │ │
//!                    │  │  config   payload loader   lifecycle │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! The reply buffer is loaded once at startup and never mutated, so
//! concurrent handlers share it without locks.

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod payload;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
