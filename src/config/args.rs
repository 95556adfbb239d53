//! Command-line argument parsing.
//!
//! The only runtime knob is an optional positional port. A value that is
//! not a valid base-10 port number makes clap print a diagnostic and
//! terminate the process before any listener is bound.

use clap::Parser;

use crate::config::schema::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "mockprox")]
#[command(about = "Mock chat-completions endpoint", long_about = None)]
pub struct Cli {
    /// HTTP listen port (default: 80).
    pub port: Option<u16>,
}

impl Cli {
    /// Turn parsed arguments into an immutable server config.
    pub fn into_config(self) -> ServerConfig {
        ServerConfig::with_port(self.port)
    }
}
