//! TEXT TCP Client Binary
//!
//! Connects to a task server, runs the single-shot exchange, and prints
//! the outcome.

use clap::Parser;
use texttcp::{Config, Session, TcpConnection};
use tracing_subscriber::{fmt, EnvFilter};

/// TEXT TCP task client
#[derive(Parser, Debug)]
#[command(name = "texttcp-client")]
#[command(about = "Client for the TEXT TCP arithmetic task protocol")]
#[command(version)]
struct Args {
    /// Server address as host:port
    addr: String,

    /// Read timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    write_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,texttcp=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let (host, port) = match split_host_port(&args.addr) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Invalid address {:?}: {}", args.addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("texttcp client v{}", texttcp::VERSION);
    tracing::info!("Connecting to {}:{}", host, port);

    let config = Config::builder()
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    let connection = match TcpConnection::connect(host, port, &config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    match Session::new(connection).run() {
        Ok(outcome) => {
            println!(
                "SERVER RESPONSE: {} (Result: {})",
                outcome.server_ack, outcome.result
            );
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Split a `host:port` argument, rejecting empty hosts and bad ports
fn split_host_port(addr: &str) -> Result<(&str, u16), String> {
    let (host, port_text) = addr
        .rsplit_once(':')
        .ok_or_else(|| "expected host:port".to_string())?;

    if host.is_empty() {
        return Err("empty host".to_string());
    }

    let port: u16 = port_text
        .parse()
        .map_err(|_| format!("invalid port {:?}", port_text))?;
    if port == 0 {
        return Err("port must be nonzero".to_string());
    }

    Ok((host, port))
}
