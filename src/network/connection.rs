//! Connection Handling
//!
//! Blocking TCP transport for the client session.

use std::io::{BufReader, BufWriter, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// Blocking text transport used by the session.
///
/// `receive` performs a single blocking read and returns whatever bytes
/// arrived; message framing (greeting terminator, line breaks) is the
/// caller's concern.
pub trait Transport {
    /// Send a text message, flushed before returning
    fn send(&mut self, text: &str) -> Result<()>;

    /// Receive one chunk of text (blocks; empty reads are fatal)
    fn receive(&mut self) -> Result<String>;
}

/// A connected TCP transport
pub struct TcpConnection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Receive buffer size for each blocking read
    recv_buffer_size: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpConnection {
    /// Resolve `host:port` and connect to the first reachable candidate.
    ///
    /// Resolution may yield several addresses (IPv4 and IPv6); each is
    /// tried in order and the first successful connect wins.
    pub fn connect(host: &str, port: u16, config: &Config) -> Result<Self> {
        let mut last_err: Option<std::io::Error> = None;

        let candidates = (host, port).to_socket_addrs().map_err(|e| {
            ClientError::Connection(format!("failed to resolve {}:{}: {}", host, port, e))
        })?;

        for addr in candidates {
            tracing::debug!("Trying candidate address {}", addr);
            match TcpStream::connect(addr) {
                Ok(stream) => return Self::new(stream, config),
                Err(e) => last_err = Some(e),
            }
        }

        Err(ClientError::Connection(match last_err {
            Some(e) => format!("connection to {}:{} failed: {}", host, port, e),
            None => format!("{}:{} resolved to no addresses", host, port),
        }))
    }

    /// Wrap an already connected stream
    ///
    /// Sets up buffered I/O and configures timeouts from the config
    pub fn new(stream: TcpStream, config: &Config) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        tracing::debug!("Connection established to {}", peer_addr);

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            recv_buffer_size: config.recv_buffer_size,
            peer_addr,
        })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Transport for TcpConnection {
    fn send(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<String> {
        let mut buffer = vec![0u8; self.recv_buffer_size];
        let n = self.reader.read(&mut buffer)?;

        if n == 0 {
            // Server closed the connection mid-exchange
            return Err(ClientError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("connection closed by {}", self.peer_addr),
            )));
        }

        Ok(String::from_utf8_lossy(&buffer[..n]).into_owned())
    }
}
