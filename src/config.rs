//! Configuration for the texttcp client
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a client session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Connection read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,

    /// Size of the receive buffer used for each blocking read
    pub recv_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            recv_buffer_size: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
