//! Session Driver
//!
//! Runs the five-step TEXT TCP exchange over any transport:
//! greeting → acknowledgment → task → result → final acknowledgment.

use crate::error::{ClientError, Result};
use crate::protocol::{evaluate, validate_greeting, Task, ACKNOWLEDGMENT};

use super::Transport;

/// What a completed session produced
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The task line as received from the server
    pub task_line: String,

    /// The result line sent back (without the trailing newline)
    pub result: String,

    /// The server's final acknowledgment, not interpreted
    pub server_ack: String,
}

/// A single-shot client session over a transport
pub struct Session<T: Transport> {
    transport: T,
}

impl<T: Transport> Session<T> {
    /// Create a session over a connected transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Run the exchange to completion (blocking).
    ///
    /// Any connection failure, empty read, or rejected greeting aborts
    /// the session with an error. Business-level computation failures do
    /// not: they travel back to the server as the `ERROR` result line and
    /// the session still ends with the final acknowledgment.
    pub fn run(mut self) -> Result<SessionOutcome> {
        // Step 1: greeting
        let greeting = self.transport.receive()?;
        tracing::trace!("Received greeting: {:?}", greeting);

        if !validate_greeting(&greeting) {
            return Err(ClientError::Protocol(
                "greeting announced no supported protocol (expected a TEXT TCP line)"
                    .to_string(),
            ));
        }

        // Step 2: acknowledge the accepted protocol
        self.transport.send(ACKNOWLEDGMENT)?;

        // Step 3: task
        let task_line = self.transport.receive()?;
        tracing::info!("Received task: {}", task_line.trim_end());

        let task = Task::parse(&task_line);

        // Step 4: result
        let result = evaluate(&task);
        self.transport.send(&result)?;
        tracing::debug!("Sent result: {}", result.trim_end());

        // Step 5: final acknowledgment, displayed but not interpreted
        let server_ack = self.transport.receive()?;

        Ok(SessionOutcome {
            task_line: task_line.trim_end().to_string(),
            result: result.trim_end().to_string(),
            server_ack: server_ack.trim_end().to_string(),
        })
    }
}
