//! Protocol Module
//!
//! Defines the TEXT TCP wire protocol for client-server communication.
//!
//! ## Protocol Format (plain text over a stream)
//!
//! ### Greeting (Server → Client)
//! ```text
//! TEXT TCP 1.0\n
//! BINARY TCP 1.1\n
//! \n
//! ```
//! One capability descriptor per line, terminated by an empty line. The
//! client accepts iff at least one line starts with `TEXT TCP`.
//!
//! ### Task (Server → Client)
//! ```text
//! <operator> <operand1> <operand2>\n
//! ```
//!
//! ### Operators
//! - add / sub / mul / div — integer domain, truncated decimal output
//! - fadd / fsub / fmul / fdiv — float domain, 8-significant-digit output
//! - anything else — `ERROR`
//!
//! ### Result (Client → Server)
//! A single newline-terminated line: an integer, an 8-significant-digit
//! general-format float, or the literal `ERROR`.

mod handshake;
mod task;
mod evaluator;

pub use handshake::{validate_greeting, ACKNOWLEDGMENT, CAPABILITY_TOKEN, GREETING_TERMINATOR};
pub use task::{Domain, Task};
pub use evaluator::{evaluate, evaluate_parts, ERROR_RESULT, FDIV_NEAR_ZERO};
