//! Task definitions
//!
//! Represents the single arithmetic task sent by the server.

/// Numeric domain of a task
///
/// Decided once from the operator name when the task is parsed: operator
/// names beginning with `f` select the float domain, everything else the
/// integer domain. Any `f`-prefixed name gets float operand parsing even
/// if it is not one of the four known float operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Integer,
    Float,
}

impl Domain {
    /// Derive the domain from an operator name
    pub fn of_operator(operator: &str) -> Self {
        if operator.starts_with('f') {
            Domain::Float
        } else {
            Domain::Integer
        }
    }
}

/// A parsed task: one operator and two textual operands
///
/// Parsed once from a single received line, consumed once by evaluation,
/// then discarded.
#[derive(Debug, Clone)]
pub struct Task {
    /// Operator name, matched literally at evaluation time
    pub operator: String,

    /// Numeric domain, fixed at parse time
    pub domain: Domain,

    /// First operand, unparsed text
    pub lhs: String,

    /// Second operand, unparsed text
    pub rhs: String,
}

impl Task {
    /// Parse a task from a whitespace-delimited line.
    ///
    /// Missing tokens become empty strings (which evaluate like any other
    /// non-numeric operand text); surplus tokens are ignored. Parsing
    /// itself never fails — an unusable task simply evaluates to `ERROR`.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();

        let operator = tokens.next().unwrap_or("").to_string();
        let lhs = tokens.next().unwrap_or("").to_string();
        let rhs = tokens.next().unwrap_or("").to_string();

        let domain = Domain::of_operator(&operator);

        Self {
            operator,
            domain,
            lhs,
            rhs,
        }
    }
}
