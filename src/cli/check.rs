//! Validate zone specifications without evaluating them

use super::CliError;
use crate::parse;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The specification to validate
    pub spec: String,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// Fully parenthesised rendering of the parsed tree
    pub formatted: String,
    /// Number of nodes in the parsed tree
    pub nodes: usize,
}

/// Parse a specification and describe the resulting tree
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expr = parse(&options.spec).map_err(|e| CliError::parse(&options.spec, e))?;
    Ok(CheckResult {
        formatted: expr.to_string(),
        nodes: expr.node_count(),
    })
}
