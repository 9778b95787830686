/*!
 * Error Types
 * Centralized error handling with thiserror and serde support
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid process record: {0}")]
    InvalidProcessRecord(String),

    #[error("Incomplete simulation: process {pid} never finished")]
    IncompleteSimulation { pid: Pid },
}

/// Result type for simulator operations
///
/// # Must Use
/// Validation and metric derivation can fail and must be handled
pub type Result<T> = std::result::Result<T, SimulationError>;
