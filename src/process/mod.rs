/*!
 * Process Module
 * Schedulable unit and its validated input record
 */

pub mod types;

// Re-export public API
pub use types::{Process, ProcessRecord, ProcessState};
