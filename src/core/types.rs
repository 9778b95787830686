/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Priority level (0 and up, lower is more important)
pub type Priority = u32;

/// Simulated time in abstract integer ticks
pub type SimTime = u64;

/// Index of a ready queue (0 = highest priority)
pub type QueueLevel = usize;
