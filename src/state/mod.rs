//! State module for tracking walk progress
//!
//! # Components
//!
//! - `StepState`: Tracks the outcome of individual walk steps (pending, skipped, failed, fetched)

mod step_state;

pub use step_state::StepState;
