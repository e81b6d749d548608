//! Adapter implementations of the task list repository port.

pub mod memory;
pub mod postgres;
