//! Command implementations for the `dsag` binary.

pub mod commands;
