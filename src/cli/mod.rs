//! Command-line driver

pub mod orchestration;

pub use orchestration::{run, Operation, RunArgs};
