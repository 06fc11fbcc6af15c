#![allow(dead_code)]

pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::FaultyStore;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
