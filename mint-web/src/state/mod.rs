//! Shared reactive state

pub mod wallet;
