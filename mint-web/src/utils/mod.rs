//! Page-level helpers

pub mod constants;
