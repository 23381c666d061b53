//! Command implementations for the mdngen CLI.

pub mod generate;
