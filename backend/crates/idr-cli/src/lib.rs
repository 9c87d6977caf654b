//! idr-cli library
//!
//! Exports the HTTP client and argument types for the `idr` binary and tests.

pub mod cli;
pub(crate) mod client;
pub mod commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::{Commands, InfoKindArg};
