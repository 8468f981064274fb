//! Core components of the `iex-rs` client.
//!
//! This module contains the pieces shared by every request:
//! - The [`IexClient`] transport and its builder.
//! - The primary [`IexError`] type.
//! - Internal networking helpers.

/// The main client (`IexClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IexError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IexClient`
pub use client::{IexClient, IexClientBuilder};
pub use error::IexError;
