//! Core components of the `newslens-rs` pipeline.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - Shared domain models like [`Article`](models::Article) and the
//!   sentiment/bias/impact label enums.

/// The main client (`NewsClient`), builder, and endpoint constants.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Shared domain models used across the pipeline stages.
pub mod models;

pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;
