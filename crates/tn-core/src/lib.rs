//! # tn-core
//!
//! Core types and error definitions for tnorm.
//!
//! This crate provides the building blocks shared across the workspace –
//! primitive type aliases, the error enum, and the `ensure!` / `fail!`
//! convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// Seed type for the pseudo-random number generators.
pub type Seed = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
