//! # dent-types
//!
//! Shared error types, runtime warnings, and tuning constants
//! for the dent deformation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other dent crates share.

pub mod constants;
pub mod error;
pub mod warning;

pub use error::{DentError, DentResult};
pub use warning::RuntimeWarning;
