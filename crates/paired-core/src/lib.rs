//! Core types and numerical routines for paired-sample testing
//!
//! This crate provides the foundation shared by the other paired-stats crates:
//!
//! - **Errors**: a single [`Error`] enum and [`Result`] alias
//! - **Special functions**: log-gamma and the regularized incomplete beta
//! - **Distributions**: self-contained Student-t and normal routines
//!
//! # Example
//!
//! ```rust
//! use paired_core::student_t;
//!
//! // Two-sided 95% critical value with 4 degrees of freedom
//! let critical = student_t::inverse_cdf(0.975, 4.0);
//! assert!((critical - 2.776_445).abs() < 1e-6);
//!
//! let p = student_t::cdf(critical, 4.0);
//! assert!((p - 0.975).abs() < 1e-12);
//! ```

pub mod error;
pub mod math;

// Re-export core types
pub use error::{Error, Result};
pub use math::distributions::{normal, student_t};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
