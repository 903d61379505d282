//! # Concept Tour
//!
//! A small crate that walks through core language concepts in idiomatic
//! Rust. Each concept is a self-contained module; the `tour` binary plays
//! the role of a script driver, running each demo and printing the result.
//!
//! ## Modules
//!
//! - **Counter** ([`counter`]) - An encapsulated integer accumulator, the
//!   one stateful construct in the crate, in single-owner and thread-safe
//!   forms
//! - **Demos** ([`demos`]) - Checked arithmetic, trait-based polymorphism,
//!   function composition, delayed async computation, and recursive
//!   Fibonacci
//! - **Config** ([`config`]) - Environment-driven settings for the binary
//! - **Errors** ([`error`]) - The shared [`TourError`] type
//!
//! ## Quick Start
//!
//! ```bash
//! # Run every demo in sequence
//! cargo run -- all
//!
//! # Or a single one
//! cargo run -- fib 8
//! cargo run -- counter --increments 2 --decrements 1
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`];
//! see the [`config`] module for available options. All of them default.

pub mod config;
pub mod counter;
pub mod demos;
pub mod error;

pub use counter::{Counter, SharedCounter};
pub use error::TourError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::counter::{Counter, SharedCounter};
    pub use crate::demos::animals::{Animal, Describe, Dog};
    pub use crate::demos::compose::{Pipeline, compose};
    pub use crate::demos::fib::fibonacci;
    pub use crate::error::TourError;
}
