//! Self-contained demonstrations of individual language concepts.
//!
//! Each submodule illustrates one idea and has no dependency on the others
//! beyond the shared error type:
//!
//! - [`arith`] - Checked arithmetic helpers
//! - [`animals`] - Trait-based polymorphism and method overriding
//! - [`compose`] - Right-to-left function composition
//! - [`fetch`] - Delayed asynchronous computation
//! - [`fib`] - Recursive Fibonacci sequence

pub mod animals;
pub mod arith;
pub mod compose;
pub mod fetch;
pub mod fib;
