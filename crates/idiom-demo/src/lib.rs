//! Demonstrating client for the idiom catalog
//!
//! Exercises each component crate polymorphically, without knowledge of the
//! concrete variant it received, and collects the human-readable result
//! strings into a printable, serializable report.
//!
//! # Core Concepts
//!
//! - [`exercise_family`] / [`exercise_target`] / [`exercise_variant`]:
//!   client routines written against the abstract roles only
//! - [`factory_demonstration`] / [`adapter_demonstration`] /
//!   [`template_demonstration`]: one scripted demonstration per component
//! - [`DemoReport`]: the aggregate transcript of a full run
//!
//! # Example
//!
//! ```rust,ignore
//! let report = idiom_demo::run_all();
//! print!("{}", report.render());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod client;
mod report;

// Re-exports
pub use client::{
    adapter_demonstration, exercise_family, exercise_target, exercise_variant,
    factory_demonstration, run_all, template_demonstration,
};
pub use report::{DemoReport, Demonstration};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
