//! Skeleton-algorithm extension
//!
//! A seven-step algorithm whose sequencing is fixed once, outside any
//! variant: shared steps are implemented here, mandatory steps are trait
//! methods without defaults, and hooks default to doing nothing.
//!
//! # Core Concepts
//!
//! - [`AlgorithmSteps`]: the variant-supplied parts (required steps, hooks)
//! - [`run_skeleton`]: the non-overridable orchestrating sequence
//! - [`StepLabel`] / [`StepRecord`] / [`AlgorithmRun`]: the observable,
//!   ordered trace of one execution
//! - [`PlainVariant`] / [`HookedVariant`]: built-in variants
//!
//! # Example
//!
//! ```rust,ignore
//! use idiom_template::{run_skeleton, HookedVariant};
//!
//! let run = run_skeleton(&HookedVariant::new());
//! println!("{}", run.transcript());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod skeleton;
mod step;
mod variants;

// Re-exports
pub use skeleton::{
    run_skeleton, AlgorithmRun, AlgorithmSteps, FIXED_STEP_ONE, FIXED_STEP_THREE, FIXED_STEP_TWO,
};
pub use step::{StepLabel, StepRecord};
pub use variants::{HookedVariant, PlainVariant};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
