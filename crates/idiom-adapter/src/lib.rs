//! Interface bridging
//!
//! Makes a pre-existing, incompatibly-shaped capability usable wherever the
//! caller-expected capability is required, without modifying either side.
//!
//! # Core Concepts
//!
//! - [`Target`]: the capability clients expect
//! - [`SpecificRequest`]: the incompatible capability an existing
//!   collaborator already provides
//! - [`Adapter`]: satisfies [`Target`] by holding an owned
//!   [`SpecificRequest`] value and reversing its output
//! - [`DefaultTarget`]: a plain target, for showing clients handle both
//!   uniformly
//!
//! # Example
//!
//! ```rust,ignore
//! use idiom_adapter::{Adaptee, Adapter, Target};
//!
//! let adapter = Adapter::new(Adaptee::new());
//! println!("{}", adapter.request());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod adaptee;
mod adapter;
mod target;

// Re-exports
pub use adaptee::{Adaptee, SpecificRequest};
pub use adapter::{reverse, Adapter};
pub use target::{DefaultTarget, Target};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
