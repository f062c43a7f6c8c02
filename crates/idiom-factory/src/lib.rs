//! Family-based object creation
//!
//! Matched families of two collaborating product roles, created through a
//! single factory value so that client code never names a concrete type.
//!
//! # Core Concepts
//!
//! - [`ProductA`] / [`ProductB`]: the two abstract product roles
//! - [`FamilyFactory`]: a family as a value, both creation operations bound
//!   at construction
//! - [`FamilyBuilder`]: compose a custom family; incomplete families are
//!   rejected before they can create anything
//! - [`FamilyRegistry`]: named families for client selection
//!
//! # Example
//!
//! ```rust,ignore
//! use idiom_factory::FamilyRegistry;
//!
//! let registry = FamilyRegistry::with_defaults();
//! let factory = registry.get("family_one").unwrap();
//!
//! let product_a = factory.create_product_a();
//! let product_b = factory.create_product_b();
//!
//! println!("{}", product_b.collaborate(product_a.as_ref()));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod error;
mod family;
mod product;
mod registry;

// Re-exports
pub use builder::FamilyBuilder;
pub use error::FactoryError;
pub use family::FamilyFactory;
pub use product::{ProductA, ProductA1, ProductA2, ProductB, ProductB1, ProductB2};
pub use registry::FamilyRegistry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
