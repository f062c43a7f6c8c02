//! Family factory values
//!
//! A [`FamilyFactory`] binds both creation operations together at
//! construction, so a single factory value cannot mix variants from
//! different families.

use crate::product::{ProductA, ProductA1, ProductA2, ProductB, ProductB1, ProductB2};
use std::fmt;

/// Constructor for role-A products
pub(crate) type ProductACtor = Box<dyn Fn() -> Box<dyn ProductA> + Send + Sync>;

/// Constructor for role-B products
pub(crate) type ProductBCtor = Box<dyn Fn() -> Box<dyn ProductB> + Send + Sync>;

/// A matched family of product constructors
///
/// # Consistency
/// Both creation operations are fixed when the value is built, which makes
/// the family-consistency invariant structural: `create_product_a` and
/// `create_product_b` always draw from the same family for the lifetime of
/// the value.
///
/// Products are constructed fresh per call and carry no identity across
/// calls.
pub struct FamilyFactory {
    name: String,
    make_a: ProductACtor,
    make_b: ProductBCtor,
}

impl FamilyFactory {
    pub(crate) fn from_parts(name: String, make_a: ProductACtor, make_b: ProductBCtor) -> Self {
        Self {
            name,
            make_a,
            make_b,
        }
    }

    /// Built-in first family: products A1 and B1
    #[must_use]
    pub fn family_one() -> Self {
        Self::from_parts(
            "family_one".to_string(),
            Box::new(|| Box::new(ProductA1)),
            Box::new(|| Box::new(ProductB1)),
        )
    }

    /// Built-in second family: products A2 and B2
    #[must_use]
    pub fn family_two() -> Self {
        Self::from_parts(
            "family_two".to_string(),
            Box::new(|| Box::new(ProductA2)),
            Box::new(|| Box::new(ProductB2)),
        )
    }

    /// Family name (for registry lookup and reporting)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create this family's role-A product
    #[must_use]
    pub fn create_product_a(&self) -> Box<dyn ProductA> {
        (self.make_a)()
    }

    /// Create this family's role-B product
    #[must_use]
    pub fn create_product_b(&self) -> Box<dyn ProductB> {
        (self.make_b)()
    }
}

impl fmt::Debug for FamilyFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
