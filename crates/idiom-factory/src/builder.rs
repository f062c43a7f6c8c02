//! Builder for composing a family from parts
//!
//! The builder is the seam through which custom families enter the system.
//! Finalizing without both creation operations is a contract-definition
//! violation and is rejected here, before the family can create anything.

use crate::error::FactoryError;
use crate::family::{FamilyFactory, ProductACtor, ProductBCtor};
use crate::product::{ProductA, ProductB};
use std::fmt;

/// Builder for a [`FamilyFactory`]
pub struct FamilyBuilder {
    name: String,
    make_a: Option<ProductACtor>,
    make_b: Option<ProductBCtor>,
}

impl FamilyBuilder {
    /// Start building a family under the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            make_a: None,
            make_b: None,
        }
    }

    /// Set the role-A constructor
    #[must_use]
    pub fn product_a<F, P>(mut self, make: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ProductA + 'static,
    {
        self.make_a = Some(Box::new(move || Box::new(make())));
        self
    }

    /// Set the role-B constructor
    #[must_use]
    pub fn product_b<F, P>(mut self, make: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ProductB + 'static,
    {
        self.make_b = Some(Box::new(move || Box::new(make())));
        self
    }

    /// Finalize the family
    ///
    /// # Errors
    /// Returns [`FactoryError::MissingProductA`] or
    /// [`FactoryError::MissingProductB`] if either creation operation was
    /// never supplied.
    pub fn build(self) -> Result<FamilyFactory, FactoryError> {
        let Self {
            name,
            make_a,
            make_b,
        } = self;

        let make_a = make_a.ok_or_else(|| FactoryError::MissingProductA {
            name: name.clone(),
        })?;

        let make_b = make_b.ok_or_else(|| FactoryError::MissingProductB {
            name: name.clone(),
        })?;

        Ok(FamilyFactory::from_parts(name, make_a, make_b))
    }
}

impl fmt::Debug for FamilyBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyBuilder")
            .field("name", &self.name)
            .field("has_product_a", &self.make_a.is_some())
            .field("has_product_b", &self.make_b.is_some())
            .finish()
    }
}
