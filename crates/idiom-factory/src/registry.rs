//! Registry of named families
//!
//! Client code selects a family by name and works with it through the
//! abstract roles only. Registration is the second definition-time gate:
//! a name can hold at most one family.

use crate::error::FactoryError;
use crate::family::FamilyFactory;
use std::collections::HashMap;

/// Registry mapping names to [`FamilyFactory`] values
#[derive(Debug, Default)]
pub struct FamilyRegistry {
    families: HashMap<String, FamilyFactory>,
}

impl FamilyRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    /// Create registry with the built-in families
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Built-in names are distinct, so these insertions cannot collide.
        for family in [FamilyFactory::family_one(), FamilyFactory::family_two()] {
            registry.families.insert(family.name().to_string(), family);
        }

        registry
    }

    /// Register a family under its own name
    ///
    /// # Errors
    /// Returns [`FactoryError::DuplicateFamily`] if the name is taken.
    pub fn register(&mut self, family: FamilyFactory) -> Result<(), FactoryError> {
        let name = family.name().to_string();

        if self.families.contains_key(&name) {
            return Err(FactoryError::DuplicateFamily { name });
        }

        self.families.insert(name, family);
        Ok(())
    }

    /// Look up a family by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FamilyFactory> {
        self.families.get(name)
    }

    /// Check if a family exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Remove a family, returning it if present
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<FamilyFactory> {
        self.families.remove(name)
    }

    /// List all registered family names
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.families.keys().map(String::as_str).collect()
    }

    /// Get number of registered families
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Iterate over all registered families
    pub fn iter(&self) -> impl Iterator<Item = &FamilyFactory> {
        self.families.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FamilyBuilder;
    use crate::product::{ProductA2, ProductB2};

    #[test]
    fn registry_new_empty() {
        let registry = FamilyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_with_defaults() {
        let registry = FamilyRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("family_one"));
        assert!(registry.contains("family_two"));
    }

    #[test]
    fn registry_register_custom() {
        let mut registry = FamilyRegistry::with_defaults();

        let custom = FamilyBuilder::new("custom")
            .product_a(|| ProductA2)
            .product_b(|| ProductB2)
            .build()
            .unwrap();

        registry.register(custom).unwrap();
        assert!(registry.contains("custom"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn registry_rejects_duplicate_name() {
        let mut registry = FamilyRegistry::with_defaults();

        let result = registry.register(FamilyFactory::family_one());
        assert!(matches!(
            result,
            Err(FactoryError::DuplicateFamily { .. })
        ));

        // Original registration is untouched.
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_get_yields_working_factory() {
        let registry = FamilyRegistry::with_defaults();

        let factory = registry.get("family_two").unwrap();
        let b = factory.create_product_b();
        assert_eq!(b.useful_function_b(), "The result of the product B2.");
    }

    #[test]
    fn registry_remove() {
        let mut registry = FamilyRegistry::with_defaults();
        let removed = registry.remove("family_one");
        assert!(removed.is_some());
        assert!(!registry.contains("family_one"));
    }

    #[test]
    fn registry_names() {
        let registry = FamilyRegistry::with_defaults();
        let names = registry.names();

        assert!(names.contains(&"family_one"));
        assert!(names.contains(&"family_two"));
    }
}
