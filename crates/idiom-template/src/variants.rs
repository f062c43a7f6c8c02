//! Built-in variants
//!
//! Variants typically override only a fraction of the extension points:
//! [`PlainVariant`] supplies the required steps and nothing else, while
//! [`HookedVariant`] also overrides the first hook.

use crate::skeleton::AlgorithmSteps;

/// Variant that leaves both hooks at their silent default
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainVariant;

impl PlainVariant {
    /// Create new plain variant
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AlgorithmSteps for PlainVariant {
    fn required_step_one(&self) -> String {
        "plain variant: implemented required step one".to_string()
    }

    fn required_step_two(&self) -> String {
        "plain variant: implemented required step two".to_string()
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

/// Variant that overrides the first hook only
#[derive(Debug, Clone, Copy, Default)]
pub struct HookedVariant;

impl HookedVariant {
    /// Create new hooked variant
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AlgorithmSteps for HookedVariant {
    fn required_step_one(&self) -> String {
        "hooked variant: implemented required step one".to_string()
    }

    fn required_step_two(&self) -> String {
        "hooked variant: implemented required step two".to_string()
    }

    fn hook_one(&self) -> Option<String> {
        Some("hooked variant: overridden hook one".to_string())
    }

    fn name(&self) -> &'static str {
        "hooked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_variant_keeps_hooks_silent() {
        assert!(PlainVariant::new().hook_one().is_none());
        assert!(PlainVariant::new().hook_two().is_none());
    }

    #[test]
    fn hooked_variant_overrides_first_hook_only() {
        let variant = HookedVariant::new();
        assert!(variant.hook_one().is_some());
        assert!(variant.hook_two().is_none());
    }

    #[test]
    fn variant_names_differ() {
        assert_ne!(PlainVariant::new().name(), HookedVariant::new().name());
    }
}
