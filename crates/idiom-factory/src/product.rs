//! Product role traits and built-in variants
//!
//! Two product roles make up a family. Role A stands alone; role B can do
//! its own thing but also collaborate with any role-A value it is handed.

use std::fmt;

/// First product role of a family
///
/// Every variant returns a fixed descriptive string identifying itself.
pub trait ProductA: Send + Sync + fmt::Debug {
    /// Produce this variant's descriptive result
    fn useful_function_a(&self) -> String;
}

/// Second product role of a family
///
/// # Collaboration
/// `collaborate` accepts *any* [`ProductA`], not just one from the same
/// family. A mismatched pairing still executes and returns a string whose
/// embedded component is attributable to the supplied collaborator; only
/// same-family pairings are semantically consistent. This is caller
/// discipline, not an enforced invariant.
pub trait ProductB: Send + Sync + fmt::Debug {
    /// Produce this variant's own descriptive result
    fn useful_function_b(&self) -> String;

    /// Embed the collaborator's result in this variant's output
    fn collaborate(&self, collaborator: &dyn ProductA) -> String;
}

/// Role-A variant of the first family
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductA1;

impl ProductA for ProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

/// Role-A variant of the second family
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductA2;

impl ProductA for ProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

/// Role-B variant of the first family
///
/// Works correctly only with [`ProductA1`], but accepts any role-A value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductB1;

impl ProductB for ProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({result})")
    }
}

/// Role-B variant of the second family
///
/// Works correctly only with [`ProductA2`], but accepts any role-A value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductB2;

impl ProductB for ProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({result})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_a_variants_identify_themselves() {
        assert_eq!(ProductA1.useful_function_a(), "The result of the product A1.");
        assert_eq!(ProductA2.useful_function_a(), "The result of the product A2.");
    }

    #[test]
    fn product_b_variants_identify_themselves() {
        assert_eq!(ProductB1.useful_function_b(), "The result of the product B1.");
        assert_eq!(ProductB2.useful_function_b(), "The result of the product B2.");
    }

    #[test]
    fn same_family_collaboration_embeds_collaborator() {
        let result = ProductB1.collaborate(&ProductA1);
        assert!(result.contains("The result of the product A1."));
        assert!(result.contains("B1"));
    }

    #[test]
    fn cross_family_collaboration_still_executes() {
        // Permitted but logically inconsistent: the embedded component is
        // the supplied collaborator's, not the expected-family one.
        let result = ProductB2.collaborate(&ProductA1);
        assert!(result.contains("The result of the product A1."));
        assert!(!result.contains("The result of the product A2."));
    }

    #[test]
    fn collaboration_is_permissive_over_any_role_a() {
        #[derive(Debug)]
        struct ForeignA;

        impl ProductA for ForeignA {
            fn useful_function_a(&self) -> String {
                "foreign".to_string()
            }
        }

        let result = ProductB1.collaborate(&ForeignA);
        assert!(result.contains("foreign"));
    }
}
