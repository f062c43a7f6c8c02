//! Client routines
//!
//! Every routine here is written against an abstract role; none names a
//! concrete variant. The demonstrations below hand them concrete values
//! and collect the resulting strings.

use crate::report::{DemoReport, Demonstration};
use idiom_adapter::{Adaptee, Adapter, DefaultTarget, SpecificRequest, Target};
use idiom_factory::{FamilyFactory, FamilyRegistry};
use idiom_template::{run_skeleton, AlgorithmSteps, HookedVariant, PlainVariant};

/// Exercise a factory through the abstract roles only
///
/// Creates both products and returns product B's own result followed by
/// the collaboration result.
#[must_use]
pub fn exercise_family(factory: &FamilyFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    vec![
        product_b.useful_function_b(),
        product_b.collaborate(product_a.as_ref()),
    ]
}

/// Exercise any target-capable value
#[must_use]
pub fn exercise_target(target: &dyn Target) -> String {
    target.request()
}

/// Exercise a skeleton variant, returning its transcript lines
#[must_use]
pub fn exercise_variant(variant: &dyn AlgorithmSteps) -> Vec<String> {
    run_skeleton(variant)
        .outputs()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Demonstrate family-based creation
///
/// Runs the same client routine against both built-in families, then pairs
/// family two's product B with family one's product A to show that a
/// mismatched collaboration executes and stays attributable.
#[must_use]
pub fn factory_demonstration() -> Demonstration {
    let registry = FamilyRegistry::with_defaults();
    let mut demo = Demonstration::new("family factory");

    for name in ["family_one", "family_two"] {
        let Some(factory) = registry.get(name) else {
            continue;
        };

        tracing::debug!(family = name, "exercising factory");
        demo.push(format!("client: testing client code with {name}"));
        demo.extend(exercise_family(factory));
    }

    // Deliberate mismatch, working with the families as plain values.
    let foreign_a = FamilyFactory::family_one().create_product_a();
    let product_b = FamilyFactory::family_two().create_product_b();

    demo.push("client: pairing family_two's product B with family_one's product A");
    demo.push(product_b.collaborate(foreign_a.as_ref()));

    demo
}

/// Demonstrate interface bridging
///
/// Shows the client handling a plain target, failing to make sense of the
/// raw adaptee, and then working with the adaptee through the adapter.
#[must_use]
pub fn adapter_demonstration() -> Demonstration {
    let mut demo = Demonstration::new("interface adapter");

    tracing::debug!("exercising default target");
    demo.push("client: I can work just fine with Target objects");
    demo.push(exercise_target(&DefaultTarget::new()));

    let adaptee = Adaptee::new();
    demo.push("client: the Adaptee has a weird interface, I don't understand it");
    demo.push(format!("Adaptee: {}", adaptee.specific_request()));

    tracing::debug!("exercising adapter");
    demo.push("client: but I can work with it through the Adapter");
    demo.push(exercise_target(&Adapter::new(adaptee)));

    demo
}

/// Demonstrate skeleton-algorithm extension
///
/// The same client routine drives a variant that overrides nothing and one
/// that overrides a hook; the step order never changes.
#[must_use]
pub fn template_demonstration() -> Demonstration {
    let mut demo = Demonstration::new("template algorithm");

    let variants: [&dyn AlgorithmSteps; 2] = [&PlainVariant::new(), &HookedVariant::new()];

    for variant in variants {
        tracing::debug!(variant = variant.name(), "running skeleton");
        demo.push(format!(
            "client: same client code running the {} variant",
            variant.name()
        ));
        demo.extend(exercise_variant(variant));
    }

    demo
}

/// Run all three demonstrations
#[must_use]
pub fn run_all() -> DemoReport {
    let mut report = DemoReport::new();

    for demonstration in [
        factory_demonstration(),
        adapter_demonstration(),
        template_demonstration(),
    ] {
        tracing::info!(
            title = demonstration.title(),
            lines = demonstration.lines().len(),
            "demonstration complete"
        );
        report.push(demonstration);
    }

    report
}
