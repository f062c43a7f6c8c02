//! Functional tests for the fixed step ordering.
//!
//! This module exercises the skeleton's sole invariant: every execution
//! performs exactly seven steps in the declared order, for every variant,
//! with hooks free to stay silent but never free to move.

use idiom_template::{
    run_skeleton, AlgorithmSteps, HookedVariant, PlainVariant, StepLabel,
};
use pretty_assertions::assert_eq;

/// Tenet: the emitted label sequence matches the declared order for every
/// built-in variant, including the one that overrides nothing.
#[test]
fn every_variant_runs_seven_steps_in_order() {
    let variants: [&dyn AlgorithmSteps; 2] = [&PlainVariant::new(), &HookedVariant::new()];

    for variant in variants {
        let run = run_skeleton(variant);
        assert_eq!(run.records().len(), 7);
        assert_eq!(run.labels(), StepLabel::SEQUENCE.to_vec());
    }
}

/// Tenet: a hook override changes what a step emits, never where it sits.
#[test]
fn hook_override_emits_without_reordering() {
    let run = run_skeleton(&HookedVariant::new());

    let hook_one = &run.records()[3];
    assert_eq!(hook_one.label, StepLabel::HookOne);
    assert_eq!(
        hook_one.output.as_deref(),
        Some("hooked variant: overridden hook one")
    );

    // Hook two was not overridden and stays silent, in place.
    let hook_two = &run.records()[6];
    assert_eq!(hook_two.label, StepLabel::HookTwo);
    assert!(hook_two.output.is_none());
}

/// Tenet: the transcript is the ordered concatenation of step effects.
#[test]
fn transcript_interleaves_shared_and_variant_output() {
    let transcript = run_skeleton(&PlainVariant::new()).transcript();

    let skeleton_first = transcript.find("bulk of the work").unwrap();
    let variant_first = transcript.find("required step one").unwrap();
    let variant_second = transcript.find("required step two").unwrap();

    assert!(skeleton_first < variant_first);
    assert!(variant_first < variant_second);
}

/// A run serializes with its labels intact, so external tooling can check
/// ordering without re-running the algorithm.
#[test]
fn run_serializes_with_labeled_steps() {
    let run = run_skeleton(&HookedVariant::new());
    let json = serde_json::to_string(&run).unwrap();

    assert!(json.contains("\"required_one\""));
    assert!(json.contains("\"hook_two\""));

    let restored: idiom_template::AlgorithmRun = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.labels(), StepLabel::SEQUENCE.to_vec());
}
