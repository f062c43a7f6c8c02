//! The fixed algorithm skeleton
//!
//! The sequencing lives in a free function, [`run_skeleton`], so no variant
//! can override it. Variants supply only the two required steps and,
//! optionally, the two hooks.

use crate::step::{StepLabel, StepRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of the first shared step
pub const FIXED_STEP_ONE: &str = "skeleton: I am doing the bulk of the work";

/// Output of the second shared step
pub const FIXED_STEP_TWO: &str = "skeleton: but I let variants override some operations";

/// Output of the third shared step
pub const FIXED_STEP_THREE: &str = "skeleton: but I am doing the bulk of the work anyway";

/// Variant-supplied parts of the algorithm
///
/// The two required steps have no default; a variant that omits one does
/// not compile, so the contract violation is caught at definition time.
/// The hooks default to emitting nothing and may be overridden.
pub trait AlgorithmSteps: Send + Sync + fmt::Debug {
    /// First mandatory step
    fn required_step_one(&self) -> String;

    /// Second mandatory step
    fn required_step_two(&self) -> String;

    /// First optional extension point
    fn hook_one(&self) -> Option<String> {
        None
    }

    /// Second optional extension point
    fn hook_two(&self) -> Option<String> {
        None
    }

    /// Variant name (for debugging/reporting)
    fn name(&self) -> &'static str;
}

/// Execute the skeleton over a variant
///
/// Runs the seven steps in their fixed order; no step is skipped or
/// reordered regardless of variant. Hooks left at their default appear in
/// the run as silent records.
#[must_use]
pub fn run_skeleton(variant: &dyn AlgorithmSteps) -> AlgorithmRun {
    let records = vec![
        StepRecord::emitted(StepLabel::FixedOne, FIXED_STEP_ONE),
        StepRecord::emitted(StepLabel::RequiredOne, variant.required_step_one()),
        StepRecord::emitted(StepLabel::FixedTwo, FIXED_STEP_TWO),
        hook_record(StepLabel::HookOne, variant.hook_one()),
        StepRecord::emitted(StepLabel::RequiredTwo, variant.required_step_two()),
        StepRecord::emitted(StepLabel::FixedThree, FIXED_STEP_THREE),
        hook_record(StepLabel::HookTwo, variant.hook_two()),
    ];

    AlgorithmRun {
        variant: variant.name().to_string(),
        records,
    }
}

fn hook_record(label: StepLabel, output: Option<String>) -> StepRecord {
    match output {
        Some(text) => StepRecord::emitted(label, text),
        None => StepRecord::silent(label),
    }
}

/// One completed execution of the skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    variant: String,
    records: Vec<StepRecord>,
}

impl AlgorithmRun {
    /// Name of the variant that ran
    #[inline]
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// The executed steps, in order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Labels of the executed steps, in order
    #[must_use]
    pub fn labels(&self) -> Vec<StepLabel> {
        self.records.iter().map(|r| r.label).collect()
    }

    /// Texts emitted by the steps that produced any, in order
    #[must_use]
    pub fn outputs(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.output.as_deref())
            .collect()
    }

    /// The run rendered as the ordered concatenation of step outputs
    #[must_use]
    pub fn transcript(&self) -> String {
        self.outputs().join("\n")
    }
}
