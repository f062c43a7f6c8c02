//! Step labels and records
//!
//! Every execution of the skeleton yields one record per step, labeled so
//! the emitted sequence can be asserted against the declared order.

use serde::{Deserialize, Serialize};

/// Label of one skeleton step
///
/// The declared order is [`StepLabel::SEQUENCE`]; no variant can skip or
/// reorder it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLabel {
    /// First shared step
    FixedOne,

    /// First variant-supplied step
    RequiredOne,

    /// Second shared step
    FixedTwo,

    /// First optional extension point
    HookOne,

    /// Second variant-supplied step
    RequiredTwo,

    /// Third shared step
    FixedThree,

    /// Second optional extension point
    HookTwo,
}

impl StepLabel {
    /// The fixed seven-step order of the skeleton
    pub const SEQUENCE: [StepLabel; 7] = [
        StepLabel::FixedOne,
        StepLabel::RequiredOne,
        StepLabel::FixedTwo,
        StepLabel::HookOne,
        StepLabel::RequiredTwo,
        StepLabel::FixedThree,
        StepLabel::HookTwo,
    ];

    /// Check if this step is implemented once and shared by all variants
    #[inline]
    #[must_use]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::FixedOne | Self::FixedTwo | Self::FixedThree)
    }

    /// Check if this step must be supplied by every variant
    #[inline]
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::RequiredOne | Self::RequiredTwo)
    }

    /// Check if this step is an optional extension point
    #[inline]
    #[must_use]
    pub fn is_hook(self) -> bool {
        matches!(self, Self::HookOne | Self::HookTwo)
    }
}

/// One executed step: its label and whatever text it emitted
///
/// Hooks left at their default emit nothing but still appear in the
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Which step ran
    pub label: StepLabel,

    /// Text the step emitted, if any
    pub output: Option<String>,
}

impl StepRecord {
    /// Record a step that emitted text
    #[inline]
    #[must_use]
    pub fn emitted(label: StepLabel, output: impl Into<String>) -> Self {
        Self {
            label,
            output: Some(output.into()),
        }
    }

    /// Record a step that ran silently
    #[inline]
    #[must_use]
    pub fn silent(label: StepLabel) -> Self {
        Self {
            label,
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_seven_steps_in_declared_order() {
        assert_eq!(StepLabel::SEQUENCE.len(), 7);
        assert_eq!(StepLabel::SEQUENCE[0], StepLabel::FixedOne);
        assert_eq!(StepLabel::SEQUENCE[3], StepLabel::HookOne);
        assert_eq!(StepLabel::SEQUENCE[6], StepLabel::HookTwo);
    }

    #[test]
    fn step_kinds_partition_the_sequence() {
        for label in StepLabel::SEQUENCE {
            let kinds = [label.is_fixed(), label.is_required(), label.is_hook()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1);
        }

        assert_eq!(StepLabel::SEQUENCE.iter().filter(|l| l.is_fixed()).count(), 3);
        assert_eq!(
            StepLabel::SEQUENCE.iter().filter(|l| l.is_required()).count(),
            2
        );
        assert_eq!(StepLabel::SEQUENCE.iter().filter(|l| l.is_hook()).count(), 2);
    }

    #[test]
    fn labels_serialize_snake_case() {
        let json = serde_json::to_string(&StepLabel::RequiredOne).unwrap();
        assert_eq!(json, "\"required_one\"");
    }

    #[test]
    fn record_constructors() {
        let emitted = StepRecord::emitted(StepLabel::FixedOne, "work");
        assert_eq!(emitted.output.as_deref(), Some("work"));

        let silent = StepRecord::silent(StepLabel::HookTwo);
        assert!(silent.output.is_none());
    }
}
