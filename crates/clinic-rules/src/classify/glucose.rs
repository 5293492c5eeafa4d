use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const FASTING_CONTEXT: &str = "Fasting glucose is best interpreted with context (illness, \
stress, medications). Doctors may confirm with a repeat test or HbA1c.";

pub const RANDOM_CONTEXT: &str = "Random glucose depends on what you ate recently and how long \
ago. Doctors may suggest fasting glucose or HbA1c for clarity.";

/// Top of the typical range, mmol/L. Anything above it is worth confirming.
pub fn upper_typical_bound(fasting: bool) -> f64 {
    if fasting { 5.5 } else { 7.7 }
}

/// Fasting and random readings use separate tables, so each has its own tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GlucoseRange {
    NotProvided,
    LowFasting,
    TypicalFasting,
    AboveTypicalFasting,
    HighFasting,
    LowRandom,
    CommonRandom,
    AboveTypicalRandom,
    HighRandom,
    CheckEntry,
}

impl RangeLabel for GlucoseRange {
    const NOT_PROVIDED: Self = GlucoseRange::NotProvided;
    const CHECK_ENTRY: Self = GlucoseRange::CheckEntry;

    fn label(self) -> &'static str {
        match self {
            GlucoseRange::NotProvided => NOT_PROVIDED_LABEL,
            GlucoseRange::LowFasting => "Low fasting range",
            GlucoseRange::TypicalFasting => "Typical fasting range",
            GlucoseRange::AboveTypicalFasting => "Above typical fasting range",
            GlucoseRange::HighFasting => "High fasting range",
            GlucoseRange::LowRandom => "Low range",
            GlucoseRange::CommonRandom => "Common random range",
            GlucoseRange::AboveTypicalRandom => "Above typical random range",
            GlucoseRange::HighRandom => "High random range",
            GlucoseRange::CheckEntry => "Check entry",
        }
    }
}

const FASTING_RULES: &[Rule<f64, GlucoseRange>] = &[
    Rule {
        matches: |g| g < 3.9,
        range: GlucoseRange::LowFasting,
    },
    Rule {
        matches: |g| (3.9..5.6).contains(&g),
        range: GlucoseRange::TypicalFasting,
    },
    Rule {
        matches: |g| (5.6..7.0).contains(&g),
        range: GlucoseRange::AboveTypicalFasting,
    },
    Rule {
        matches: |g| g >= 7.0,
        range: GlucoseRange::HighFasting,
    },
];

const RANDOM_RULES: &[Rule<f64, GlucoseRange>] = &[
    Rule {
        matches: |g| g < 3.9,
        range: GlucoseRange::LowRandom,
    },
    Rule {
        matches: |g| (3.9..7.8).contains(&g),
        range: GlucoseRange::CommonRandom,
    },
    Rule {
        matches: |g| (7.8..=11.0).contains(&g),
        range: GlucoseRange::AboveTypicalRandom,
    },
    Rule {
        matches: |g| g > 11.0,
        range: GlucoseRange::HighRandom,
    },
];

pub fn classify(glucose_mmol: Option<f64>, fasting: bool) -> Classification<GlucoseRange> {
    let Some(glucose) = provided(glucose_mmol) else {
        return Classification::not_provided();
    };
    if fasting {
        Classification::new(first_match(FASTING_RULES, glucose), FASTING_CONTEXT)
    } else {
        Classification::new(first_match(RANDOM_RULES, glucose), RANDOM_CONTEXT)
    }
}
