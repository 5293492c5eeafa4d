use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const CONTEXT: &str = "BMI is a rough screening number based on height and weight. \
Clinicians usually read it alongside waist size, muscle mass, activity, and family history \
rather than on its own.";

/// Body-mass index: weight in kg over height in metres squared.
///
/// `None` unless both height and weight were supplied.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_m = provided(height_cm)? / 100.0;
    let weight = provided(weight_kg)?;
    Some(weight / (height_m * height_m))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiRange {
    NotProvided,
    LowerThanTypical,
    Typical,
    AboveTypical,
    HigherRisk,
    CheckEntry,
}

impl RangeLabel for BmiRange {
    const NOT_PROVIDED: Self = BmiRange::NotProvided;
    const CHECK_ENTRY: Self = BmiRange::CheckEntry;

    fn label(self) -> &'static str {
        match self {
            BmiRange::NotProvided => NOT_PROVIDED_LABEL,
            BmiRange::LowerThanTypical => "Lower than typical range",
            BmiRange::Typical => "Typical range",
            BmiRange::AboveTypical => "Above typical range",
            BmiRange::HigherRisk => "Higher risk range",
            BmiRange::CheckEntry => "Check entry",
        }
    }
}

const RULES: &[Rule<f64, BmiRange>] = &[
    Rule {
        matches: |bmi| bmi < 18.5,
        range: BmiRange::LowerThanTypical,
    },
    Rule {
        matches: |bmi| (18.5..25.0).contains(&bmi),
        range: BmiRange::Typical,
    },
    Rule {
        matches: |bmi| (25.0..30.0).contains(&bmi),
        range: BmiRange::AboveTypical,
    },
    Rule {
        matches: |bmi| bmi >= 30.0,
        range: BmiRange::HigherRisk,
    },
];

pub fn classify(bmi: Option<f64>) -> Classification<BmiRange> {
    match provided(bmi) {
        Some(value) => Classification::new(first_match(RULES, value), CONTEXT),
        None => Classification::not_provided(),
    }
}
