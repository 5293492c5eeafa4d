use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const CONTEXT: &str = "Fever is the body's response to infection or inflammation. In Nigeria, \
clinicians may consider things like malaria or respiratory infections depending on symptoms and \
test results.";

/// Lower edge of the fever range, °C.
pub const FEVER_THRESHOLD_C: f64 = 37.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemperatureRange {
    NotProvided,
    BelowTypical,
    Typical,
    Fever,
    HighFever,
    CheckEntry,
}

impl RangeLabel for TemperatureRange {
    const NOT_PROVIDED: Self = TemperatureRange::NotProvided;
    const CHECK_ENTRY: Self = TemperatureRange::CheckEntry;

    fn label(self) -> &'static str {
        match self {
            TemperatureRange::NotProvided => NOT_PROVIDED_LABEL,
            TemperatureRange::BelowTypical => "Below typical",
            TemperatureRange::Typical => "Typical",
            TemperatureRange::Fever => "Fever range",
            TemperatureRange::HighFever => "High fever range",
            TemperatureRange::CheckEntry => "Check entry",
        }
    }
}

const RULES: &[Rule<f64, TemperatureRange>] = &[
    Rule {
        matches: |t| t < 36.0,
        range: TemperatureRange::BelowTypical,
    },
    Rule {
        matches: |t| (36.0..FEVER_THRESHOLD_C).contains(&t),
        range: TemperatureRange::Typical,
    },
    Rule {
        matches: |t| (FEVER_THRESHOLD_C..39.0).contains(&t),
        range: TemperatureRange::Fever,
    },
    Rule {
        matches: |t| t >= 39.0,
        range: TemperatureRange::HighFever,
    },
];

pub fn classify(temperature_c: Option<f64>) -> Classification<TemperatureRange> {
    match provided(temperature_c) {
        Some(t) => Classification::new(first_match(RULES, t), CONTEXT),
        None => Classification::not_provided(),
    }
}
