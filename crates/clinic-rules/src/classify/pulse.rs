use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const CONTEXT: &str = "Pulse can rise with fever, dehydration, pain, anxiety, or recent \
activity. Doctors interpret it together with symptoms and temperature.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PulseRange {
    NotProvided,
    BelowTypical,
    Typical,
    AboveTypical,
    CheckEntry,
}

impl RangeLabel for PulseRange {
    const NOT_PROVIDED: Self = PulseRange::NotProvided;
    const CHECK_ENTRY: Self = PulseRange::CheckEntry;

    fn label(self) -> &'static str {
        match self {
            PulseRange::NotProvided => NOT_PROVIDED_LABEL,
            PulseRange::BelowTypical => "Below typical resting range",
            PulseRange::Typical => "Typical resting range",
            PulseRange::AboveTypical => "Above typical resting range",
            PulseRange::CheckEntry => "Check entry",
        }
    }
}

const RULES: &[Rule<u16, PulseRange>] = &[
    Rule {
        matches: |bpm| bpm < 60,
        range: PulseRange::BelowTypical,
    },
    Rule {
        matches: |bpm| (60..=100).contains(&bpm),
        range: PulseRange::Typical,
    },
    Rule {
        matches: |bpm| bpm > 100,
        range: PulseRange::AboveTypical,
    },
];

pub fn classify(pulse: Option<u16>) -> Classification<PulseRange> {
    match provided(pulse) {
        Some(bpm) => Classification::new(first_match(RULES, bpm), CONTEXT),
        None => Classification::not_provided(),
    }
}
