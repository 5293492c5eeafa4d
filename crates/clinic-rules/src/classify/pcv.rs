use clinic_core::models::options::Sex;
use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const CONTEXT: &str = "When PCV is low, doctors often check nutrition, recent infections \
(including malaria depending on exposure), and any history of blood loss. It does not \
automatically mean something serious, but it deserves review.";

/// Conservative adult packed-cell volume cutoffs, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcvCutoffs {
    pub low: f64,
    pub high: f64,
}

pub fn cutoffs(sex: Sex) -> PcvCutoffs {
    match sex {
        Sex::Male => PcvCutoffs { low: 40.0, high: 54.0 },
        Sex::Female => PcvCutoffs { low: 36.0, high: 48.0 },
        Sex::Unspecified => PcvCutoffs { low: 37.0, high: 52.0 },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PcvRange {
    NotProvided,
    BelowTypical,
    Typical,
    AboveTypical,
    CheckEntry,
}

impl RangeLabel for PcvRange {
    const NOT_PROVIDED: Self = PcvRange::NotProvided;
    const CHECK_ENTRY: Self = PcvRange::CheckEntry;

    fn label(self) -> &'static str {
        match self {
            PcvRange::NotProvided => NOT_PROVIDED_LABEL,
            PcvRange::BelowTypical => "Below typical",
            PcvRange::Typical => "Typical",
            PcvRange::AboveTypical => "Above typical",
            PcvRange::CheckEntry => "Check entry",
        }
    }
}

const RULES: &[Rule<(f64, PcvCutoffs), PcvRange>] = &[
    Rule {
        matches: |(pcv, cut)| pcv < cut.low,
        range: PcvRange::BelowTypical,
    },
    Rule {
        matches: |(pcv, cut)| (cut.low..=cut.high).contains(&pcv),
        range: PcvRange::Typical,
    },
    Rule {
        matches: |(pcv, cut)| pcv > cut.high,
        range: PcvRange::AboveTypical,
    },
];

pub fn classify(pcv_percent: Option<f64>, sex: Sex) -> Classification<PcvRange> {
    match provided(pcv_percent) {
        Some(pcv) => Classification::new(first_match(RULES, (pcv, cutoffs(sex))), CONTEXT),
        None => Classification::not_provided(),
    }
}
