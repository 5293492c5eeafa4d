use clinic_core::provided::provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Classification, NOT_PROVIDED_LABEL, RangeLabel, Rule, first_match};

pub const CONTEXT: &str = "Blood pressure can change due to stress, pain, poor sleep, caffeine, \
dehydration, and illness. Doctors often repeat readings after you rest for 5-10 minutes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BloodPressureRange {
    NotProvided,
    Low,
    Typical,
    Borderline,
    HighMild,
    High,
    CheckEntries,
}

impl BloodPressureRange {
    pub fn is_low(self) -> bool {
        self == BloodPressureRange::Low
    }

    pub fn is_high(self) -> bool {
        matches!(self, BloodPressureRange::HighMild | BloodPressureRange::High)
    }
}

impl RangeLabel for BloodPressureRange {
    const NOT_PROVIDED: Self = BloodPressureRange::NotProvided;
    const CHECK_ENTRY: Self = BloodPressureRange::CheckEntries;

    fn label(self) -> &'static str {
        match self {
            BloodPressureRange::NotProvided => NOT_PROVIDED_LABEL,
            BloodPressureRange::Low => "Low range",
            BloodPressureRange::Typical => "Typical / near typical",
            BloodPressureRange::Borderline => "Borderline (monitor)",
            BloodPressureRange::HighMild => "High range (mild\u{2013}moderate)",
            BloodPressureRange::High => "High range",
            BloodPressureRange::CheckEntries => "Check entries",
        }
    }
}

/// `(systolic, diastolic)` in mmHg; first match wins.
const RULES: &[Rule<(u16, u16), BloodPressureRange>] = &[
    Rule {
        matches: |(sys, dia)| sys < 90 || dia < 60,
        range: BloodPressureRange::Low,
    },
    Rule {
        matches: |(sys, dia)| sys < 125 && dia < 80,
        range: BloodPressureRange::Typical,
    },
    Rule {
        matches: |(sys, dia)| (125..=129).contains(&sys) && dia < 80,
        range: BloodPressureRange::Borderline,
    },
    Rule {
        matches: |(sys, dia)| (130..=139).contains(&sys) || (80..=89).contains(&dia),
        range: BloodPressureRange::HighMild,
    },
    Rule {
        matches: |(sys, dia)| sys >= 140 || dia >= 90,
        range: BloodPressureRange::High,
    },
];

/// A reading needs both numbers; either one missing means not provided.
pub fn classify(systolic: Option<u16>, diastolic: Option<u16>) -> Classification<BloodPressureRange> {
    match (provided(systolic), provided(diastolic)) {
        (Some(sys), Some(dia)) => Classification::new(first_match(RULES, (sys, dia)), CONTEXT),
        _ => Classification::not_provided(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::models::form::{MAX_DIASTOLIC, MAX_SYSTOLIC};

    fn range(sys: u16, dia: u16) -> BloodPressureRange {
        classify(Some(sys), Some(dia)).range
    }

    #[test]
    fn missing_half_is_not_provided() {
        for (sys, dia) in [(None, Some(80)), (Some(120), None), (Some(0), Some(80)), (None, None)] {
            let result = classify(sys, dia);
            assert_eq!(result.range, BloodPressureRange::NotProvided);
            assert_eq!(result.label, "Not provided");
            assert!(result.context.is_empty());
        }
    }

    #[test]
    fn boundaries_follow_the_table() {
        assert_eq!(range(89, 70), BloodPressureRange::Low);
        assert_eq!(range(110, 59), BloodPressureRange::Low);
        assert_eq!(range(90, 60), BloodPressureRange::Typical);
        assert_eq!(range(124, 79), BloodPressureRange::Typical);
        assert_eq!(range(125, 79), BloodPressureRange::Borderline);
        assert_eq!(range(129, 60), BloodPressureRange::Borderline);
        assert_eq!(range(130, 70), BloodPressureRange::HighMild);
        assert_eq!(range(118, 80), BloodPressureRange::HighMild);
        assert_eq!(range(139, 89), BloodPressureRange::HighMild);
        assert_eq!(range(140, 70), BloodPressureRange::High);
        assert_eq!(range(120, 90), BloodPressureRange::High);
    }

    #[test]
    fn table_covers_the_whole_clamped_domain() {
        for sys in 1..=MAX_SYSTOLIC {
            for dia in 1..=MAX_DIASTOLIC {
                let result = classify(Some(sys), Some(dia));
                assert!(!result.is_table_gap(), "{sys}/{dia} fell through the table");
                assert!(result.is_provided());
            }
        }
    }

    #[test]
    fn provided_reading_carries_context() {
        let result = classify(Some(120), Some(80));
        assert_eq!(result.range, BloodPressureRange::HighMild);
        assert_eq!(result.label, "High range (mild\u{2013}moderate)");
        assert_eq!(result.context, CONTEXT);
        assert!(result.range.is_high());
        assert!(!result.range.is_low());
    }
}
