//! Dehydration risk estimate from the seven self-reported hydration answers.

use clinic_core::models::options::{Frequency, UrineColor, YesNo};
use clinic_core::models::visit::HydrationAnswers;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const HIGH_TIER_MIN_SCORE: u8 = 6;
pub const MODERATE_TIER_MIN_SCORE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HydrationTier {
    Low,
    Moderate,
    High,
}

impl HydrationTier {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_TIER_MIN_SCORE {
            HydrationTier::High
        } else if score >= MODERATE_TIER_MIN_SCORE {
            HydrationTier::Moderate
        } else {
            HydrationTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HydrationTier::Low => "Low",
            HydrationTier::Moderate => "Moderate",
            HydrationTier::High => "High",
        }
    }

    pub fn advice(self) -> &'static [&'static str] {
        match self {
            HydrationTier::Low => &[
                "Keep sipping water or other fluids regularly through the day.",
                "Watch for darker urine, passing less urine, or dizziness, and mention them if they appear.",
            ],
            HydrationTier::Moderate => &[
                "Increase fluids steadily; oral rehydration solution (ORS) helps if you are vomiting or have diarrhoea.",
                "Tell your clinician about these answers so they can check for dehydration.",
                "Seek care sooner if you cannot keep fluids down or you feel worse.",
            ],
            HydrationTier::High => &[
                "Your answers suggest a higher risk of dehydration.",
                "Seek urgent care if you cannot keep fluids down, are passing very little urine, feel very dizzy or faint, or are confused.",
                "Small, frequent sips of oral rehydration solution (ORS) are often advised while you arrange care.",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HydrationAssessment {
    pub score: u8,
    pub tier: HydrationTier,
    pub advice: Vec<String>,
}

/// Point total over the answered fields. Unanswered fields score nothing.
pub fn score(answers: &HydrationAnswers) -> u8 {
    yes(answers.drinking_less, 1)
        + match answers.urine_color {
            Some(UrineColor::Yellow) => 1,
            Some(UrineColor::DarkYellow) => 2,
            Some(UrineColor::Pale) | None => 0,
        }
        + yes(answers.peeing_less, 2)
        + frequency(answers.vomiting)
        + frequency(answers.diarrhea)
        + yes(answers.heat_sweat, 1)
        + yes(answers.dry_dizzy, 1)
}

/// `None` when no hydration question was answered, which is different from
/// an assessed low risk.
pub fn assess(answers: &HydrationAnswers) -> Option<HydrationAssessment> {
    if !answers.is_answered() {
        return None;
    }
    let score = score(answers);
    let tier = HydrationTier::from_score(score);
    tracing::debug!(score, tier = tier.label(), "hydration assessed");
    Some(HydrationAssessment {
        score,
        tier,
        advice: tier.advice().iter().map(|line| line.to_string()).collect(),
    })
}

fn yes(answer: Option<YesNo>, points: u8) -> u8 {
    if answer == Some(YesNo::Yes) { points } else { 0 }
}

fn frequency(answer: Option<Frequency>) -> u8 {
    match answer {
        Some(Frequency::Occasional) => 1,
        Some(Frequency::Frequent) => 2,
        Some(Frequency::Never) | None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_answers() -> Vec<HydrationAnswers> {
        let yes_no = [None, Some(YesNo::No), Some(YesNo::Yes)];
        let urine = [
            None,
            Some(UrineColor::Pale),
            Some(UrineColor::Yellow),
            Some(UrineColor::DarkYellow),
        ];
        let freq = [
            None,
            Some(Frequency::Never),
            Some(Frequency::Occasional),
            Some(Frequency::Frequent),
        ];

        let mut out = Vec::new();
        for drinking_less in yes_no {
            for urine_color in urine {
                for peeing_less in yes_no {
                    for vomiting in freq {
                        for diarrhea in freq {
                            for heat_sweat in yes_no {
                                for dry_dizzy in yes_no {
                                    out.push(HydrationAnswers {
                                        drinking_less,
                                        urine_color,
                                        peeing_less,
                                        vomiting,
                                        diarrhea,
                                        heat_sweat,
                                        dry_dizzy,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// Every single-field step to a worse answer.
    fn worsened(a: &HydrationAnswers) -> Vec<HydrationAnswers> {
        let mut out = Vec::new();
        if a.drinking_less != Some(YesNo::Yes) {
            out.push(HydrationAnswers { drinking_less: Some(YesNo::Yes), ..*a });
        }
        match a.urine_color {
            None | Some(UrineColor::Pale) => {
                out.push(HydrationAnswers { urine_color: Some(UrineColor::Yellow), ..*a });
            }
            Some(UrineColor::Yellow) => {
                out.push(HydrationAnswers { urine_color: Some(UrineColor::DarkYellow), ..*a });
            }
            Some(UrineColor::DarkYellow) => {}
        }
        if a.peeing_less != Some(YesNo::Yes) {
            out.push(HydrationAnswers { peeing_less: Some(YesNo::Yes), ..*a });
        }
        if a.vomiting != Some(Frequency::Frequent) {
            out.push(HydrationAnswers { vomiting: Some(Frequency::Frequent), ..*a });
        }
        if a.diarrhea != Some(Frequency::Frequent) {
            out.push(HydrationAnswers { diarrhea: Some(Frequency::Frequent), ..*a });
        }
        if a.heat_sweat != Some(YesNo::Yes) {
            out.push(HydrationAnswers { heat_sweat: Some(YesNo::Yes), ..*a });
        }
        if a.dry_dizzy != Some(YesNo::Yes) {
            out.push(HydrationAnswers { dry_dizzy: Some(YesNo::Yes), ..*a });
        }
        out
    }

    #[test]
    fn unanswered_is_not_assessed() {
        assert_eq!(assess(&HydrationAnswers::default()), None);
    }

    #[test]
    fn answered_all_no_is_assessed_low() {
        let answers = HydrationAnswers {
            drinking_less: Some(YesNo::No),
            ..Default::default()
        };
        let assessment = assess(&answers).unwrap();
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.tier, HydrationTier::Low);
        assert_eq!(assessment.advice.len(), HydrationTier::Low.advice().len());
    }

    #[test]
    fn point_table() {
        let answers = HydrationAnswers {
            drinking_less: Some(YesNo::Yes),
            urine_color: Some(UrineColor::DarkYellow),
            peeing_less: Some(YesNo::Yes),
            vomiting: Some(Frequency::Occasional),
            diarrhea: Some(Frequency::Frequent),
            heat_sweat: Some(YesNo::Yes),
            dry_dizzy: Some(YesNo::Yes),
        };
        assert_eq!(score(&answers), 1 + 2 + 2 + 1 + 2 + 1 + 1);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(HydrationTier::from_score(2), HydrationTier::Low);
        assert_eq!(HydrationTier::from_score(3), HydrationTier::Moderate);
        assert_eq!(HydrationTier::from_score(5), HydrationTier::Moderate);
        assert_eq!(HydrationTier::from_score(6), HydrationTier::High);
    }

    #[test]
    fn high_tier_escalates_to_urgent_care() {
        assert!(
            HydrationTier::High
                .advice()
                .iter()
                .any(|line| line.contains("urgent care"))
        );
    }

    #[test]
    fn worse_answers_never_lower_the_score() {
        for answers in all_answers() {
            let base = score(&answers);
            for worse in worsened(&answers) {
                let next = score(&worse);
                assert!(next >= base, "{answers:?} -> {worse:?}");
                assert!(HydrationTier::from_score(next) >= HydrationTier::from_score(base));
            }
        }
    }
}
