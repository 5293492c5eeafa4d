//! Topics a clinician is likely to explore next, in a fixed order:
//! timeline, hydration, medicines, blood pressure, fever, PCV, glucose,
//! BMI, and a fallback when nothing specific stood out.

use clinic_core::models::options::Sex;
use clinic_core::models::visit::VisitInput;
use clinic_core::provided::provided;

use crate::classify::blood_pressure::BloodPressureRange;
use crate::classify::{glucose, pcv, temperature};
use crate::hydration::HydrationAssessment;

pub const TIMELINE_ANSWERED: &str = "Your clinician will likely build on the timeline you gave \
(when symptoms started and how they have changed) and ask what makes them better or worse.";
pub const TIMELINE_UNANSWERED: &str = "Your clinician will likely ask when the symptoms started, \
whether they are getting better or worse, and what makes them better or worse.";
pub const HYDRATION_UNANSWERED: &str = "Hydration: clinicians often ask how much you are \
drinking, how often you pass urine, and whether you have had vomiting or diarrhoea.";
pub const MEDICINES: &str = "Medicines and supplements: bring the names and doses of everything \
you take, including herbal remedies, so your clinician can check for side effects or interactions.";
pub const BP_LOW: &str = "Low BP range: doctors often check hydration, recent illness, standing \
vs sitting readings, and any medications that can lower BP.";
pub const BP_HIGH: &str = "High BP range: clinicians often repeat BP, ask about stress/sleep, \
salt intake, family history, and may recommend monitoring.";
pub const BP_TYPICAL: &str = "Blood pressure in or near the typical range: clinicians may still \
repeat it and compare it with your usual readings.";
pub const FEVER: &str = "Fever range: in Nigeria, clinicians may consider infections like malaria \
or respiratory infections depending on symptoms and tests.";
pub const PCV_LOW_MALE: &str = "Low PCV: doctors often check nutrition, malaria risk (if \
relevant), and any bleeding history.";
pub const PCV_LOW_FEMALE: &str = "Low PCV: doctors often check nutrition, menstrual history, \
malaria risk (if relevant), and any bleeding history.";
pub const PCV_LOW_UNSPECIFIED: &str =
    "Low PCV: doctors often check nutrition, infection risk, and any bleeding history.";
pub const PCV_HIGH: &str = "High PCV range can happen with dehydration; clinicians may check \
hydration status and repeat if needed.";
pub const GLUCOSE_ABOVE_TYPICAL: &str = "Glucose above typical range: doctors may confirm with \
fasting glucose or HbA1c, and ask about diet, weight changes, and family history.";
pub const BMI: &str = "Weight and BMI: clinicians may discuss your weight trend, diet, and \
activity, and read BMI alongside other measurements rather than on its own.";
pub const FALLBACK: &str = "If you share a bit more (symptoms, BP, temperature, PCV, glucose), \
your clinician can narrow down what to check next.";

/// The derived values the topic list depends on.
#[derive(Debug, Clone, Copy)]
pub struct CheckSignals<'a> {
    pub blood_pressure: BloodPressureRange,
    pub bmi: Option<f64>,
    pub hydration: Option<&'a HydrationAssessment>,
}

pub fn doctor_checks(input: &VisitInput, signals: &CheckSignals<'_>) -> Vec<String> {
    let mut topics = Vec::new();
    let mut specific = false;

    let narrative = &input.narrative;
    topics.push(if narrative.onset.is_some() || narrative.progression.is_some() {
        TIMELINE_ANSWERED.to_string()
    } else {
        TIMELINE_UNANSWERED.to_string()
    });

    match signals.hydration {
        Some(assessment) => {
            specific = true;
            topics.push(format!(
                "Hydration: your answers suggest a {} dehydration risk (score {}). Clinicians \
                 often ask about fluid intake, urine output, vomiting or diarrhoea, and may check \
                 for signs of dehydration.",
                assessment.tier.label().to_lowercase(),
                assessment.score,
            ));
        }
        None => topics.push(HYDRATION_UNANSWERED.to_string()),
    }

    topics.push(MEDICINES.to_string());

    let bp = signals.blood_pressure;
    if bp != BloodPressureRange::NotProvided {
        specific = true;
        topics.push(
            if bp.is_low() {
                BP_LOW
            } else if bp.is_high() {
                BP_HIGH
            } else {
                BP_TYPICAL
            }
            .to_string(),
        );
    }

    if provided(input.vitals.temperature_c).is_some_and(|t| t >= temperature::FEVER_THRESHOLD_C) {
        specific = true;
        topics.push(FEVER.to_string());
    }

    if let Some(value) = provided(input.labs.pcv_percent) {
        let sex = input.identity.sex;
        let cut = pcv::cutoffs(sex);
        if value < cut.low {
            specific = true;
            topics.push(
                match sex {
                    Sex::Male => PCV_LOW_MALE,
                    Sex::Female => PCV_LOW_FEMALE,
                    Sex::Unspecified => PCV_LOW_UNSPECIFIED,
                }
                .to_string(),
            );
        } else if value > cut.high {
            specific = true;
            topics.push(PCV_HIGH.to_string());
        }
    }

    let fasting = input.labs.fasting_glucose;
    if provided(input.labs.glucose_mmol).is_some_and(|g| g > glucose::upper_typical_bound(fasting)) {
        specific = true;
        topics.push(GLUCOSE_ABOVE_TYPICAL.to_string());
    }

    if provided(signals.bmi).is_some() {
        specific = true;
        topics.push(BMI.to_string());
    }

    if !specific {
        topics.push(FALLBACK.to_string());
    }

    topics
}
