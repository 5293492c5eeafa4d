//! The raw form boundary.
//!
//! The presentation layer submits a flat [`VisitForm`] using its own
//! conventions: `0` for an empty number and `""` for an unanswered choice.
//! [`VisitInput::try_from`] clamps numbers to the documented ranges and maps
//! the sentinels to `None`, so nothing past this point sees a magic zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::options::{Sex, parse_choice};
use super::visit::{BodyMeasurements, HydrationAnswers, Identity, Labs, Narrative, VisitInput, Vitals};
use crate::error::CoreError;
use crate::provided::provided;

pub const MAX_SYSTOLIC: u16 = 300;
pub const MAX_DIASTOLIC: u16 = 200;
pub const MAX_PULSE: u16 = 250;
pub const MAX_TEMPERATURE_C: f64 = 45.0;
pub const MAX_PCV_PERCENT: f64 = 80.0;
pub const MAX_GLUCOSE_MMOL: f64 = 60.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VisitForm {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub caregiver_mode: bool,

    pub height_cm: f64,
    pub weight_kg: f64,

    pub symptoms: String,
    pub onset: String,
    pub progression: String,
    pub main_concern: String,
    pub medicines: String,
    pub supplements: String,

    pub systolic_bp: u16,
    pub diastolic_bp: u16,
    pub pulse: u16,
    pub temperature_c: f64,

    pub pcv_percent: f64,
    pub glucose_mmol: f64,
    pub fasting_glucose: bool,

    pub drinking_less: String,
    pub urine_color: String,
    pub peeing_less: String,
    pub vomiting: String,
    pub diarrhea: String,
    pub heat_sweat: String,
    pub dry_dizzy: String,
}

impl VisitForm {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<VisitForm> for VisitInput {
    type Error = CoreError;

    fn try_from(form: VisitForm) -> Result<Self, Self::Error> {
        let sex = parse_choice::<Sex>("sex", &form.sex)?.unwrap_or_default();

        Ok(VisitInput {
            identity: Identity {
                name: non_blank(form.name),
                age: non_blank(form.age),
                sex,
                caregiver_mode: form.caregiver_mode,
            },
            body: BodyMeasurements {
                height_cm: clamp_f64(form.height_cm, MAX_HEIGHT_CM),
                weight_kg: clamp_f64(form.weight_kg, MAX_WEIGHT_KG),
            },
            narrative: Narrative {
                symptoms: form.symptoms.trim().to_string(),
                onset: parse_choice("onset", &form.onset)?,
                progression: parse_choice("progression", &form.progression)?,
                main_concern: form.main_concern.trim().to_string(),
                medicines: form.medicines.trim().to_string(),
                supplements: form.supplements.trim().to_string(),
            },
            vitals: Vitals {
                systolic: clamp_u16(form.systolic_bp, MAX_SYSTOLIC),
                diastolic: clamp_u16(form.diastolic_bp, MAX_DIASTOLIC),
                pulse: clamp_u16(form.pulse, MAX_PULSE),
                temperature_c: clamp_f64(form.temperature_c, MAX_TEMPERATURE_C),
            },
            labs: Labs {
                pcv_percent: clamp_f64(form.pcv_percent, MAX_PCV_PERCENT),
                glucose_mmol: clamp_f64(form.glucose_mmol, MAX_GLUCOSE_MMOL),
                fasting_glucose: form.fasting_glucose,
            },
            hydration: HydrationAnswers {
                drinking_less: parse_choice("drinking_less", &form.drinking_less)?,
                urine_color: parse_choice("urine_color", &form.urine_color)?,
                peeing_less: parse_choice("peeing_less", &form.peeing_less)?,
                vomiting: parse_choice("vomiting", &form.vomiting)?,
                diarrhea: parse_choice("diarrhea", &form.diarrhea)?,
                heat_sweat: parse_choice("heat_sweat", &form.heat_sweat)?,
                dry_dizzy: parse_choice("dry_dizzy", &form.dry_dizzy)?,
            },
        })
    }
}

/// Every option set a form needs, keyed by field name.
pub fn option_sets() -> Vec<(&'static str, Vec<&'static str>)> {
    use super::options::{Frequency, Onset, Progression, UrineColor, YesNo, labels};

    vec![
        ("sex", labels::<Sex>()),
        ("onset", labels::<Onset>()),
        ("progression", labels::<Progression>()),
        ("drinking_less", labels::<YesNo>()),
        ("urine_color", labels::<UrineColor>()),
        ("peeing_less", labels::<YesNo>()),
        ("vomiting", labels::<Frequency>()),
        ("diarrhea", labels::<Frequency>()),
        ("heat_sweat", labels::<YesNo>()),
        ("dry_dizzy", labels::<YesNo>()),
    ]
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clamp_u16(value: u16, max: u16) -> Option<u16> {
    provided(Some(value.min(max)))
}

fn clamp_f64(value: f64, max: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    provided(Some(value.clamp(0.0, max)))
}
