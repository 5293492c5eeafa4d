use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::options::{Frequency, Onset, Progression, Sex, UrineColor, YesNo};

/// One visit's worth of user input, typed and with absent values as `None`.
///
/// Built fresh from a [`super::form::VisitForm`] on every submission and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitInput {
    pub identity: Identity,
    pub body: BodyMeasurements,
    pub narrative: Narrative,
    pub vitals: Vitals,
    pub labs: Labs,
    pub hydration: HydrationAnswers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub name: Option<String>,
    pub age: Option<String>,
    pub sex: Sex,
    /// Someone is filling the form in on the patient's behalf.
    pub caregiver_mode: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyMeasurements {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    pub symptoms: String,
    pub onset: Option<Onset>,
    pub progression: Option<Progression>,
    pub main_concern: String,
    pub medicines: String,
    pub supplements: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    /// mmHg
    pub systolic: Option<u16>,
    /// mmHg
    pub diastolic: Option<u16>,
    /// Beats per minute.
    pub pulse: Option<u16>,
    pub temperature_c: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Labs {
    pub pcv_percent: Option<f64>,
    pub glucose_mmol: Option<f64>,
    pub fasting_glucose: bool,
}

/// The seven self-reported hydration answers. `None` means not answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HydrationAnswers {
    pub drinking_less: Option<YesNo>,
    pub urine_color: Option<UrineColor>,
    pub peeing_less: Option<YesNo>,
    pub vomiting: Option<Frequency>,
    pub diarrhea: Option<Frequency>,
    pub heat_sweat: Option<YesNo>,
    pub dry_dizzy: Option<YesNo>,
}

impl HydrationAnswers {
    pub fn is_answered(&self) -> bool {
        !self.answered().is_empty()
    }

    /// `(question, answer)` pairs for the answered fields, in form order.
    pub fn answered(&self) -> Vec<(&'static str, &'static str)> {
        use super::options::Choice;

        [
            ("Drinking less than usual", self.drinking_less.map(Choice::label)),
            ("Urine colour", self.urine_color.map(Choice::label)),
            ("Passing less urine", self.peeing_less.map(Choice::label)),
            ("Vomiting", self.vomiting.map(Choice::label)),
            ("Diarrhoea", self.diarrhea.map(Choice::label)),
            ("Heat exposure or heavy sweating", self.heat_sweat.map(Choice::label)),
            ("Dry mouth or dizziness on standing", self.dry_dizzy.map(Choice::label)),
        ]
        .into_iter()
        .filter_map(|(question, answer)| answer.map(|a| (question, a)))
        .collect()
    }
}
