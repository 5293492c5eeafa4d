//! One full evaluation pass over a visit.

use clinic_core::models::visit::VisitInput;
use clinic_core::provided::Provided;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::checks::{CheckSignals, doctor_checks};
use crate::classify::Classification;
use crate::classify::blood_pressure::{self, BloodPressureRange};
use crate::classify::bmi::{self, BmiRange};
use crate::classify::glucose::{self, GlucoseRange};
use crate::classify::pcv::{self, PcvRange};
use crate::classify::pulse::{self, PulseRange};
use crate::classify::temperature::{self, TemperatureRange};
use crate::error::EvaluationError;
use crate::hydration::{self, HydrationAssessment};
use crate::questions::{self, Supplied};
use crate::red_flags::{self, RedFlagInputs};

/// Everything derived from one [`VisitInput`]. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub blood_pressure: Classification<BloodPressureRange>,
    pub temperature: Classification<TemperatureRange>,
    pub pulse: Classification<PulseRange>,
    pub pcv: Classification<PcvRange>,
    pub glucose: Classification<GlucoseRange>,
    pub bmi: Classification<BmiRange>,
    pub bmi_value: Option<f64>,
    /// `None` when no hydration question was answered.
    pub hydration: Option<HydrationAssessment>,
    pub red_flags: Vec<String>,
    pub doctor_checks: Vec<String>,
    pub questions: Vec<String>,
}

impl Evaluation {
    /// Whether any vital or lab was entered at all.
    pub fn has_measurements(&self) -> bool {
        self.blood_pressure.is_provided()
            || self.temperature.is_provided()
            || self.pulse.is_provided()
            || self.pcv.is_provided()
            || self.glucose.is_provided()
            || self.bmi.is_provided()
    }
}

/// True when the user gave at least one thing to work with.
pub fn has_signal(input: &VisitInput) -> bool {
    let narrative = &input.narrative;
    let vitals = &input.vitals;
    let labs = &input.labs;
    let body = &input.body;

    narrative.symptoms.is_provided()
        || narrative.main_concern.is_provided()
        || narrative.onset.is_some()
        || narrative.progression.is_some()
        || vitals.systolic.is_provided()
        || vitals.diastolic.is_provided()
        || vitals.pulse.is_provided()
        || vitals.temperature_c.is_provided()
        || labs.pcv_percent.is_provided()
        || labs.glucose_mmol.is_provided()
        || body.height_cm.is_provided()
        || body.weight_kg.is_provided()
        || input.hydration.is_answered()
}

pub fn evaluate(input: &VisitInput) -> Result<Evaluation, EvaluationError> {
    if !has_signal(input) {
        return Err(EvaluationError::NothingToEvaluate);
    }

    let vitals = &input.vitals;
    let labs = &input.labs;

    let blood_pressure = blood_pressure::classify(vitals.systolic, vitals.diastolic);
    let temperature = temperature::classify(vitals.temperature_c);
    let pulse = pulse::classify(vitals.pulse);
    let pcv = pcv::classify(labs.pcv_percent, input.identity.sex);
    let glucose = glucose::classify(labs.glucose_mmol, labs.fasting_glucose);
    let bmi_value = bmi::compute_bmi(input.body.height_cm, input.body.weight_kg);
    let bmi = bmi::classify(bmi_value);
    let hydration = hydration::assess(&input.hydration);

    let red_flags = red_flags::detect(&RedFlagInputs::from(input));
    let doctor_checks = doctor_checks(
        input,
        &CheckSignals {
            blood_pressure: blood_pressure.range,
            bmi: bmi_value,
            hydration: hydration.as_ref(),
        },
    );
    let questions = questions::generate(&Supplied {
        blood_pressure: blood_pressure.is_provided(),
        temperature: temperature.is_provided(),
        pulse: pulse.is_provided(),
        pcv: pcv.is_provided(),
        glucose: glucose.is_provided(),
        fasting_glucose: labs.fasting_glucose,
        hydration: hydration.is_some(),
        bmi: bmi.is_provided(),
    });

    tracing::debug!(
        red_flags = red_flags.len(),
        topics = doctor_checks.len(),
        questions = questions.len(),
        hydration_assessed = hydration.is_some(),
        "visit evaluated"
    );

    Ok(Evaluation {
        blood_pressure,
        temperature,
        pulse,
        pcv,
        glucose,
        bmi,
        bmi_value,
        hydration,
        red_flags,
        doctor_checks,
        questions,
    })
}
