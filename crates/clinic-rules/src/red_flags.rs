//! Conservative "seek urgent care" flags.
//!
//! Literal substring triggers over the symptom text come first, then fixed
//! numeric thresholds. The list is advisory and never diagnostic.

use clinic_core::models::options::Frequency;
use clinic_core::models::visit::VisitInput;
use clinic_core::provided::provided;

/// Shown above a non-empty flag list.
pub const URGENT_CARE_NOTICE: &str =
    "If any of the following apply to you, please seek urgent medical care:";

/// Shown when no flag fired.
pub const NO_FLAGS_NOTICE: &str =
    "No obvious urgent red flags detected from what you entered. If symptoms worsen, seek care.";

/// `(lower-case trigger, flag)` pairs, checked in order.
const SYMPTOM_TRIGGERS: &[(&str, &str)] = &[
    ("chest pain", "Chest pain or heavy chest pressure"),
    ("difficulty breathing", "Difficulty breathing"),
    ("shortness of breath", "Shortness of breath"),
    ("faint", "Fainting or repeated fainting"),
    ("confusion", "Confusion or altered mental state"),
    ("seiz", "Seizure / convulsions"),
    ("stroke", "Stroke-like symptoms (face droop, arm weakness, speech trouble)"),
    ("severe headache", "Severe headache with weakness/vision changes"),
    ("vomit blood", "Vomiting blood"),
    ("black stool", "Black/tarry stool"),
    ("bleeding", "Uncontrolled bleeding"),
];

pub const VERY_HIGH_BP: &str = "Very high blood pressure range (urgent assessment recommended).";
pub const VERY_LOW_BP: &str = "Very low blood pressure range, especially if you feel weak/faint \
(urgent assessment may be needed).";
pub const VERY_HIGH_FEVER: &str =
    "Very high fever (urgent assessment if persistent or with severe symptoms).";
pub const VERY_HIGH_GLUCOSE: &str = "Very high blood sugar range (urgent assessment if unwell, \
vomiting, confusion, or dehydrated).";
pub const VERY_LOW_GLUCOSE: &str =
    "Very low blood sugar range (urgent assessment if shaky, sweaty, confused, faint).";
pub const DEHYDRATION_RISK: &str = "Frequent vomiting or diarrhoea (risk of dehydration; urgent \
assessment if you cannot keep fluids down).";

/// The fields the detector reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedFlagInputs<'a> {
    pub symptoms: &'a str,
    pub systolic: Option<u16>,
    pub diastolic: Option<u16>,
    pub temperature_c: Option<f64>,
    pub glucose_mmol: Option<f64>,
    pub vomiting: Option<Frequency>,
    pub diarrhea: Option<Frequency>,
}

impl<'a> From<&'a VisitInput> for RedFlagInputs<'a> {
    fn from(input: &'a VisitInput) -> Self {
        Self {
            symptoms: &input.narrative.symptoms,
            systolic: input.vitals.systolic,
            diastolic: input.vitals.diastolic,
            temperature_c: input.vitals.temperature_c,
            glucose_mmol: input.labs.glucose_mmol,
            vomiting: input.hydration.vomiting,
            diarrhea: input.hydration.diarrhea,
        }
    }
}

/// Insertion-ordered set of flags: a flag is appended only the first time it is seen.
#[derive(Debug, Default)]
struct FlagSet {
    flags: Vec<String>,
}

impl FlagSet {
    fn insert(&mut self, flag: &str) {
        if !self.flags.iter().any(|existing| existing == flag) {
            self.flags.push(flag.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.flags
    }
}

pub fn detect(inputs: &RedFlagInputs<'_>) -> Vec<String> {
    let mut flags = FlagSet::default();

    let text = inputs.symptoms.to_lowercase();
    for (trigger, flag) in SYMPTOM_TRIGGERS {
        if text.contains(*trigger) {
            flags.insert(flag);
        }
    }

    let systolic = provided(inputs.systolic);
    let diastolic = provided(inputs.diastolic);
    let temperature = provided(inputs.temperature_c);
    let glucose = provided(inputs.glucose_mmol);

    if systolic.is_some_and(|sys| sys > 180) || diastolic.is_some_and(|dia| dia > 120) {
        flags.insert(VERY_HIGH_BP);
    }
    if let (Some(sys), Some(dia)) = (systolic, diastolic)
        && (sys < 85 || dia < 55)
    {
        flags.insert(VERY_LOW_BP);
    }
    if temperature.is_some_and(|t| t >= 39.5) {
        flags.insert(VERY_HIGH_FEVER);
    }
    if glucose.is_some_and(|g| g > 13.9) {
        flags.insert(VERY_HIGH_GLUCOSE);
    }
    if glucose.is_some_and(|g| g > 0.0 && g < 3.0) {
        flags.insert(VERY_LOW_GLUCOSE);
    }
    if inputs.vomiting == Some(Frequency::Frequent) || inputs.diarrhea == Some(Frequency::Frequent) {
        flags.insert(DEHYDRATION_RISK);
    }

    let flags = flags.into_vec();
    tracing::debug!(count = flags.len(), "red flags evaluated");
    flags
}
