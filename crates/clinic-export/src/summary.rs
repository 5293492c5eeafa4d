//! The copy/paste visit summary.
//!
//! Section order is fixed: identity, timestamp, symptoms, medicines, values,
//! hydration notes (only when answered), goal for the visit.

use clinic_core::models::options::Choice;
use clinic_core::models::visit::VisitInput;
use clinic_core::provided::{Provided, provided};
use clinic_rules::Evaluation;
use jiff::civil::DateTime;
use serde::Serialize;

pub const SUMMARY_FILENAME: &str = "clinic_companion_summary.txt";
pub const SUMMARY_MEDIA_TYPE: &str = "text/plain";

const GOAL: &str = "Understand what these values mean in context, confirm what needs repeat \
testing, and agree next steps.";

/// The summary as a downloadable plain-text file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDownload {
    pub filename: &'static str,
    pub media_type: &'static str,
    pub content: String,
}

impl SummaryDownload {
    pub fn new(content: String) -> Self {
        Self {
            filename: SUMMARY_FILENAME,
            media_type: SUMMARY_MEDIA_TYPE,
            content,
        }
    }
}

/// Build the summary stamped with the local wall-clock time.
pub fn build_summary_now(input: &VisitInput, evaluation: &Evaluation) -> String {
    build_summary(input, evaluation, jiff::Zoned::now().datetime())
}

pub fn build_summary(input: &VisitInput, evaluation: &Evaluation, at: DateTime) -> String {
    let mut lines: Vec<String> = Vec::new();

    let identity = &input.identity;
    let who = if identity.caregiver_mode {
        "Patient (entered by caregiver)"
    } else {
        "Patient"
    };
    lines.push(format!(
        "{who}: {}, Age: {}, Sex: {}",
        identity.name.as_deref().unwrap_or("N/A"),
        identity.age.as_deref().unwrap_or("N/A"),
        identity.sex.label(),
    ));
    lines.push(format!("Date/Time: {}", at.strftime("%Y-%m-%d %H:%M")));
    lines.push(String::new());

    let narrative = &input.narrative;
    lines.push("Symptoms/Concerns:".to_string());
    lines.push(format!("- {}", or_na(&narrative.symptoms)));
    if let Some(onset) = narrative.onset {
        lines.push(format!("- Onset: {}", onset.label()));
    }
    if let Some(progression) = narrative.progression {
        lines.push(format!("- Progression: {}", progression.label()));
    }
    if narrative.main_concern.is_provided() {
        lines.push(format!("- Main concern: {}", narrative.main_concern.trim()));
    }
    lines.push(String::new());

    lines.push("Medicines / Supplements:".to_string());
    lines.push(format!("- Medicines: {}", or_na(&narrative.medicines)));
    lines.push(format!("- Supplements: {}", or_na(&narrative.supplements)));
    lines.push(String::new());

    lines.push("Values Provided:".to_string());
    let values = value_lines(input, evaluation);
    if values.is_empty() {
        lines.push("- None entered".to_string());
    } else {
        lines.extend(values);
    }
    lines.push(String::new());

    let hydration = input.hydration.answered();
    if !hydration.is_empty() {
        lines.push("Hydration notes:".to_string());
        for (question, answer) in hydration {
            lines.push(format!("- {question}: {answer}"));
        }
        lines.push(String::new());
    }

    lines.push("Goal for visit:".to_string());
    lines.push(format!("- {GOAL}"));

    lines.join("\n")
}

fn value_lines(input: &VisitInput, evaluation: &Evaluation) -> Vec<String> {
    let vitals = &input.vitals;
    let labs = &input.labs;
    let mut lines = Vec::new();

    if let (Some(sys), Some(dia)) = (provided(vitals.systolic), provided(vitals.diastolic)) {
        lines.push(format!("- BP: {sys}/{dia} mmHg"));
    }
    if let Some(pulse) = provided(vitals.pulse) {
        lines.push(format!("- Pulse: {pulse} bpm"));
    }
    if let Some(t) = provided(vitals.temperature_c) {
        lines.push(format!("- Temperature: {t:.1} \u{b0}C"));
    }
    if let Some(pcv) = provided(labs.pcv_percent) {
        lines.push(format!("- PCV: {pcv:.1} %"));
    }
    if let Some(glucose) = provided(labs.glucose_mmol) {
        let kind = if labs.fasting_glucose { "fasting" } else { "random" };
        lines.push(format!("- Glucose: {glucose:.1} mmol/L ({kind})"));
    }

    let height = provided(input.body.height_cm);
    let weight = provided(input.body.weight_kg);
    match (height, weight, provided(evaluation.bmi_value)) {
        (Some(h), Some(w), Some(bmi)) => {
            lines.push(format!("- Height/Weight: {h:.1} cm / {w:.1} kg (BMI {bmi:.1})"));
        }
        (Some(h), Some(w), None) => lines.push(format!("- Height/Weight: {h:.1} cm / {w:.1} kg")),
        (Some(h), None, _) => lines.push(format!("- Height: {h:.1} cm")),
        (None, Some(w), _) => lines.push(format!("- Weight: {w:.1} kg")),
        (None, None, _) => {}
    }

    lines
}

fn or_na(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() { "N/A" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::models::options::{Frequency, Onset, Sex, UrineColor};
    use clinic_rules::evaluate;

    fn at() -> DateTime {
        jiff::civil::date(2026, 10, 19).at(9, 30, 0, 0)
    }

    fn summary_for(input: &VisitInput) -> String {
        let evaluation = evaluate(input).unwrap();
        build_summary(input, &evaluation, at())
    }

    fn ada() -> VisitInput {
        let mut input = VisitInput::default();
        input.identity.name = Some("Ada".to_string());
        input.identity.age = Some("34".to_string());
        input.identity.sex = Sex::Female;
        input.vitals.systolic = Some(120);
        input.vitals.diastolic = Some(80);
        input.vitals.pulse = Some(72);
        input.vitals.temperature_c = Some(0.0);
        input
    }

    fn section_headers(summary: &str) -> Vec<&str> {
        summary
            .lines()
            .filter(|line| line.ends_with(':') && !line.starts_with("- "))
            .collect()
    }

    #[test]
    fn values_section_lists_only_supplied_values() {
        let summary = summary_for(&ada());
        assert!(summary.starts_with("Patient: Ada, Age: 34, Sex: Female\nDate/Time: 2026-10-19 09:30\n\n"));
        assert!(summary.contains("Values Provided:\n- BP: 120/80 mmHg\n- Pulse: 72 bpm\n\n"));
        assert!(!summary.contains("Temperature"));
        assert!(!summary.contains("Hydration notes"));
    }

    #[test]
    fn exact_layout_for_minimal_input() {
        let mut input = VisitInput::default();
        input.narrative.symptoms = "  cough  ".to_string();
        let expected = "\
Patient: N/A, Age: N/A, Sex: Prefer not to say
Date/Time: 2026-10-19 09:30

Symptoms/Concerns:
- cough

Medicines / Supplements:
- Medicines: N/A
- Supplements: N/A

Values Provided:
- None entered

Goal for visit:
- Understand what these values mean in context, confirm what needs repeat testing, and agree next steps.";
        assert_eq!(summary_for(&input), expected);
    }

    #[test]
    fn optional_narrative_and_hydration_sections() {
        let mut input = ada();
        input.identity.caregiver_mode = true;
        input.narrative.symptoms = "Dizzy".to_string();
        input.narrative.onset = Some(Onset::FourToSevenDays);
        input.narrative.main_concern = "Is it my BP?".to_string();
        input.narrative.medicines = "Amlodipine 5mg".to_string();
        input.hydration.urine_color = Some(UrineColor::DarkYellow);
        input.hydration.diarrhea = Some(Frequency::Occasional);

        let summary = summary_for(&input);
        assert!(summary.starts_with("Patient (entered by caregiver): Ada"));
        assert!(summary.contains("- Dizzy\n- Onset: 4-7 days\n- Main concern: Is it my BP?\n\n"));
        assert!(!summary.contains("Progression"));
        assert!(summary.contains("- Medicines: Amlodipine 5mg\n- Supplements: N/A"));
        assert!(summary.contains("Hydration notes:\n- Urine colour: Dark yellow\n- Diarrhoea: Some\n\nGoal for visit:"));
    }

    #[test]
    fn measurements_use_one_decimal() {
        let mut input = VisitInput::default();
        input.vitals.temperature_c = Some(38.3);
        input.labs.pcv_percent = Some(41.0);
        input.labs.glucose_mmol = Some(5.4);
        input.labs.fasting_glucose = true;
        input.body.height_cm = Some(170.0);
        input.body.weight_kg = Some(70.0);

        let summary = summary_for(&input);
        assert!(summary.contains("- Temperature: 38.3 \u{b0}C"));
        assert!(summary.contains("- PCV: 41.0 %"));
        assert!(summary.contains("- Glucose: 5.4 mmol/L (fasting)"));
        assert!(summary.contains("- Height/Weight: 170.0 cm / 70.0 kg (BMI 24.2)"));
    }

    #[test]
    fn lone_weight_has_no_bmi() {
        let mut input = VisitInput::default();
        input.body.weight_kg = Some(82.5);
        let summary = summary_for(&input);
        assert!(summary.contains("- Weight: 82.5 kg"));
        assert!(!summary.contains("BMI"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let mut input = ada();
        input.hydration.vomiting = Some(Frequency::Frequent);
        let summary = summary_for(&input);
        assert_eq!(
            section_headers(&summary),
            vec![
                "Symptoms/Concerns:",
                "Medicines / Supplements:",
                "Values Provided:",
                "Hydration notes:",
                "Goal for visit:",
            ]
        );
    }

    #[test]
    fn download_metadata() {
        let download = SummaryDownload::new("text".to_string());
        assert_eq!(download.filename, "clinic_companion_summary.txt");
        assert_eq!(download.media_type, "text/plain");
        assert_eq!(download.content, "text");
    }
}
