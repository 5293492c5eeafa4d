use serde::Serialize;
use tera::{Context, Tera};

use clinic_core::models::visit::VisitInput;
use clinic_core::provided::provided;
use clinic_rules::Evaluation;
use clinic_rules::classify::{Classification, RangeLabel};
use clinic_rules::red_flags::{NO_FLAGS_NOTICE, URGENT_CARE_NOTICE};

use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "visit_report.md";
const REPORT_TEMPLATE: &str = include_str!("../templates/visit_report.md");

pub const DISCLAIMER: &[&str] = &[
    "Educational use only (not medical advice).",
    "This tool does not diagnose illness or recommend treatment.",
    "Do not start or stop medicines based on this.",
    "Use it to prepare for a conversation with a licensed clinician.",
    "If you feel very unwell or symptoms are severe, seek urgent medical care.",
];

#[derive(Debug, Serialize)]
struct Reading {
    name: &'static str,
    value: String,
    label: String,
    context: String,
}

#[derive(Debug, Serialize)]
struct HydrationView<'a> {
    tier: &'static str,
    score: u8,
    advice: &'a [String],
}

#[derive(Debug, Serialize)]
struct ReportContext<'a> {
    disclaimer: &'a [&'a str],
    readings: Vec<Reading>,
    hydration: Option<HydrationView<'a>>,
    doctor_checks: &'a [String],
    urgent_notice: &'a str,
    no_flags_notice: &'a str,
    red_flags: &'a [String],
    questions: &'a [String],
    summary: &'a str,
}

/// Render a Tera template against any serializable context.
///
/// The context's fields become the template variables.
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the full visit-prep report (all five sections plus the
/// disclaimer) as Markdown.
pub fn render_report(
    input: &VisitInput,
    evaluation: &Evaluation,
    summary: &str,
) -> Result<String, ExportError> {
    let context = ReportContext {
        disclaimer: DISCLAIMER,
        readings: readings(input, evaluation),
        hydration: evaluation.hydration.as_ref().map(|h| HydrationView {
            tier: h.tier.label(),
            score: h.score,
            advice: &h.advice,
        }),
        doctor_checks: &evaluation.doctor_checks,
        urgent_notice: URGENT_CARE_NOTICE,
        no_flags_notice: NO_FLAGS_NOTICE,
        red_flags: &evaluation.red_flags,
        questions: &evaluation.questions,
        summary,
    };
    let rendered = render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &context)?;
    tracing::debug!(bytes = rendered.len(), "visit report rendered");
    Ok(rendered)
}

fn readings(input: &VisitInput, evaluation: &Evaluation) -> Vec<Reading> {
    let vitals = &input.vitals;
    let labs = &input.labs;
    let mut out = Vec::new();

    if let (Some(sys), Some(dia)) = (provided(vitals.systolic), provided(vitals.diastolic)) {
        push(&mut out, "Blood Pressure", format!("{sys}/{dia} mmHg"), &evaluation.blood_pressure);
    }
    if let Some(pulse) = provided(vitals.pulse) {
        push(&mut out, "Pulse", format!("{pulse} bpm"), &evaluation.pulse);
    }
    if let Some(t) = provided(vitals.temperature_c) {
        push(&mut out, "Temperature", format!("{t:.1} \u{b0}C"), &evaluation.temperature);
    }
    if let Some(pcv) = provided(labs.pcv_percent) {
        push(&mut out, "PCV", format!("{pcv:.1}%"), &evaluation.pcv);
    }
    if let Some(glucose) = provided(labs.glucose_mmol) {
        let kind = if labs.fasting_glucose { "fasting" } else { "random" };
        push(&mut out, "Glucose", format!("{glucose:.1} mmol/L ({kind})"), &evaluation.glucose);
    }
    if let Some(bmi) = provided(evaluation.bmi_value) {
        push(&mut out, "BMI", format!("{bmi:.1}"), &evaluation.bmi);
    }
    out
}

fn push<R: RangeLabel>(
    out: &mut Vec<Reading>,
    name: &'static str,
    value: String,
    classification: &Classification<R>,
) {
    out.push(Reading {
        name,
        value,
        label: classification.label.clone(),
        context: classification.context.clone(),
    });
}
