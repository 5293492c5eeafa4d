//! Questions to take into the consultation.

pub const MAX_QUESTIONS: usize = 12;

const GENERIC: [&str; 6] = [
    "Based on my symptoms and examination, what are the main things you are considering?",
    "Which result matters most right now, and which ones can be monitored later?",
    "Should we repeat any readings (BP/temperature) to confirm accuracy?",
    "Do I need more tests? If yes, which ones and when?",
    "What warning signs mean I should return urgently or go to emergency care?",
    "While we investigate, what practical steps should I focus on (hydration, rest, meals, sleep)?",
];

const BLOOD_PRESSURE: &str =
    "Was my blood pressure checked properly (correct cuff size, sitting position, after rest)?";
const TEMPERATURE: &str =
    "If this is fever, what causes are most likely in my case, and what tests are needed?";
const PULSE: &str =
    "Is my pulse expected for my current condition (fever, pain, anxiety, dehydration)?";
const PCV: &str =
    "If my PCV is low, should we check for iron deficiency, malaria (if relevant), or bleeding?";
const GLUCOSE_FASTING: &str =
    "Is this fasting glucose level concerning? Should I do HbA1c or repeat fasting glucose?";
const GLUCOSE_RANDOM: &str =
    "Since this is random glucose, should I do fasting glucose or HbA1c for clarity?";
const HYDRATION: &str =
    "Could dehydration be part of how I feel, and how much fluid should I aim for each day?";
const BMI: &str =
    "How should I think about my weight and BMI in relation to my symptoms and long-term health?";

/// Which values the user supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Supplied {
    pub blood_pressure: bool,
    pub temperature: bool,
    pub pulse: bool,
    pub pcv: bool,
    pub glucose: bool,
    pub fasting_glucose: bool,
    pub hydration: bool,
    pub bmi: bool,
}

/// The six generic questions, then one question per supplied value in a
/// fixed order, capped at [`MAX_QUESTIONS`].
pub fn generate(supplied: &Supplied) -> Vec<String> {
    let glucose = if supplied.fasting_glucose {
        GLUCOSE_FASTING
    } else {
        GLUCOSE_RANDOM
    };
    let specific = [
        (supplied.blood_pressure, BLOOD_PRESSURE),
        (supplied.temperature, TEMPERATURE),
        (supplied.pulse, PULSE),
        (supplied.pcv, PCV),
        (supplied.glucose, glucose),
        (supplied.hydration, HYDRATION),
        (supplied.bmi, BMI),
    ];

    GENERIC
        .into_iter()
        .chain(specific.into_iter().filter(|(on, _)| *on).map(|(_, q)| q))
        .take(MAX_QUESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn everything() -> Supplied {
        Supplied {
            blood_pressure: true,
            temperature: true,
            pulse: true,
            pcv: true,
            glucose: true,
            fasting_glucose: true,
            hydration: true,
            bmi: true,
        }
    }

    #[test]
    fn nothing_supplied_gives_generic_questions() {
        let questions = generate(&Supplied::default());
        assert_eq!(questions, GENERIC.map(str::to_string).to_vec());
    }

    #[test]
    fn specific_questions_follow_in_order() {
        let questions = generate(&Supplied {
            pulse: true,
            blood_pressure: true,
            bmi: true,
            ..Default::default()
        });
        assert_eq!(questions.len(), 9);
        assert_eq!(questions[..6], GENERIC.map(str::to_string));
        assert_eq!(questions[6], BLOOD_PRESSURE);
        assert_eq!(questions[7], PULSE);
        assert_eq!(questions[8], BMI);
    }

    #[test]
    fn glucose_question_depends_on_fasting() {
        let random = generate(&Supplied {
            glucose: true,
            ..Default::default()
        });
        assert_eq!(random.last().map(String::as_str), Some(GLUCOSE_RANDOM));

        let fasting = generate(&Supplied {
            glucose: true,
            fasting_glucose: true,
            ..Default::default()
        });
        assert_eq!(fasting.last().map(String::as_str), Some(GLUCOSE_FASTING));
    }

    #[test]
    fn capped_at_twelve_dropping_trailing_questions() {
        let questions = generate(&everything());
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert_eq!(questions[..6], GENERIC.map(str::to_string));
        assert_eq!(questions[11], HYDRATION);
        assert!(!questions.contains(&BMI.to_string()));
    }
}
