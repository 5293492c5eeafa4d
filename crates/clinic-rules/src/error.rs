use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// No symptom text and no provided value of any kind.
    #[error(
        "nothing to evaluate: please enter at least symptoms or one value (like BP, temperature, PCV, pulse, or glucose)"
    )]
    NothingToEvaluate,
}
