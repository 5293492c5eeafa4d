//! Educational range classifiers, one module per vital or lab.
//!
//! Every classifier has the same shape: an absent value gives `NotProvided`,
//! otherwise an ordered table of contiguous rules is walked and the first
//! match wins. Each row ends where the next begins, so no provided value
//! inside the form's clamp range can miss every row. Falling off the end of a table yields the vital's
//! check-entry range, which marks a gap in the table rather than bad input.

pub mod blood_pressure;
pub mod bmi;
pub mod glucose;
pub mod pcv;
pub mod pulse;
pub mod temperature;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const NOT_PROVIDED_LABEL: &str = "Not provided";

/// A per-vital range tag with its human-readable label.
pub trait RangeLabel: Copy + PartialEq {
    /// The tag used when the value was not supplied.
    const NOT_PROVIDED: Self;
    /// The tag used when no rule matched.
    const CHECK_ENTRY: Self;

    fn label(self) -> &'static str;
}

/// The outcome of classifying one vital.
///
/// Consumers switch on `range`; `label` and `context` are for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Classification<R> {
    pub range: R,
    pub label: String,
    /// Fixed educational note for this vital. Empty when not provided.
    pub context: String,
}

impl<R: RangeLabel> Classification<R> {
    pub fn new(range: R, context: &str) -> Self {
        let context = if range == R::NOT_PROVIDED { "" } else { context };
        Self {
            range,
            label: range.label().to_string(),
            context: context.to_string(),
        }
    }

    pub fn not_provided() -> Self {
        Self::new(R::NOT_PROVIDED, "")
    }

    pub fn is_provided(&self) -> bool {
        self.range != R::NOT_PROVIDED
    }

    /// True when a provided value fell through every rule.
    pub fn is_table_gap(&self) -> bool {
        self.range == R::CHECK_ENTRY
    }
}

/// One row of a classification table.
pub(crate) struct Rule<V, R> {
    pub matches: fn(V) -> bool,
    pub range: R,
}

/// Walk `rules` in order and return the first matching range.
pub(crate) fn first_match<V: Copy, R: RangeLabel>(rules: &[Rule<V, R>], value: V) -> R {
    rules
        .iter()
        .find(|rule| (rule.matches)(value))
        .map(|rule| rule.range)
        .unwrap_or(R::CHECK_ENTRY)
}
