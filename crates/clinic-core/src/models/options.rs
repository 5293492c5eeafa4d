//! Literal option sets for the categorical form fields.
//!
//! Each enum serializes as the exact label shown to the user, so the JSON
//! form and the summary text agree on spelling.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A closed set of answer options with user-facing labels.
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Parse a raw form answer. Blank means "not answered".
pub fn parse_choice<T: Choice>(field: &str, raw: &str) -> Result<Option<T>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    T::ALL
        .iter()
        .copied()
        .find(|option| option.label().eq_ignore_ascii_case(raw))
        .map(Some)
        .ok_or_else(|| CoreError::InvalidOption {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Labels of every option, in display order.
pub fn labels<T: Choice>() -> Vec<&'static str> {
    T::ALL.iter().map(|option| option.label()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[default]
    #[serde(rename = "Prefer not to say")]
    Unspecified,
    Male,
    Female,
}

impl Choice for Sex {
    const ALL: &'static [Self] = &[Sex::Unspecified, Sex::Male, Sex::Female];

    fn label(self) -> &'static str {
        match self {
            Sex::Unspecified => "Prefer not to say",
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// When the symptoms started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Onset {
    Today,
    #[serde(rename = "1-3 days")]
    OneToThreeDays,
    #[serde(rename = "4-7 days")]
    FourToSevenDays,
    #[serde(rename = "1-4 weeks")]
    OneToFourWeeks,
    #[serde(rename = "More than a month")]
    MoreThanAMonth,
}

impl Choice for Onset {
    const ALL: &'static [Self] = &[
        Onset::Today,
        Onset::OneToThreeDays,
        Onset::FourToSevenDays,
        Onset::OneToFourWeeks,
        Onset::MoreThanAMonth,
    ];

    fn label(self) -> &'static str {
        match self {
            Onset::Today => "Today",
            Onset::OneToThreeDays => "1-3 days",
            Onset::FourToSevenDays => "4-7 days",
            Onset::OneToFourWeeks => "1-4 weeks",
            Onset::MoreThanAMonth => "More than a month",
        }
    }
}

/// How the symptoms have changed since they started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Progression {
    #[serde(rename = "Getting better")]
    Improving,
    #[serde(rename = "Staying the same")]
    Unchanged,
    #[serde(rename = "Getting worse")]
    Worsening,
    #[serde(rename = "Comes and goes")]
    Intermittent,
}

impl Choice for Progression {
    const ALL: &'static [Self] = &[
        Progression::Improving,
        Progression::Unchanged,
        Progression::Worsening,
        Progression::Intermittent,
    ];

    fn label(self) -> &'static str {
        match self {
            Progression::Improving => "Getting better",
            Progression::Unchanged => "Staying the same",
            Progression::Worsening => "Getting worse",
            Progression::Intermittent => "Comes and goes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl Choice for YesNo {
    const ALL: &'static [Self] = &[YesNo::Yes, YesNo::No];

    fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UrineColor {
    #[serde(rename = "Pale / clear")]
    Pale,
    Yellow,
    #[serde(rename = "Dark yellow")]
    DarkYellow,
}

impl Choice for UrineColor {
    const ALL: &'static [Self] = &[UrineColor::Pale, UrineColor::Yellow, UrineColor::DarkYellow];

    fn label(self) -> &'static str {
        match self {
            UrineColor::Pale => "Pale / clear",
            UrineColor::Yellow => "Yellow",
            UrineColor::DarkYellow => "Dark yellow",
        }
    }
}

/// How often vomiting or diarrhoea has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Frequency {
    #[serde(rename = "No")]
    Never,
    #[serde(rename = "Some")]
    Occasional,
    Frequent,
}

impl Choice for Frequency {
    const ALL: &'static [Self] = &[Frequency::Never, Frequency::Occasional, Frequency::Frequent];

    fn label(self) -> &'static str {
        match self {
            Frequency::Never => "No",
            Frequency::Occasional => "Some",
            Frequency::Frequent => "Frequent",
        }
    }
}
