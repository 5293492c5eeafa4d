//! clinic-rules
//!
//! The rule evaluation core: range classifiers, hydration scoring, red-flag
//! detection, doctor-check topics and question generation. Pure functions
//! over a [`clinic_core::models::visit::VisitInput`]; no I/O and no state
//! between calls.

pub mod checks;
pub mod classify;
pub mod error;
pub mod evaluate;
pub mod hydration;
pub mod questions;
pub mod red_flags;

pub use evaluate::{Evaluation, evaluate};
