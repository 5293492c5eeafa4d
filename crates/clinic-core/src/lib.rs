//! clinic-core
//!
//! Pure domain types for Clinic Companion: the raw visit form, the typed
//! visit input it is converted into, the literal option sets, and the
//! "was this value supplied" predicate. No rules live here.

pub mod error;
pub mod models;
pub mod provided;
