//! clinic-export
//!
//! Text outputs for a visit: the copy/paste summary, the Markdown visit-prep
//! report rendered from a Tera template, and its DOCX conversion.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod summary;
