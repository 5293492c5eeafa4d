pub mod form;
pub mod options;
pub mod visit;
