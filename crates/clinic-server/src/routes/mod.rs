pub mod health;
pub mod options;
pub mod report;
pub mod summary;
pub mod visit;
