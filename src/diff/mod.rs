pub mod diff_model;
pub mod engine;
