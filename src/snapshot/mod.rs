pub mod extractor;
pub mod identity;
pub mod snapshot_model;
