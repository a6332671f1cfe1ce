pub mod draft_model;
pub mod reducer;
