pub mod candidates;
pub mod trackid;
