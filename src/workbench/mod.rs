pub mod analysis;
pub mod session;
