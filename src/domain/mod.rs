pub mod assessment;
pub mod types;
