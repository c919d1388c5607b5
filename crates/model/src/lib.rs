pub mod core;
pub mod criteria;
pub mod errors;
