pub mod errors;
pub mod money;
