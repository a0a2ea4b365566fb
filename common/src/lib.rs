pub mod constants;
pub mod models;

pub use models::*;
