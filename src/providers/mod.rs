pub mod env;
pub mod imagery;
pub mod models;
pub mod recognition;
