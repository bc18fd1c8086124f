pub mod classify;
pub mod error;
pub mod forecast;
