// Introskip - Core Library

pub mod filters;
pub mod models;
pub mod time;

pub use filters::*;
pub use models::*;
pub use time::*;
