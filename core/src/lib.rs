pub mod error;
pub mod models;
pub mod report;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{PlannerError, Result};
