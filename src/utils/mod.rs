pub mod error;
pub mod logger;
pub mod sink;
pub mod validation;
