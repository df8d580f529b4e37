pub mod error;
pub mod logger;
pub mod media_type;
pub mod output;
pub mod validation;
