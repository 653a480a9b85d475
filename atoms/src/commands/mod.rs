// Re-export model types and service functions
pub mod error;
pub mod model;
pub mod service;

pub use error::RegistrationError;
pub use model::{CommandDefinition, CommandOptionDefinition, ImageCommand, STRING_OPTION_TYPE};
pub use service::*;
