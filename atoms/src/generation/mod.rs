// Re-export model types and service functions
pub mod error;
pub mod model;
pub mod service;

pub use error::GenerationError;
pub use model::{GenerationRequest, GenerationResult, IMAGE_COUNT, IMAGE_SIZE};
pub use service::*;
