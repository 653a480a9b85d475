// Re-export model types and service functions
pub mod error;
pub mod model;
pub mod service;

pub use error::NotificationError;
pub use model::{DeliveryMode, FollowupMessage, MessageReference};
pub use service::*;
