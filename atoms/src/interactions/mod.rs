// Re-export model types and service functions
pub mod error;
pub mod model;
pub mod service;

pub use error::InteractionError;
pub use model::{
    ChannelRef, CommandData, CommandInvocation, CommandOption, InteractionResponse,
    InteractionResponseData, OriginCoordinates,
};
pub use service::*;
