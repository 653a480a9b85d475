//! Domain atoms for the image-generation bot: Discord interaction payloads,
//! the fixed command set, and the two outbound provider clients.

pub mod commands;
pub mod generation;
pub mod interactions;
pub mod notification;
