//! Core data types for the fstk chat completion client.
//!
//! This crate provides the foundation data types used across all fstk
//! interfaces.

mod message;
mod model;
mod request;
mod response;
mod role;

pub use message::Message;
pub use model::ModelInfo;
pub use request::ChatCompletionRequest;
pub use response::ChatCompletionResponse;
pub use role::Role;
