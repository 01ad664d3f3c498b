//! memora-chat
//!
//! The virtual tutor: chat-completion provider seam, analysis-annotated
//! system prompt, tutor session orchestration, the offline canned responder,
//! memory exercises, and voice collaborator traits.

pub mod chat;
pub mod context;
pub mod error;
pub mod exercises;
pub mod responder;
pub mod tutor;
pub mod voice;
