//! Gemini-backed implementation of the model collaborator, behind the
//! `gemini` cargo feature so the core pipeline stays free of HTTP
//! dependencies.

pub mod client;
pub mod types;

pub use client::{GeminiChat, GeminiClient};
pub use types::{Content, Part};
