//! Emphasis weight highlighting for image generation prompts.

pub mod formatting;
pub mod language;
pub mod parsing;
mod regex;
pub mod rendering;
pub mod templating;

pub use rendering::render;
