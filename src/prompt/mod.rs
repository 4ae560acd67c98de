//! Prompt generation for the downstream fengshui analysis skill.
//!
//! Takes a replayed layout and produces the Chinese-language analysis
//! request, one section for family members and one for rooms.

pub mod config;
pub mod text;

pub use config::PromptConfig;
pub use text::{render, render_canvas, render_grid, PromptError};
