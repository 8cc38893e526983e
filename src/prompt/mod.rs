pub mod input;

pub use input::{Prompt, DEFAULT_PROMPT};
