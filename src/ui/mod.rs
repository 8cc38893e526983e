pub mod feedback;
pub mod interaction;

pub use feedback::{extension_for, sniff_content_type, Feedback, IMAGE_CAPTION};
pub use interaction::{handle_click, Interaction, InteractionState};
