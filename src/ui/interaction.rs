//! One button press, from raw input to rendered feedback.
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::inference::{ImageGenerator, InferenceOutcome};
use crate::prompt::Prompt;
use crate::ui::feedback::Feedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// Lifecycle of a single click: `Idle -> Requesting -> {Succeeded, Failed}`.
#[derive(Debug)]
pub struct Interaction {
    id: Uuid,
    state: InteractionState,
}

impl Interaction {
    pub fn new() -> Self {
        Interaction { id: Uuid::new_v4(), state: InteractionState::Idle }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns false if the interaction already left `Idle`.
    pub fn begin(&mut self) -> bool {
        if self.state != InteractionState::Idle {
            return false;
        }
        self.state = InteractionState::Requesting;
        true
    }

    /// Returns false unless a request was in flight.
    pub fn finish(&mut self, outcome: &InferenceOutcome) -> bool {
        if self.state != InteractionState::Requesting {
            return false;
        }
        self.state = if outcome.is_success() {
            InteractionState::Succeeded
        } else {
            InteractionState::Failed
        };
        true
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle a press of the generate button.
///
/// Blank input yields a warning and the generator is never called.
pub async fn handle_click<G: ImageGenerator>(generator: &G, raw_prompt: &str) -> Feedback {
    let prompt = match Prompt::parse(raw_prompt) {
        Ok(p) => p,
        Err(AppError::Validation(msg)) => return Feedback::Warning(msg),
        Err(e) => return Feedback::Warning(e.to_string()),
    };

    let mut interaction = Interaction::new();
    interaction.begin();
    let span = tracing::info_span!("interaction", id = %interaction.id());
    tracing::info!(parent: &span, "Generating image... Please wait.");

    let outcome = generator.generate(&prompt).instrument(span.clone()).await;
    interaction.finish(&outcome);
    tracing::info!(parent: &span, state = ?interaction.state(), "Interaction finished");

    Feedback::from_outcome(outcome)
}
