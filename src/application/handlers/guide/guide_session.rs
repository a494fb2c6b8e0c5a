//! GuideSession - One pass through the guide wizard.
//!
//! The session receives the presentation surface by reference, opens it as
//! soon as the wizard exists and closes it when the user cancels or a prompt
//! has been produced.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::guide::{
    PromptError, SelectionWizard, SlideDeck, WizardCursor, WizardError, WizardEvent,
};
use crate::ports::GuideSurface;

/// Why a session could not produce a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinalizeError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl From<FinalizeError> for DomainError {
    fn from(err: FinalizeError) -> Self {
        match err {
            FinalizeError::Wizard(err) => err.into(),
            FinalizeError::Prompt(err) => err.into(),
        }
    }
}

/// A wizard bound to the surface that shows it.
pub struct GuideSession<'s> {
    surface: &'s dyn GuideSurface,
    wizard: SelectionWizard,
}

impl<'s> GuideSession<'s> {
    /// Creates a wizard on the topic list and opens the surface.
    pub fn open(deck: Arc<SlideDeck>, surface: &'s dyn GuideSurface) -> Self {
        let wizard = SelectionWizard::new(deck);
        surface.open();
        tracing::debug!(slides = wizard.deck().len(), "guide session opened");
        Self { surface, wizard }
    }

    pub fn wizard(&self) -> &SelectionWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut SelectionWizard {
        &mut self.wizard
    }

    /// Forwards a user event to the wizard.
    pub fn dispatch(&mut self, event: WizardEvent) -> Result<WizardCursor, WizardError> {
        self.wizard.dispatch(event)
    }

    /// Discards the selection and closes the surface.
    pub fn cancel(self) {
        self.surface.close();
        tracing::debug!("guide session cancelled");
    }

    /// Finalizes the wizard and returns the synthesized prompt.
    ///
    /// The surface is closed only on success; on error the session stays
    /// usable so the user can adjust the selection.
    pub fn finalize(&mut self) -> Result<String, FinalizeError> {
        let prompt = self.wizard.finalize()?.synthesize_prompt()?;
        self.surface.close();
        tracing::debug!(prompt_len = prompt.len(), "guide session finalized");
        Ok(prompt)
    }
}
