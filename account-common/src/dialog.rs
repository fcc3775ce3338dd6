//! Open/close state for the deletion confirmation dialog

use crate::DeletionBlock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    #[error("Account deletion is blocked: {0:?}")]
    Blocked(DeletionBlock),
}

/// What the view should do after a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The dialog was open; focus goes back to the delete button
    RestoreFocus,
    /// Nothing was open
    AlreadyClosed,
}

/// Two-state machine guarding the confirmation dialog.
///
/// The dialog can only be opened while deletion is not blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletionDialog {
    state: DialogState,
}

impl DeletionDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Closed -> Open. Refused while `block` is blocking.
    pub fn open(&mut self, block: DeletionBlock) -> Result<(), DialogError> {
        if block.is_blocked() {
            return Err(DialogError::Blocked(block));
        }
        if self.state == DialogState::Closed {
            debug!("Deletion dialog: Closed -> Open");
            self.state = DialogState::Open;
        }
        Ok(())
    }

    /// Open -> Closed
    pub fn close(&mut self) -> CloseOutcome {
        match self.state {
            DialogState::Open => {
                debug!("Deletion dialog: Open -> Closed");
                self.state = DialogState::Closed;
                CloseOutcome::RestoreFocus
            }
            DialogState::Closed => CloseOutcome::AlreadyClosed,
        }
    }

    /// Final state when the owning component goes away. The panel calls this
    /// from its drop hook.
    pub fn teardown(mut self) -> DialogState {
        self.close();
        self.state
    }
}
