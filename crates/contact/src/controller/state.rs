use strum::{AsRefStr, Display};

use crate::{FieldErrors, FormFields};

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub status: Status,
    pub fields: FormFields,
    pub errors: FieldErrors,
}

impl FormState {
    /// Busy while a delivery is in flight; the UI disables the submit button.
    pub fn is_busy(&self) -> bool {
        self.status == Status::Submitting
    }

    /// Outcome states are transient: success returns to `Idle`, failure to
    /// `Editing` so the user can retry without retyping.
    pub(crate) fn settle(mut self) -> Self {
        self.status = match self.status {
            Status::Succeeded => Status::Idle,
            Status::Failed => Status::Editing,
            other => other,
        };
        self
    }
}
