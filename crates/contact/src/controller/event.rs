use crate::{Field, FormFields, SubmissionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FieldChanged { field: Field, value: String },
    SubmitRequested,
    Resolved(SubmissionResult),
}

impl Event {
    pub fn changed(field: Field, value: impl Into<String>) -> Self {
        Event::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

/// Side effects requested by a transition, executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Deliver(FormFields),
    Notify(Notification),
    LogFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Sent,
    Failed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Sent => "Message sent successfully! I will get back to you soon.",
            Notification::Failed => "Failed to send message. Please try again later.",
        }
    }
}

/// User-visible channel for the outcome of a submission attempt.
pub trait Notifier: Send {
    fn notify(&self, notification: Notification);
}
