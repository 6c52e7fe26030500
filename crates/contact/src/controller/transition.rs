use super::{Effect, Event, FormState, Notification, Status};
use crate::{FormFields, SubmissionResult, validate};

/// Computes the next form state and the effects the controller must run.
pub fn transition(state: &FormState, event: Event) -> (FormState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = vec![];

    match event {
        Event::FieldChanged { field, value } => {
            next.fields.set(field, value);
            next.errors.clear(field);

            if next.status == Status::Idle {
                next.status = Status::Editing;
            }
        }

        Event::SubmitRequested => match state.status {
            Status::Submitting => {
                tracing::debug!("submit ignored, delivery already in flight");
            }
            _ => {
                let validation = validate(&state.fields);
                next.errors = validation.errors;

                if validation.is_valid {
                    next.status = Status::Submitting;
                    effects.push(Effect::Deliver(state.fields.clone()));
                } else {
                    next.status = Status::Editing;
                }
            }
        },

        Event::Resolved(result) => {
            if state.status != Status::Submitting {
                tracing::debug!(status = %state.status, "stale submission result dropped");
                return (next, effects);
            }

            match result {
                SubmissionResult::Success => {
                    next.status = Status::Succeeded;
                    next.fields = FormFields::default();
                    effects.push(Effect::Notify(Notification::Sent));
                }
                SubmissionResult::Failure(reason) => {
                    next.status = Status::Failed;
                    effects.push(Effect::LogFailure(reason));
                    effects.push(Effect::Notify(Notification::Failed));
                }
            }

            tracing::debug!(status = %next.status, "submission resolved");
            next = next.settle();
        }
    }

    (next, effects)
}
