use std::sync::Arc;

use folio_contact::{
    EmailJsClient, Event, Field, FormController, FormFields, FormState, Notification, Notifier,
    Submitter,
};
use strum::VariantArray;

use crate::config::Config;

/// Prints the outcome message to the terminal.
#[derive(Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{}", notification.message());
    }
}

/// Fills the form field by field, then submits once.
///
/// Inline errors are printed to stderr. Neither validation nor delivery
/// failures are errors here: the returned state tells what happened.
pub async fn send<N: Notifier>(
    submitter: Arc<dyn Submitter>,
    notifier: N,
    fields: FormFields,
) -> FormState {
    let mut controller = FormController::new(submitter, notifier);

    for field in Field::VARIANTS {
        controller.dispatch(Event::changed(*field, fields.get(*field)));
    }

    let state = controller.submit().await.clone();

    for (field, message) in state.errors.iter() {
        eprintln!("{}: {message}", field.label());
    }

    state
}

pub async fn contact(config: Config, fields: FormFields) -> anyhow::Result<FormState> {
    let client = EmailJsClient::new(config.emailjs.credentials())
        .with_endpoint(config.emailjs.endpoint.as_str())
        .with_timeout(config.emailjs.timeout())?;

    Ok(send(Arc::new(client), ConsoleNotifier, fields).await)
}
