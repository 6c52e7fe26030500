use std::sync::atomic::Ordering;

use folio_contact::{
    Event, Field, FieldErrors, FormController, FormFields, Notification, Status, SubmissionResult,
};
use tokio::sync::mpsc;

mod helpers;

use helpers::{FixedSubmitter, GatedSubmitter, RecordingNotifier};

#[tokio::test]
async fn test_success_resets_form() -> anyhow::Result<()> {
    let submitter = FixedSubmitter::new(SubmissionResult::Success);
    let notifier = RecordingNotifier::default();
    let mut controller = FormController::new(submitter.clone(), notifier.clone());

    helpers::fill(&mut controller, &helpers::valid_fields());
    let state = controller.submit().await;

    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.fields, FormFields::default());
    assert_eq!(state.errors, FieldErrors::default());
    assert_eq!(notifier.all(), vec![Notification::Sent]);
    assert_eq!(submitter.calls(), 1);
    assert_eq!(
        submitter.received.lock().unwrap().as_slice(),
        &[helpers::valid_fields()]
    );

    Ok(())
}

#[tokio::test]
async fn test_failure_keeps_typed_content() -> anyhow::Result<()> {
    let submitter = FixedSubmitter::new(SubmissionResult::Failure("network down".to_owned()));
    let notifier = RecordingNotifier::default();
    let mut controller = FormController::new(submitter.clone(), notifier.clone());

    helpers::fill(&mut controller, &helpers::valid_fields());
    let state = controller.submit().await;

    assert_eq!(state.status, Status::Editing);
    assert_eq!(state.fields, helpers::valid_fields());
    assert_eq!(notifier.all(), vec![Notification::Failed]);

    // The form stays usable: a retry issues a fresh attempt.
    controller.submit().await;
    assert_eq!(submitter.calls(), 2);
    assert_eq!(notifier.all().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_invalid_form_never_reaches_provider() -> anyhow::Result<()> {
    let submitter = FixedSubmitter::new(SubmissionResult::Success);
    let notifier = RecordingNotifier::default();
    let mut controller = FormController::new(submitter.clone(), notifier.clone());

    controller.dispatch(Event::changed(Field::Email, "bad"));
    let state = controller.submit().await;

    assert_eq!(state.status, Status::Editing);
    assert_eq!(state.errors.email, "Invalid email format");
    assert_eq!(state.errors.name, "Name is required");
    assert_eq!(submitter.calls(), 0);
    assert!(notifier.all().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_submit_while_submitting_is_ignored() -> anyhow::Result<()> {
    let (submitter, mut started) = GatedSubmitter::new();
    let notifier = RecordingNotifier::default();
    let mut controller = FormController::new(submitter.clone(), notifier.clone());

    helpers::fill(&mut controller, &helpers::valid_fields());
    controller.dispatch(Event::SubmitRequested);
    started.recv().await;

    assert!(controller.state().is_busy());
    controller.dispatch(Event::SubmitRequested);
    controller.dispatch(Event::SubmitRequested);
    assert_eq!(controller.state().status, Status::Submitting);

    submitter.release();
    let state = controller.settle().await;

    assert_eq!(state.status, Status::Idle);
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.all(), vec![Notification::Sent]);

    Ok(())
}

#[tokio::test]
async fn test_event_loop_ignores_queued_submit() -> anyhow::Result<()> {
    let (submitter, mut started) = GatedSubmitter::new();
    let notifier = RecordingNotifier::default();
    let controller = FormController::new(submitter.clone(), notifier.clone());
    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(controller.run(rx));

    for event in helpers::fill_events(&helpers::valid_fields()) {
        tx.send(event).await?;
    }
    tx.send(Event::SubmitRequested).await?;
    started.recv().await;

    tx.send(Event::SubmitRequested).await?;
    submitter.release();
    drop(tx);

    let (state, notifier) = handle.await?;

    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.fields, FormFields::default());
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.all(), vec![Notification::Sent]);

    Ok(())
}
