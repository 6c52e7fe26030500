use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{
    Event, Field, FormController, FormFields, Notification, Notifier, SubmissionResult, Submitter,
};
use tokio::sync::{Notify, mpsc};

#[derive(Clone, Default)]
pub struct RecordingNotifier(Arc<Mutex<Vec<Notification>>>);

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

/// Answers every delivery with a fixed result.
pub struct FixedSubmitter {
    pub result: SubmissionResult,
    pub calls: AtomicUsize,
    pub received: Mutex<Vec<FormFields>>,
}

impl FixedSubmitter {
    pub fn new(result: SubmissionResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            received: Mutex::new(vec![]),
        })
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for FixedSubmitter {
    async fn submit(&self, fields: &FormFields) -> SubmissionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(fields.clone());
        self.result.clone()
    }
}

/// Holds every delivery until the test releases it.
pub struct GatedSubmitter {
    pub calls: AtomicUsize,
    started: mpsc::UnboundedSender<()>,
    release: Notify,
}

impl GatedSubmitter {
    #[allow(dead_code)]
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        let submitter = Arc::new(Self {
            calls: AtomicUsize::new(0),
            started,
            release: Notify::new(),
        });

        (submitter, started_rx)
    }

    #[allow(dead_code)]
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl Submitter for GatedSubmitter {
    async fn submit(&self, _fields: &FormFields) -> SubmissionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.started.send(());
        self.release.notified().await;
        SubmissionResult::Success
    }
}

pub fn valid_fields() -> FormFields {
    FormFields {
        name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

pub fn fill_events(fields: &FormFields) -> Vec<Event> {
    [Field::Name, Field::Email, Field::Subject, Field::Message]
        .into_iter()
        .map(|field| Event::changed(field, fields.get(field)))
        .collect()
}

#[allow(dead_code)]
pub fn fill<N: Notifier>(controller: &mut FormController<N>, fields: &FormFields) {
    for event in fill_events(fields) {
        controller.dispatch(event);
    }
}
