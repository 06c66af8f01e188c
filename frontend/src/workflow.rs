//! Upload-and-predict state machine.
//!
//! [`PredictWorkflow`] owns every piece of page state: the selected
//! image and its preview, the drag-hover flag, the outstanding request
//! and the last result. Components only render it and forward events.
//!
//! # Request lifecycle
//!
//! ```text
//!  begin_predict ──▶ PendingPrediction{seq} ──▶ request_prediction ──▶ finish_predict(seq)
//!        │                                                                 │
//!        └── no file: toast, nothing sent              stale seq: discarded┘
//! ```
//!
//! Each request gets a sequence number. Selecting a new file supersedes
//! the outstanding request; its response is dropped when it arrives.
//! File reads are ticketed the same way: only the latest selection's
//! read is applied.

use crate::error::{AppError, AppResult};
use crate::services::Notifier;
use crate::types::{
    is_image_media_type, Notification, PredictResponse, PredictionResult, PreviewData,
    SelectedFile,
};

/// A request that has been started and must be completed with
/// [`PredictWorkflow::finish_predict`].
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPrediction {
    pub seq: u64,
    pub file: SelectedFile,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictWorkflow {
    selected: Option<SelectedFile>,
    preview: Option<PreviewData>,
    result: Option<PredictionResult>,
    drag_active: bool,
    /// Last sequence number handed out.
    issued: u64,
    /// Sequence number of the authoritative outstanding request.
    in_flight: Option<u64>,
    /// Last selection ticket handed out; older file reads are stale.
    selections: u64,
}

impl PredictWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewData> {
        self.preview.as_ref()
    }

    /// Last successful result. Hidden while a request is outstanding.
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref().filter(|_| !self.is_loading())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Whether the predict button should accept a click.
    pub fn can_predict(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// End of a drop gesture. The dropped file, if any, goes through
    /// [`begin_selection`](Self::begin_selection) separately.
    pub fn drag_drop(&mut self) {
        self.drag_active = false;
    }

    // =========================================================================
    // File selection
    // =========================================================================

    /// Accept or reject a file by its declared media type, before any
    /// content is read.
    ///
    /// Returns a ticket for [`finish_selection`](Self::finish_selection).
    /// Rejection emits a toast and leaves the state as it was.
    pub fn begin_selection(
        &mut self,
        name: &str,
        media_type: &str,
        notifier: &dyn Notifier,
    ) -> AppResult<u64> {
        check_media_type(name, media_type, notifier)?;
        self.selections += 1;
        log::debug!("Reading {} as selection #{}", name, self.selections);
        Ok(self.selections)
    }

    /// Apply the read of selection `ticket`.
    ///
    /// Returns `false` if a newer selection was made meanwhile and the
    /// read was dropped.
    pub fn finish_selection(
        &mut self,
        ticket: u64,
        outcome: AppResult<SelectedFile>,
        notifier: &dyn Notifier,
    ) -> bool {
        if ticket != self.selections {
            log::warn!("Discarding stale file read for selection #{}", ticket);
            return false;
        }

        match outcome {
            Ok(file) => {
                if let Err(e) = self.select_file(file, notifier) {
                    log::debug!("Selection rejected: {}", e);
                }
            }
            Err(err) => {
                log::error!("❌ {}", err);
                notifier.emit(Notification::from(&err));
            }
        }
        true
    }

    /// Validate and store a newly chosen file.
    ///
    /// Non-images are rejected with a toast and leave the state as it was.
    /// An accepted image replaces the previous one, refreshes the preview,
    /// clears the result and supersedes any outstanding request or pending
    /// file read.
    pub fn select_file(&mut self, file: SelectedFile, notifier: &dyn Notifier) -> AppResult<()> {
        check_media_type(&file.name, &file.media_type, notifier)?;

        if let Some(seq) = self.in_flight.take() {
            log::info!("New image selected, superseding request #{}", seq);
        }

        log::info!("🖼️ Selected {} ({} bytes)", file.name, file.size());
        self.selections += 1;
        self.preview = Some(PreviewData::from_file(&file));
        self.selected = Some(file);
        self.result = None;
        Ok(())
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Start a prediction for the selected file.
    ///
    /// Returns `None` when nothing should be sent: no file selected (a toast
    /// is emitted) or a request already outstanding.
    pub fn begin_predict(&mut self, notifier: &dyn Notifier) -> Option<PendingPrediction> {
        if let Some(seq) = self.in_flight {
            log::debug!("Predict ignored, request #{} still outstanding", seq);
            return None;
        }

        let Some(file) = self.selected.clone() else {
            notifier.emit(Notification::from(&AppError::NoFileSelected));
            return None;
        };

        self.issued += 1;
        self.in_flight = Some(self.issued);
        log::info!("🔬 Starting prediction #{} for {}", self.issued, file.name);

        Some(PendingPrediction {
            seq: self.issued,
            file,
        })
    }

    /// Apply the outcome of request `seq`.
    ///
    /// Returns `false` if the request was superseded and the outcome dropped.
    pub fn finish_predict(
        &mut self,
        seq: u64,
        outcome: AppResult<PredictResponse>,
        notifier: &dyn Notifier,
    ) -> bool {
        if self.in_flight != Some(seq) {
            log::warn!("Discarding stale response for request #{}", seq);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(response) => {
                let result = PredictionResult::from(&response);
                log::info!(
                    "✅ Prediction #{}: {} ({})",
                    seq,
                    result.prediction,
                    result.confidence_label()
                );
                let description = response
                    .label
                    .unwrap_or_else(|| result.prediction.to_string());
                self.result = Some(result);
                notifier.emit(Notification::info("Analysis complete", description));
            }
            Err(err) => {
                log::error!("❌ Prediction #{} failed: {}", seq, err);
                notifier.emit(Notification::from(&err));
            }
        }
        true
    }
}

fn check_media_type(name: &str, media_type: &str, notifier: &dyn Notifier) -> AppResult<()> {
    if is_image_media_type(media_type) {
        return Ok(());
    }
    log::warn!("Rejected {} ({})", name, media_type);
    notifier.emit(Notification::destructive(
        "Invalid file type",
        "Please select an image file (PNG, JPG, etc.)",
    ));
    Err(AppError::InvalidFileType {
        media_type: media_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::services::{request_prediction, HttpReply, PredictionTransport};
    use crate::types::{ConfidenceTier, NotificationVariant, RiskLabel};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn titles(&self) -> Vec<String> {
            self.sent.borrow().iter().map(|n| n.title.clone()).collect()
        }

        fn last(&self) -> Notification {
            self.sent.borrow().last().cloned().expect("no notification emitted")
        }
    }

    impl Notifier for RecordingNotifier {
        fn emit(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }

    struct MockBackend {
        status: u16,
        body: String,
        calls: Cell<usize>,
    }

    impl MockBackend {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: Cell::new(0),
            }
        }
    }

    impl PredictionTransport for MockBackend {
        async fn post_image(&self, _file: &SelectedFile) -> AppResult<HttpReply> {
            self.calls.set(self.calls.get() + 1);
            Ok(HttpReply {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    /// Drive one predict action the way the upload panel does.
    fn predict(workflow: &mut PredictWorkflow, backend: &MockBackend, notifier: &RecordingNotifier) {
        if let Some(pending) = workflow.begin_predict(notifier) {
            assert!(workflow.is_loading());
            let outcome = block_on(request_prediction(backend, &pending.file));
            workflow.finish_predict(pending.seq, outcome, notifier);
        }
    }

    fn image(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![137u8, 80, 78, 71])
    }

    fn with_image() -> PredictWorkflow {
        let mut workflow = PredictWorkflow::new();
        workflow
            .select_file(image("retina.png"), &RecordingNotifier::default())
            .unwrap();
        workflow
    }

    #[test]
    fn test_initial_state_is_empty() {
        let workflow = PredictWorkflow::new();
        assert!(workflow.selected_file().is_none());
        assert!(workflow.preview().is_none());
        assert!(workflow.result().is_none());
        assert!(!workflow.is_loading());
        assert!(!workflow.drag_active());
        assert!(!workflow.can_predict());
    }

    #[test]
    fn test_non_image_leaves_state_unchanged() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        predict(
            &mut workflow,
            &MockBackend::new(200, r#"{"isRisk": true, "confidence": 0.93}"#),
            &notifier,
        );
        let before = workflow.clone();

        let err = workflow
            .select_file(SelectedFile::new("report.pdf", "application/pdf", vec![1u8]), &notifier)
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidFileType { .. }));
        assert_eq!(workflow, before);
        let last = notifier.last();
        assert_eq!(last.title, "Invalid file type");
        assert_eq!(last.variant, NotificationVariant::Destructive);
    }

    #[test]
    fn test_non_image_on_empty_state() {
        let notifier = RecordingNotifier::default();
        let mut workflow = PredictWorkflow::new();

        assert!(workflow
            .select_file(SelectedFile::new("data.csv", "text/csv", vec![1u8]), &notifier)
            .is_err());
        assert_eq!(workflow, PredictWorkflow::new());
        assert_eq!(notifier.titles(), vec!["Invalid file type"]);
    }

    #[test]
    fn test_image_selection_updates_preview_and_clears_result() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        predict(
            &mut workflow,
            &MockBackend::new(200, r#"{"isRisk": true, "confidence": 0.93}"#),
            &notifier,
        );
        assert!(workflow.result().is_some());

        let next = SelectedFile::new("second.jpg", "image/jpeg", vec![1u8, 2, 3]);
        workflow.select_file(next.clone(), &notifier).unwrap();

        assert_eq!(workflow.selected_file(), Some(&next));
        assert_eq!(
            workflow.preview().map(|p| p.as_data_url()),
            Some("data:image/jpeg;base64,AQID")
        );
        assert!(workflow.result().is_none());
    }

    #[test]
    fn test_predict_without_file_makes_no_call() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(200, r#"{"isRisk": true, "confidence": 0.93}"#);
        let mut workflow = PredictWorkflow::new();

        assert!(workflow.begin_predict(&notifier).is_none());
        assert!(!workflow.is_loading());

        predict(&mut workflow, &backend, &notifier);

        assert_eq!(backend.calls.get(), 0);
        assert!(!workflow.is_loading());
        assert_eq!(notifier.titles(), vec!["No image selected", "No image selected"]);
    }

    #[test]
    fn test_predict_heart_risk() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(200, r#"{"isRisk": true, "confidence": 0.93}"#);
        let mut workflow = with_image();

        predict(&mut workflow, &backend, &notifier);

        assert_eq!(backend.calls.get(), 1);
        assert!(!workflow.is_loading());
        let result = workflow.result().unwrap();
        assert_eq!(result.prediction, "Heart Risk");
        assert_eq!(result.confidence, 0.93);
        assert_eq!(result.tier(), ConfidenceTier::High);
        assert_eq!(notifier.last().title, "Analysis complete");
    }

    #[test]
    fn test_predict_no_heart_risk_low_band() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(200, r#"{"isRisk": false, "confidence": 0.4}"#);
        let mut workflow = with_image();

        predict(&mut workflow, &backend, &notifier);

        assert!(!workflow.is_loading());
        let result = workflow.result().unwrap();
        assert_eq!(result.prediction, RiskLabel::NoHeartRisk);
        assert_eq!(result.prediction, "No Heart Risk");
        assert_eq!(result.confidence, 0.4);
        assert_eq!(result.tier(), ConfidenceTier::Low);
    }

    #[test]
    fn test_completion_toast_uses_backend_label() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(
            200,
            r#"{"label": "Heart Risk Detected", "isRisk": true, "confidence": 0.71}"#,
        );
        let mut workflow = with_image();

        predict(&mut workflow, &backend, &notifier);

        assert_eq!(notifier.last(), Notification::info("Analysis complete", "Heart Risk Detected"));
    }

    #[test]
    fn test_server_error_leaves_result_unset() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(500, "server exploded");
        let mut workflow = with_image();

        predict(&mut workflow, &backend, &notifier);

        assert!(workflow.result().is_none());
        assert!(!workflow.is_loading());
        let last = notifier.last();
        assert_eq!(last.title, "Prediction failed");
        assert!(last.description.contains("500"));
        assert!(last.description.contains("server exploded"));
    }

    #[test]
    fn test_server_error_keeps_previous_result() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        predict(
            &mut workflow,
            &MockBackend::new(200, r#"{"isRisk": false, "confidence": 0.65}"#),
            &notifier,
        );
        let before = workflow.result().cloned();

        predict(&mut workflow, &MockBackend::new(503, "busy"), &notifier);

        assert_eq!(workflow.result().cloned(), before);
        assert!(!workflow.is_loading());
    }

    #[test]
    fn test_malformed_body_is_reported_as_such() {
        let notifier = RecordingNotifier::default();
        let backend = MockBackend::new(200, "definitely not json");
        let mut workflow = with_image();

        predict(&mut workflow, &backend, &notifier);

        assert!(workflow.result().is_none());
        assert!(!workflow.is_loading());
        let last = notifier.last();
        assert_eq!(last.title, "Prediction failed");
        assert!(last.description.starts_with("Invalid response from server"));
    }

    #[test]
    fn test_network_error_is_surfaced() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();

        let pending = workflow.begin_predict(&notifier).unwrap();
        workflow.finish_predict(
            pending.seq,
            Err(AppError::Network("HTTP request failed: connection refused".to_string())),
            &notifier,
        );

        assert!(!workflow.is_loading());
        assert!(notifier.last().description.contains("connection refused"));
    }

    #[test]
    fn test_result_hidden_while_loading() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        predict(
            &mut workflow,
            &MockBackend::new(200, r#"{"isRisk": true, "confidence": 0.93}"#),
            &notifier,
        );

        let pending = workflow.begin_predict(&notifier).unwrap();
        assert!(workflow.is_loading());
        assert!(workflow.result().is_none());
        assert!(!workflow.can_predict());

        workflow.finish_predict(pending.seq, Err(AppError::Network("aborted".to_string())), &notifier);
        assert!(workflow.result().is_some());
    }

    #[test]
    fn test_second_predict_while_loading_is_ignored() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();

        let first = workflow.begin_predict(&notifier).unwrap();
        assert!(workflow.begin_predict(&notifier).is_none());
        assert!(notifier.sent.borrow().is_empty());

        let response = PredictResponse {
            is_risk: false,
            confidence: 0.9,
            label: None,
        };
        assert!(workflow.finish_predict(first.seq, Ok(response), &notifier));
        assert!(!workflow.is_loading());
    }

    #[test]
    fn test_new_selection_supersedes_outstanding_request() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();

        let stale = workflow.begin_predict(&notifier).unwrap();
        workflow.select_file(image("other.png"), &notifier).unwrap();
        assert!(!workflow.is_loading());

        let response = PredictResponse {
            is_risk: true,
            confidence: 0.99,
            label: None,
        };
        assert!(!workflow.finish_predict(stale.seq, Ok(response), &notifier));
        assert!(workflow.result().is_none());
        assert!(notifier.sent.borrow().is_empty());

        let fresh = workflow.begin_predict(&notifier).unwrap();
        assert!(fresh.seq > stale.seq);
        assert_eq!(fresh.file.name, "other.png");
    }

    #[test]
    fn test_non_image_rejected_before_read() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        let before = workflow.clone();

        // Folders and unknown files come through with an empty type.
        let err = workflow.begin_selection("scans", "", &notifier).unwrap_err();

        assert!(matches!(err, AppError::InvalidFileType { .. }));
        assert_eq!(workflow, before);
        assert_eq!(notifier.titles(), vec!["Invalid file type"]);
    }

    #[test]
    fn test_stale_file_read_is_discarded() {
        let notifier = RecordingNotifier::default();
        let mut workflow = PredictWorkflow::new();

        let big = workflow.begin_selection("big.png", "image/png", &notifier).unwrap();
        let small = workflow.begin_selection("small.png", "image/png", &notifier).unwrap();

        // The smaller file finishes reading first.
        assert!(workflow.finish_selection(small, Ok(image("small.png")), &notifier));
        assert!(!workflow.finish_selection(big, Ok(image("big.png")), &notifier));

        assert_eq!(workflow.selected_file().map(|f| f.name.as_str()), Some("small.png"));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_direct_selection_supersedes_pending_read() {
        let notifier = RecordingNotifier::default();
        let mut workflow = PredictWorkflow::new();

        let pending = workflow.begin_selection("slow.png", "image/png", &notifier).unwrap();
        workflow.select_file(image("dropped.png"), &notifier).unwrap();

        assert!(!workflow.finish_selection(pending, Ok(image("slow.png")), &notifier));
        assert_eq!(workflow.selected_file().map(|f| f.name.as_str()), Some("dropped.png"));
    }

    #[test]
    fn test_failed_read_keeps_state_and_notifies() {
        let notifier = RecordingNotifier::default();
        let mut workflow = with_image();
        let selected = workflow.selected_file().cloned();

        let ticket = workflow.begin_selection("eye.jpg", "image/jpeg", &notifier).unwrap();
        assert!(workflow.finish_selection(
            ticket,
            Err(AppError::FileRead("NotReadableError".to_string())),
            &notifier,
        ));

        assert_eq!(workflow.selected_file().cloned(), selected);
        assert_eq!(notifier.last().title, "Could not read file");
    }

    #[test]
    fn test_drag_flags() {
        let notifier = RecordingNotifier::default();
        let mut workflow = PredictWorkflow::new();

        workflow.drag_enter();
        assert!(workflow.drag_active());
        workflow.drag_over();
        assert!(workflow.drag_active());
        workflow.drag_leave();
        assert!(!workflow.drag_active());

        workflow.drag_enter();
        workflow.drag_over();
        workflow.drag_drop();
        assert!(!workflow.drag_active());

        // Invalid drop payload: flag is still cleared.
        workflow.drag_enter();
        workflow.drag_drop();
        let _ = workflow.select_file(SelectedFile::new("a.txt", "text/plain", vec![1u8]), &notifier);
        assert!(!workflow.drag_active());

        workflow.drag_over();
        workflow.drag_drop();
        workflow.select_file(image("dropped.png"), &notifier).unwrap();
        assert!(!workflow.drag_active());
        assert_eq!(workflow.selected_file().map(|f| f.name.as_str()), Some("dropped.png"));
    }
}
