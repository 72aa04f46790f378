// src/state/upload.rs
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::api::{ApiError, UploadClient};
use crate::report::PredictionReport;

/// Upload screen state machine: pick a file, validate its name, run the
/// single network attempt on a worker thread, poll the outcome each frame.
///
/// While an attempt is in flight, `submit` is a no-op, so the submit button
/// firing twice can never issue a second request.
#[derive(Default)]
pub struct UploadController {
    file: Option<PathBuf>,
    error: Option<String>,
    in_flight: Option<Receiver<Result<PredictionReport, ApiError>>>,
}

impl UploadController {
    /// Case-sensitive `.csv` suffix check, same policy as the web client
    /// this replaces. A rejected file leaves any prior selection in place.
    pub fn select(&mut self, path: PathBuf) {
        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".csv"))
            .unwrap_or(false);

        if is_csv {
            self.file = Some(path);
            self.error = None;
        } else {
            self.error = Some("Файл должен быть CSV".to_string());
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit(&mut self, client: Arc<dyn UploadClient>) {
        if self.in_flight.is_some() {
            return;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some("Выберите файл".to_string());
            return;
        };

        self.error = None;
        let (tx, rx) = channel();
        self.in_flight = Some(rx);

        log::info!("uploading {}", file.display());
        thread::spawn(move || {
            let _ = tx.send(client.upload(&file));
        });
    }

    /// Drains a finished attempt. A successful report is handed back to the
    /// caller; a failed one turns into the inline error message.
    pub fn poll(&mut self) -> Option<PredictionReport> {
        let rx = self.in_flight.as_ref()?;
        match rx.try_recv() {
            Ok(Ok(report)) => {
                self.in_flight = None;
                log::info!("upload finished: {} predictions", report.predictions.len());
                Some(report)
            }
            Ok(Err(e)) => {
                self.in_flight = None;
                log::warn!("upload failed: {}", e);
                self.error = Some(format!("Ошибка загрузки: {}", e));
                None
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.in_flight = None;
                self.error = Some("Ошибка загрузки: поток загрузки прерван".to_string());
                None
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::thread;
    use std::time::Duration;

    use super::UploadController;
    use crate::report::PredictionReport;

    /// Polls until the in-flight attempt finishes, like the frame loop does.
    pub fn poll_to_completion(ctrl: &mut UploadController) -> Option<PredictionReport> {
        for _ in 0..200 {
            if let Some(report) = ctrl.poll() {
                return Some(report);
            }
            if !ctrl.submitting() {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("upload attempt never finished");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::testing::poll_to_completion;
    use super::*;
    use crate::api::testing::FakeClient;

    #[test]
    fn non_csv_selection_is_rejected() {
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("observations.txt"));
        assert_eq!(ctrl.error(), Some("Файл должен быть CSV"));
        assert!(ctrl.file_name().is_none());
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("observations.CSV"));
        assert_eq!(ctrl.error(), Some("Файл должен быть CSV"));
    }

    #[test]
    fn rejected_file_keeps_prior_selection() {
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("observations.csv"));
        ctrl.select(PathBuf::from("notes.txt"));
        assert_eq!(ctrl.file_name(), Some("observations.csv"));
        assert_eq!(ctrl.error(), Some("Файл должен быть CSV"));
    }

    #[test]
    fn valid_selection_clears_the_error() {
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("notes.txt"));
        ctrl.select(PathBuf::from("observations.csv"));
        assert_eq!(ctrl.file_name(), Some("observations.csv"));
        assert!(ctrl.error().is_none());
    }

    #[test]
    fn submit_without_file_never_reaches_the_network() {
        let client = Arc::new(FakeClient::returning(PredictionReport::default()));
        let mut ctrl = UploadController::default();
        ctrl.submit(client.clone());
        assert_eq!(ctrl.error(), Some("Выберите файл"));
        assert!(!ctrl.submitting());
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn double_submit_issues_one_call() {
        let client = Arc::new(FakeClient::returning(PredictionReport::default()));
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("observations.csv"));

        ctrl.submit(client.clone());
        ctrl.submit(client.clone());

        poll_to_completion(&mut ctrl);
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn failure_composes_the_inline_message() {
        let client = Arc::new(FakeClient::failing());
        let mut ctrl = UploadController::default();
        ctrl.select(PathBuf::from("observations.csv"));
        ctrl.submit(client);

        assert!(poll_to_completion(&mut ctrl).is_none());
        assert_eq!(ctrl.error(), Some("Ошибка загрузки: Ошибка при загрузке"));
        assert!(!ctrl.submitting());
    }
}
