// src/state/mod.rs
use std::sync::Arc;

use crate::api::{ApiClient, UploadClient};
use crate::report::PredictionReport;
use crate::settings::Settings;
use crate::state::dashboard::DashboardView;
use crate::state::detail::DetailView;
use crate::state::upload::UploadController;
use crate::store::{FileStore, ReportStore};

pub mod dashboard;
pub mod detail;
pub mod upload;

/// Screen/tab tracking; replaces the `/`, `/dashboard` and `/detail` routes
/// of the web client this app supersedes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Upload,
    Dashboard,
    Detail,
}

// Core application state
pub struct AppState {
    pub store: Box<dyn ReportStore>,
    pub client: Arc<dyn UploadClient>,

    pub current_screen: Screen,
    pub upload: UploadController,
    pub dashboard: DashboardView,
    pub detail: DetailView,

    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self::with_parts(
            Box::new(FileStore::new()),
            Arc::new(ApiClient::new(settings)),
        )
    }

    /// Store and client are injected so tests can drive the whole flow with
    /// in-memory fakes.
    pub fn with_parts(store: Box<dyn ReportStore>, client: Arc<dyn UploadClient>) -> Self {
        let dashboard = DashboardView::load(store.as_ref());
        let detail = DetailView::load(store.as_ref());
        Self {
            store,
            client,
            current_screen: Screen::Upload,
            upload: UploadController::default(),
            dashboard,
            detail,
            error_message: None,
        }
    }

    /// Re-snapshots the target screen from the cache slot, then switches to
    /// it. The read-only screens render from that snapshot only.
    pub fn navigate(&mut self, screen: Screen) {
        match screen {
            Screen::Dashboard => self.dashboard = DashboardView::load(self.store.as_ref()),
            Screen::Detail => self.detail = DetailView::load(self.store.as_ref()),
            Screen::Upload => {}
        }
        self.current_screen = screen;
    }

    /// Terminal step of a successful upload: overwrite the slot and land on
    /// the dashboard.
    pub fn finish_upload(&mut self, report: PredictionReport) {
        if let Err(e) = self.store.save(&report) {
            self.error_message = Some(e.to_string());
        }
        self.navigate(Screen::Dashboard);
    }
}
