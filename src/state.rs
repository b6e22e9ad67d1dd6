use std::path::PathBuf;

use file_roster::{Config, DataRequest, DataService, Record, SortMode};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source of every list shown.
    pub service: DataService,

    /// Records as last returned by the service.
    pub records: Vec<Record>,

    /// Order of `records`; `None` is file order.
    pub sort_mode: Option<SortMode>,

    /// Message of the last failed request.
    pub error: Option<String>,
}

impl AppState {
    pub fn new(service: DataService) -> Self {
        Self {
            service,
            records: Vec::new(),
            sort_mode: None,
            error: None,
        }
    }

    /// Fetch the list in file order.
    pub fn refresh(&mut self) {
        self.sort_mode = None;
        self.send(&DataRequest::get());
    }

    /// Ask the service for the list in `mode` order.
    pub fn sort_by(&mut self, mode: SortMode) {
        self.sort_mode = Some(mode);
        self.send(&DataRequest::sort(mode));
    }

    /// Point the service at another data file and reload.
    pub fn set_data_path(&mut self, path: PathBuf) {
        let config = Config {
            data_path: path,
            ..self.service.config().clone()
        };
        self.service = DataService::new(config);
        self.refresh();
    }

    fn send(&mut self, request: &DataRequest) {
        let response = self.service.handle(request);

        let outcome = if response.is_success() {
            response
                .records()
                .map_err(|e| format!("Unreadable response: {e}"))
        } else {
            Err(match response.error() {
                Some(body) => body.message,
                None => format!("Request failed with status {}", response.status),
            })
        };

        match outcome {
            Ok(records) => {
                log::info!("Showing {} records", records.len());
                self.records = records;
                self.error = None;
            }
            Err(message) => {
                log::error!("Failed to fetch records: {message}");
                self.error = Some(message);
            }
        }
    }
}
