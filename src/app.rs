use eframe::egui;

use file_roster::DataService;

use crate::state::AppState;
use crate::ui::{list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FileRosterApp {
    pub state: AppState,
}

impl FileRosterApp {
    /// Build the app and fetch the initial list.
    pub fn new(service: DataService) -> Self {
        let mut state = AppState::new(service);
        state.refresh();
        Self { state }
    }
}

impl eframe::App for FileRosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: record list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            list::file_list(ui, &self.state);
        });
    }
}
