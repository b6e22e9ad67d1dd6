use eframe::egui::{self, Color32, RichText, Ui};

use file_roster::SortMode;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.refresh();
                ui.close_menu();
            }
        });

        ui.menu_button("Sort by", |ui: &mut Ui| {
            for mode in SortMode::ALL {
                let selected = state.sort_mode == Some(mode);
                if ui.selectable_label(selected, mode.label()).clicked() {
                    state.sort_by(mode);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        ui.label(format!(
            "{} files from {}",
            state.records.len(),
            state.service.config().data_path.display()
        ));

        if let Some(msg) = &state.error {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open file list")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Switching data file to {}", path.display());
        state.set_data_path(path);
    }
}
