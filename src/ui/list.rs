use std::collections::BTreeSet;

use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use file_roster::data::date::format_display_date;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Record list (central panel)
// ---------------------------------------------------------------------------

/// Render the record table, or the error / empty placeholder.
pub fn file_list(ui: &mut Ui, state: &AppState) {
    if let Some(msg) = &state.error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!("Something went wrong.\n{msg}"))
                    .heading()
                    .color(Color32::LIGHT_RED),
            );
        });
        return;
    }

    if state.records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data to display");
        });
        return;
    }

    // Passthrough columns, in name order.
    let extra_columns: Vec<&String> = state
        .records
        .iter()
        .flat_map(|r| r.extra.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(200.0))
        .columns(Column::auto(), extra_columns.len())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("File name");
            });
            for column in &extra_columns {
                header.col(|ui| {
                    ui.strong(column.as_str());
                });
            }
            header.col(|_| {});
        })
        .body(|body| {
            body.rows(20.0, state.records.len(), |mut row| {
                let rec = &state.records[row.index()];
                row.col(|ui| {
                    ui.label(format_display_date(&rec.date));
                });
                row.col(|ui| {
                    ui.label(rec.file_name.as_str());
                });
                for column in &extra_columns {
                    row.col(|ui| {
                        ui.label(rec.extra.get(*column).map(String::as_str).unwrap_or(""));
                    });
                }
                row.col(|_| {});
            });
        });
}
