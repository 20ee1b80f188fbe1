use std::borrow::Cow;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, PhMode};

// ---------------------------------------------------------------------------
// Left side panel – query form
// ---------------------------------------------------------------------------

/// Render the left query panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search");
    ui.separator();

    if state.database.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let before = state.form.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Names ----
            ui.strong("Common name");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.common_name)
                    .hint_text("e.g. achillee"),
            );
            ui.strong("Scientific name");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.scientific_name)
                    .hint_text("e.g. lavandula"),
            );
            ui.separator();

            // ---- pH ----
            ui.strong("Soil pH");
            ui.horizontal(|ui: &mut Ui| {
                ui.radio_value(&mut state.form.ph_mode, PhMode::Off, "Any");
                ui.radio_value(&mut state.form.ph_mode, PhMode::Value, "Value");
                ui.radio_value(&mut state.form.ph_mode, PhMode::Range, "Range");
            });
            match state.form.ph_mode {
                PhMode::Off => {}
                PhMode::Value => {
                    ui.add(ph_input(&mut state.form.ph_min));
                }
                PhMode::Range => {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.add(ph_input(&mut state.form.ph_min));
                        ui.label("to");
                        ui.add(ph_input(&mut state.form.ph_max));
                    });
                }
            }
            if let Some(err) = &state.query_error {
                ui.label(RichText::new(err).color(Color32::RED));
            }
            ui.separator();

            // ---- Humidity / exposure ----
            ui.strong("Humidity");
            ui.add(egui::TextEdit::singleline(&mut state.form.humidity).hint_text("e.g. humide"));
            ui.strong("Exposure");
            ui.add(egui::TextEdit::singleline(&mut state.form.sun).hint_text("not applied yet"));
            ui.separator();

            if ui.button("Reset").clicked() {
                state.reset_query();
            }

            // ---- Legend ----
            if let Some(cm) = &state.color_map {
                ui.separator();
                ui.strong("Plant types");
                for (kind, color) in cm.legend_entries() {
                    ui.label(RichText::new(kind).color(color));
                }
            }
        });

    // Re-run the query only when an input actually changed.
    if state.form != before {
        state.refilter();
    }
}

fn ph_input(value: &mut f64) -> egui::DragValue<'_> {
    egui::DragValue::new(value)
        .range(0.0..=14.0)
        .speed(0.05)
        .fixed_decimals(1)
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.database.is_some(), egui::Button::new("Export visible as JSON…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload default dataset").clicked() {
                reload_default(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(db) = &state.database {
            ui.label(format!(
                "{} plants loaded, {} visible",
                db.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        let summary = state.registry.describe();
        ui.label(
            summary
                .values()
                .cloned()
                .collect::<Vec<_>>()
                .join(" · "),
        );

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open plant dataset")
        .add_filter("CSV (;-separated)", &["csv"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.open_path(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export visible plants")
        .add_filter("JSON", &["json"])
        .set_file_name("plants.json")
        .save_file();

    if let Some(path) = file {
        match state.export_visible(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn reload_default(state: &mut AppState) {
    match mycelia_ai::default_database() {
        Ok(db) => state.set_database(Cow::Borrowed(db)),
        Err(e) => {
            log::error!("Failed to load default dataset: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
