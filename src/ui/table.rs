use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use mycelia_ai::botany::model::format_range;
use mycelia_ai::PlantRecord;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the matching plants; clicking a name selects it.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    let plants = state.visible_plants();
    if state.database.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to browse plants  (File → Open CSV…)");
        });
        return;
    }
    if plants.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No plant matches the current search");
        });
        return;
    }

    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            for title in ["Common name", "Scientific name", "Type", "Height cm", "pH", "Humidity"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, plants.len(), |mut row| {
                let pos = row.index();
                let idx = state.visible_indices[pos];
                let plant = plants[pos];
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&plant.kind));

                row.col(|ui| {
                    if ui
                        .selectable_label(state.selected == Some(idx), plant.display_name())
                        .clicked()
                    {
                        clicked = Some(idx);
                    }
                });
                row.col(|ui| {
                    ui.label(RichText::new(&plant.scientific_name).italics());
                });
                row.col(|ui| {
                    let mut text = RichText::new(&plant.kind);
                    if let Some(c) = color {
                        text = text.color(c);
                    }
                    ui.label(text);
                });
                row.col(|ui| {
                    ui.label(format_range(plant.height_min, plant.height_max));
                });
                row.col(|ui| {
                    ui.label(format_range(plant.ph_min, plant.ph_max));
                });
                row.col(|ui| {
                    ui.label(&plant.humidity);
                });
            });
        });

    if clicked.is_some() {
        state.selected = clicked;
    }
}

// ---------------------------------------------------------------------------
// Detail view (bottom panel)
// ---------------------------------------------------------------------------

/// Render every field of the selected plant.
pub fn plant_details(ui: &mut Ui, state: &AppState) {
    let Some(plant) = state.selected_plant() else {
        ui.label("Select a plant to see its details.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(plant.display_name());
        ui.label(RichText::new(&plant.scientific_name).italics());
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("plant_details")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for (label, value) in detail_rows(plant) {
                        if value.is_empty() {
                            continue;
                        }
                        ui.strong(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
}

fn detail_rows(plant: &PlantRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Type", plant.kind.clone()),
        ("Description", plant.description.clone()),
        ("Height (cm)", format_range(plant.height_min, plant.height_max)),
        ("Width (cm)", format_range(plant.width_min, plant.width_max)),
        ("pH", format_range(plant.ph_min, plant.ph_max)),
        ("Humidity", plant.humidity.clone()),
        ("Exposure", plant.exposure.clone()),
        ("Companions", plant.companions.clone()),
        ("Usage", plant.usage.clone()),
        ("Foliage", plant.foliage.clone()),
        ("Habit", plant.habit.clone()),
        ("Roots", plant.roots.clone()),
        ("Ecology", plant.ecology.clone()),
        ("Landscape uses", plant.landscape_uses.clone()),
        ("Fertilizer", plant.fertilizer.clone()),
        ("Bloom period", plant.bloom_period.clone()),
        ("Flower colour", plant.flower_color.clone()),
        ("Fruiting", plant.fruiting.clone()),
        ("Toxic", plant.toxic.clone()),
        ("Notes", plant.notes.clone()),
    ]
}
