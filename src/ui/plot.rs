use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// pH range chart (right panel)
// ---------------------------------------------------------------------------

/// One horizontal bar per visible plant spanning its pH interval.
pub fn ph_chart(ui: &mut Ui, state: &AppState) {
    ui.heading("Soil pH");

    let plants = state.visible_plants();
    if plants.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No plants to chart");
        });
        return;
    }

    Plot::new("ph_chart")
        .x_axis_label("pH")
        .show_y(false)
        .include_x(4.0)
        .include_x(9.0)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .show(ui, |plot_ui| {
            for (row, plant) in plants.iter().enumerate() {
                let (min, max) = plant.ph_range();
                // Either bound alone still places the plant on the axis.
                let (Some(lo), Some(hi)) = (min.or(max), max.or(min)) else {
                    continue;
                };
                let y = -(row as f64);
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&plant.kind))
                    .unwrap_or(Color32::LIGHT_GREEN);
                let name = plant.display_name();

                if lo == hi {
                    plot_ui.points(
                        Points::new(vec![[lo, y]])
                            .name(name)
                            .color(color)
                            .radius(3.0),
                    );
                } else {
                    let points: PlotPoints = vec![[lo, y], [hi, y]].into();
                    plot_ui.line(Line::new(points).name(name).color(color).width(4.0));
                }
            }
        });
}
