use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MyceliaApp {
    pub state: AppState,
}

impl Default for MyceliaApp {
    fn default() -> Self {
        Self {
            state: AppState::with_default_database(),
        }
    }
}

impl eframe::App for MyceliaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: query form ----
        egui::SidePanel::left("query_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: pH chart ----
        egui::SidePanel::right("ph_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::ph_chart(ui, &self.state);
            });

        // ---- Bottom panel: selected plant ----
        egui::TopBottomPanel::bottom("details_panel")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                table::plant_details(ui, &self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results_table(ui, &mut self.state);
        });
    }
}
