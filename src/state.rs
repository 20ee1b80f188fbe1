use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use mycelia_ai::{BotanyDatabase, ComponentRegistry, PhFilter, PlantQuery, PlantRecord};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Query form: raw widget values behind the side panel
// ---------------------------------------------------------------------------

/// How the pH inputs are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhMode {
    Off,
    Value,
    Range,
}

/// Editable query inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryForm {
    pub common_name: String,
    pub scientific_name: String,
    pub ph_mode: PhMode,
    pub ph_min: f64,
    pub ph_max: f64,
    pub humidity: String,
    /// Passed through to the search; it does not narrow results yet.
    pub sun: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            common_name: String::new(),
            scientific_name: String::new(),
            ph_mode: PhMode::Off,
            ph_min: 6.0,
            ph_max: 7.0,
            humidity: String::new(),
            sun: String::new(),
        }
    }
}

impl QueryForm {
    /// Attribute part of the form as a [`PlantQuery`].
    pub fn to_query(&self) -> mycelia_ai::Result<PlantQuery> {
        let mut query = PlantQuery::new();
        match self.ph_mode {
            PhMode::Off => {}
            PhMode::Value => query = query.with_ph(PhFilter::exact(self.ph_min)?),
            PhMode::Range => {
                query = query.with_ph(PhFilter::between(Some(self.ph_min), Some(self.ph_max))?)
            }
        }
        if !self.humidity.trim().is_empty() {
            query = query.with_humidity(self.humidity.trim());
        }
        if !self.sun.trim().is_empty() {
            query = query.with_sun(self.sun.trim());
        }
        Ok(query)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Database being browsed: the shared default or a user-opened file.
    pub database: Option<Cow<'static, BotanyDatabase>>,

    /// Platform components fed from every loaded dataset.
    pub registry: ComponentRegistry,

    /// Query inputs.
    pub form: QueryForm,

    /// Indices of plants matching the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Plant shown in the detail panel.
    pub selected: Option<usize>,

    /// Colours per plant type.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Validation error for the current query inputs.
    pub query_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            database: None,
            registry: ComponentRegistry::default(),
            form: QueryForm::default(),
            visible_indices: Vec::new(),
            selected: None,
            color_map: None,
            status_message: None,
            query_error: None,
        }
    }
}

impl AppState {
    /// Start with the shared default database, reporting failures in the status line.
    pub fn with_default_database() -> Self {
        let mut state = Self::default();
        match mycelia_ai::default_database() {
            Ok(db) => state.set_database(Cow::Borrowed(db)),
            Err(e) => {
                log::warn!("Default botany database unavailable: {e}");
                state.status_message = Some(format!("No default dataset: {e}"));
            }
        }
        state
    }

    /// Ingest a database, register it with the components and reset the view.
    pub fn set_database(&mut self, database: Cow<'static, BotanyDatabase>) {
        if let Some(path) = database.source_path() {
            self.registry.ingest_botany(path, &database);
        }
        self.color_map = Some(ColorMap::from_plants(database.plants()));
        self.selected = None;
        self.database = Some(database);
        self.status_message = None;
        self.refilter();
    }

    /// Load a CSV chosen by the user.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let db = BotanyDatabase::open(path)
            .with_context(|| format!("loading {}", path.display()))?;
        log::info!("Browsing {} plants from {}", db.len(), path.display());
        self.set_database(Cow::Owned(db));
        Ok(())
    }

    /// Recompute `visible_indices` after a query change.
    ///
    /// Attribute filters keep file order; a name query reorders by lookup
    /// rank and is intersected with the attribute matches.
    pub fn refilter(&mut self) {
        let Some(db) = &self.database else {
            self.visible_indices.clear();
            return;
        };

        let query = match self.form.to_query() {
            Ok(query) => query,
            Err(e) => {
                self.query_error = Some(e.to_string());
                return;
            }
        };
        self.query_error = None;

        let mut indices = db.search_indices(&query);
        let common = self.form.common_name.trim();
        if !common.is_empty() {
            indices = intersect_ranked(db.find_by_common_name_indices(common), &indices);
        }
        let scientific = self.form.scientific_name.trim();
        if !scientific.is_empty() {
            indices = intersect_ranked(db.find_by_scientific_name_indices(scientific), &indices);
        }

        if let Some(sel) = self.selected {
            if !indices.contains(&sel) {
                self.selected = None;
            }
        }
        self.visible_indices = indices;
    }

    /// Clear the form and show everything again.
    pub fn reset_query(&mut self) {
        self.form = QueryForm::default();
        self.refilter();
    }

    /// Plants matching the current query, in display order.
    pub fn visible_plants(&self) -> Vec<&PlantRecord> {
        let Some(db) = &self.database else {
            return Vec::new();
        };
        self.visible_indices
            .iter()
            .filter_map(|&i| db.plants().get(i))
            .collect()
    }

    pub fn selected_plant(&self) -> Option<&PlantRecord> {
        let db = self.database.as_ref()?;
        db.plants().get(self.selected?)
    }

    /// Write the visible plants as a JSON array.
    pub fn export_visible(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &self.visible_plants())
            .context("writing JSON export")?;
        log::info!(
            "Exported {} plants to {}",
            self.visible_indices.len(),
            path.display()
        );
        Ok(())
    }
}

/// Keep `ranked` order, dropping entries not in `allowed`.
fn intersect_ranked(ranked: Vec<usize>, allowed: &[usize]) -> Vec<usize> {
    let allowed: HashSet<usize> = allowed.iter().copied().collect();
    ranked.into_iter().filter(|i| allowed.contains(i)).collect()
}
