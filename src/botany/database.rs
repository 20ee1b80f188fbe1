use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::BotanyConfig;
use crate::error::Result;

use super::filter::PlantQuery;
use super::loader::load_plants_csv;
use super::model::PlantRecord;
use super::normalize::{normalize_common_name, normalize_scientific_name};

// ---------------------------------------------------------------------------
// NameIndex – exact buckets plus an ordered scan list for substrings
// ---------------------------------------------------------------------------

/// Which name a [`NameIndex`] covers, and how it is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameAxis {
    Common,
    Scientific,
}

impl NameAxis {
    fn name_of(self, plant: &PlantRecord) -> &str {
        match self {
            NameAxis::Common => &plant.common_name,
            NameAxis::Scientific => &plant.scientific_name,
        }
    }

    fn normalize(self, value: &str) -> String {
        match self {
            NameAxis::Common => normalize_common_name(value),
            NameAxis::Scientific => normalize_scientific_name(value),
        }
    }
}

/// Index over one name axis. Records are referenced by their position in
/// [`BotanyDatabase::plants`]; equality between records is structural.
#[derive(Debug, Clone)]
struct NameIndex {
    axis: NameAxis,
    exact: HashMap<String, Vec<usize>>,
    keys: Vec<(String, usize)>,
}

impl NameIndex {
    fn build(plants: &[PlantRecord], axis: NameAxis) -> Self {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut keys = Vec::new();
        for (idx, plant) in plants.iter().enumerate() {
            let name = axis.name_of(plant);
            if name.is_empty() {
                continue;
            }
            let key = axis.normalize(name);
            exact.entry(key.clone()).or_default().push(idx);
            keys.push((key, idx));
        }
        Self { axis, exact, keys }
    }

    /// Exact bucket first, then every other key containing the query, in
    /// scan order. A substring hit is skipped when an equal record is
    /// already in the result; the exact bucket keeps its duplicates.
    fn lookup(&self, plants: &[PlantRecord], query: &str) -> Vec<usize> {
        let needle = self.axis.normalize(query);
        let mut hits: Vec<usize> = self.exact.get(&needle).cloned().unwrap_or_default();
        for (key, idx) in &self.keys {
            if !key.contains(needle.as_str()) {
                continue;
            }
            if hits.iter().any(|&h| plants[h] == plants[*idx]) {
                continue;
            }
            hits.push(*idx);
        }
        hits
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

// ---------------------------------------------------------------------------
// BotanyDatabase
// ---------------------------------------------------------------------------

/// Read-only, in-memory plant database.
///
/// Indexes are built once at construction; every query hands out clones so
/// callers can never reach the internal state mutably.
#[derive(Debug, Clone)]
pub struct BotanyDatabase {
    source: Option<PathBuf>,
    plants: Vec<PlantRecord>,
    common: NameIndex,
    scientific: NameIndex,
}

impl BotanyDatabase {
    /// Load and index the dataset at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let plants = load_plants_csv(path)?;
        let mut db = Self::from_records(plants);
        db.source = Some(path.to_path_buf());
        Ok(db)
    }

    /// Index records that were obtained elsewhere.
    pub fn from_records(plants: Vec<PlantRecord>) -> Self {
        let common = NameIndex::build(&plants, NameAxis::Common);
        let scientific = NameIndex::build(&plants, NameAxis::Scientific);
        log::debug!(
            "Indexed {} plants ({} common names, {} scientific names)",
            plants.len(),
            common.len(),
            scientific.len()
        );
        Self {
            source: None,
            plants,
            common,
            scientific,
        }
    }

    /// File the records were loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Read-only view of all records in file order.
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Copy of every record, in file order.
    pub fn all_plants(&self) -> Vec<PlantRecord> {
        self.plants.clone()
    }

    /// Diacritic- and case-insensitive lookup by common name.
    pub fn find_by_common_name(&self, query: &str) -> Vec<PlantRecord> {
        self.collect(self.find_by_common_name_indices(query))
    }

    /// Case-insensitive lookup by scientific name.
    pub fn find_by_scientific_name(&self, query: &str) -> Vec<PlantRecord> {
        self.collect(self.find_by_scientific_name_indices(query))
    }

    /// Records passing every filter of `query`, in file order.
    pub fn search(&self, query: &PlantQuery) -> Vec<PlantRecord> {
        self.collect(self.search_indices(query))
    }

    /// Positions (into [`Self::plants`]) of common-name matches.
    pub fn find_by_common_name_indices(&self, query: &str) -> Vec<usize> {
        self.common.lookup(&self.plants, query)
    }

    /// Positions (into [`Self::plants`]) of scientific-name matches.
    pub fn find_by_scientific_name_indices(&self, query: &str) -> Vec<usize> {
        self.scientific.lookup(&self.plants, query)
    }

    /// Positions (into [`Self::plants`]) of records passing `query`.
    pub fn search_indices(&self, query: &PlantQuery) -> Vec<usize> {
        if let Some(sun) = &query.sun {
            log::debug!("Sun filter {sun:?} accepted but not applied");
        }
        let predicate = query.predicate();
        self.plants
            .iter()
            .enumerate()
            .filter(|(_, plant)| predicate.matches(plant))
            .map(|(i, _)| i)
            .collect()
    }

    fn collect(&self, indices: Vec<usize>) -> Vec<PlantRecord> {
        indices
            .into_iter()
            .filter_map(|i| self.plants.get(i).cloned())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Process-wide default instance
// ---------------------------------------------------------------------------

static DEFAULT_DB: OnceLock<BotanyDatabase> = OnceLock::new();
static DEFAULT_DB_INIT: Mutex<()> = Mutex::new(());

/// Shared database built from [`BotanyConfig::from_env`] on first use.
///
/// Construction happens at most once per process, even under concurrent
/// first access. A failed construction is not cached; the next call retries.
/// The instance lives until the process exits.
pub fn default_database() -> Result<&'static BotanyDatabase> {
    if let Some(db) = DEFAULT_DB.get() {
        return Ok(db);
    }
    let _guard = DEFAULT_DB_INIT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(db) = DEFAULT_DB.get() {
        return Ok(db);
    }

    let config = BotanyConfig::from_env();
    let db = BotanyDatabase::open(&config.dataset_path)?;
    Ok(DEFAULT_DB.get_or_init(|| db))
}
