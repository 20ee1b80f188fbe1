use std::path::Path;

use crate::error::{BotanyError, Result};

use super::model::{Measure, PlantRecord};

// ---------------------------------------------------------------------------
// Header table: localized CSV header → record field(s)
// ---------------------------------------------------------------------------

/// Record slot a recognized header is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    CommonName,
    ScientificName,
    Kind,
    Description,
    Height,
    Width,
    Companions,
    Usage,
    Ph,
    Humidity,
    Exposure,
    Foliage,
    Habit,
    Roots,
    Ecology,
    LandscapeUses,
    Fertilizer,
    BloomPeriod,
    FlowerColor,
    Fruiting,
    Toxic,
    Notes,
}

/// Exact header names of the dataset. Anything else is ignored.
pub const HEADERS: [&str; 22] = [
    "Nom commun",
    "Nom scientifique",
    "Type",
    "Description générale",
    "Hauteur cm",
    "Largeur cm",
    "Plantes compagnons",
    "Utilisation",
    "pH",
    "Humidité",
    "Exposition",
    "Feuillage",
    "Port",
    "Racines",
    "Ecologie",
    "Usages paysagers",
    "Engrais",
    "Floraison",
    "Couleur fleur",
    "Fructification",
    "Toxique",
    "Remarques",
];

const COLUMNS: [Column; 22] = [
    Column::CommonName,
    Column::ScientificName,
    Column::Kind,
    Column::Description,
    Column::Height,
    Column::Width,
    Column::Companions,
    Column::Usage,
    Column::Ph,
    Column::Humidity,
    Column::Exposure,
    Column::Foliage,
    Column::Habit,
    Column::Roots,
    Column::Ecology,
    Column::LandscapeUses,
    Column::Fertilizer,
    Column::BloomPeriod,
    Column::FlowerColor,
    Column::Fruiting,
    Column::Toxic,
    Column::Notes,
];

fn lookup_column(header: &str) -> Option<Column> {
    HEADERS
        .iter()
        .position(|h| *h == header)
        .map(|i| COLUMNS[i])
}

impl Column {
    /// Write a raw cell into the record, coercing range columns.
    fn apply(self, record: &mut PlantRecord, cell: &str) {
        let text = match self {
            Column::Height => return set_range(&mut record.height_min, &mut record.height_max, cell),
            Column::Width => return set_range(&mut record.width_min, &mut record.width_max, cell),
            Column::Ph => return set_range(&mut record.ph_min, &mut record.ph_max, cell),
            Column::CommonName => &mut record.common_name,
            Column::ScientificName => &mut record.scientific_name,
            Column::Kind => &mut record.kind,
            Column::Description => &mut record.description,
            Column::Companions => &mut record.companions,
            Column::Usage => &mut record.usage,
            Column::Humidity => &mut record.humidity,
            Column::Exposure => &mut record.exposure,
            Column::Foliage => &mut record.foliage,
            Column::Habit => &mut record.habit,
            Column::Roots => &mut record.roots,
            Column::Ecology => &mut record.ecology,
            Column::LandscapeUses => &mut record.landscape_uses,
            Column::Fertilizer => &mut record.fertilizer,
            Column::BloomPeriod => &mut record.bloom_period,
            Column::FlowerColor => &mut record.flower_color,
            Column::Fruiting => &mut record.fruiting,
            Column::Toxic => &mut record.toxic,
            Column::Notes => &mut record.notes,
        };
        *text = cell.trim().to_string();
    }
}

fn set_range(min: &mut Option<Measure>, max: &mut Option<Measure>, cell: &str) {
    (*min, *max) = parse_range(cell);
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Convert a numeric cell into a [`Measure`].
///
/// Decimal commas are accepted. Blank, unparseable or non-finite text yields
/// `None`; `inf`/`NaN` are rejected on purpose even though `f64` parses them.
pub fn coerce_numeric(value: &str) -> Option<Measure> {
    let candidate = value.replace(',', ".");
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    let number: f64 = candidate.parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some(Measure::from_f64(number))
}

/// Parse a `"<low>-<high>"` or single-number cell into `(min, max)`.
///
/// Only the first `-` splits; each side is coerced independently.
pub fn parse_range(value: &str) -> (Option<Measure>, Option<Measure>) {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return (None, None);
    }
    match cleaned.split_once('-') {
        Some((low, high)) => (coerce_numeric(low), coerce_numeric(high)),
        None => {
            let single = coerce_numeric(cleaned);
            (single, single)
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the plant dataset at `path`.
///
/// Fails only when the file cannot be read or is not UTF-8; malformed cells
/// degrade to empty/absent values.
pub fn load_plants_csv(path: &Path) -> Result<Vec<PlantRecord>> {
    let bytes = std::fs::read(path).map_err(|e| BotanyError::file_access(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| BotanyError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let plants = parse_plants(&text);
    log::info!("Loaded {} plants from {}", plants.len(), path.display());
    Ok(plants)
}

/// Parse `;`-delimited dataset text (header row first) into records.
pub fn parse_plants(text: &str) -> Vec<PlantRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<Option<Column>> = match reader.headers() {
        Ok(headers) => headers.iter().map(|h| lookup_column(h.trim())).collect(),
        Err(e) => {
            log::warn!("Unreadable header row: {e}");
            return Vec::new();
        }
    };

    let mut plants = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping CSV row {row_no}: {e}");
                continue;
            }
        };

        let mut record = PlantRecord::default();
        for (col_idx, column) in columns.iter().enumerate() {
            if let Some(column) = column {
                column.apply(&mut record, row.get(col_idx).unwrap_or(""));
            }
        }
        plants.push(record);
    }
    plants
}
