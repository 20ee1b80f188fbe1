/// Botany layer: record types, CSV loading, indexing and querying.
///
/// Architecture:
/// ```text
///  plants_massif.csv  (';'-delimited, French headers)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header table + numeric/range coercion → Vec<PlantRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ BotanyDatabase │  records + common/scientific name indexes
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  pH overlap / humidity substring → matching records
///   └──────────┘
/// ```

pub mod database;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;

pub use database::{default_database, BotanyDatabase};
pub use filter::{PhFilter, PlantQuery};
pub use loader::load_plants_csv;
pub use model::{Measure, PlantRecord};
