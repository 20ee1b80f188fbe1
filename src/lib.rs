//! Mycelia AI: knowledge-management scaffold.
//!
//! The working part is [`botany`], an in-memory plant lookup service built
//! from a semicolon-delimited CSV. [`components`] holds the platform sketches
//! (registry, ingestion pipeline, knowledge graph) that will wire it up.

pub mod botany;
pub mod components;
pub mod config;
pub mod error;

pub use botany::{default_database, BotanyDatabase, Measure, PhFilter, PlantQuery, PlantRecord};
pub use components::{ComponentRegistry, DataIngestionPipeline, KnowledgeGraph};
pub use config::BotanyConfig;
pub use error::{BotanyError, Result};
