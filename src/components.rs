//! Platform component sketches.
//!
//! These are plain data holders for the future orchestration layer. They
//! carry no graph or pipeline semantics beyond insert/describe.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::botany::BotanyDatabase;

/// Coordinates the acquisition of external data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataIngestionPipeline {
    pub sources: Vec<String>,
}

impl DataIngestionPipeline {
    /// Register a source; already-known sources are ignored.
    pub fn register_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }
}

/// Entity store keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub nodes: BTreeMap<String, BTreeMap<String, String>>,
}

impl KnowledgeGraph {
    /// Insert a node, replacing any previous metadata under `identifier`.
    pub fn upsert_node(&mut self, identifier: impl Into<String>, metadata: BTreeMap<String, String>) {
        self.nodes.insert(identifier.into(), metadata);
    }
}

/// Holds the system components for dependency wiring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRegistry {
    pub ingestion_pipeline: DataIngestionPipeline,
    pub knowledge_graph: KnowledgeGraph,
}

impl ComponentRegistry {
    /// One-line status per component.
    pub fn describe(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                "ingestion_pipeline".to_string(),
                format!("{} sources registered", self.ingestion_pipeline.sources.len()),
            ),
            (
                "knowledge_graph".to_string(),
                format!("{} nodes tracked", self.knowledge_graph.nodes.len()),
            ),
        ])
    }

    /// Register a botany dataset and track one node per named species.
    pub fn ingest_botany(&mut self, source: &Path, db: &BotanyDatabase) {
        self.ingestion_pipeline
            .register_source(source.display().to_string());

        for plant in db.plants() {
            if plant.scientific_name.is_empty() {
                continue;
            }
            let metadata = BTreeMap::from([
                ("common_name".to_string(), plant.common_name.clone()),
                ("type".to_string(), plant.kind.clone()),
                ("exposure".to_string(), plant.exposure.clone()),
            ]);
            self.knowledge_graph
                .upsert_node(plant.scientific_name.clone(), metadata);
        }
        log::debug!(
            "Registry now tracks {} nodes",
            self.knowledge_graph.nodes.len()
        );
    }
}
