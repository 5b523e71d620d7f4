// src/world/src/lib.rs
//! The overworld: a fixed, directed graph of named locations plus the table
//! deciding which monster turns up where.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

mod data;
pub mod encounter;

pub use encounter::{EncounterGenerator, EncounterTable};

/// Name of the default safe hub.
pub const DEFAULT_HUB: &str = "Town";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// Outgoing edges in authored order. May name places that do not exist.
    pub connections: Vec<String>,
}

impl Location {
    pub fn new(name: &str, description: &str, connections: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("location `{0}` is defined twice")]
    DuplicateLocation(String),
    #[error("location name must not be empty")]
    EmptyName,
    #[error("safe hub `{0}` is not a location")]
    MissingHub(String),
    #[error("encounter table names `{0}`, which is not in the bestiary")]
    UnknownEnemy(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TravelError {
    #[error("you are nowhere: `{0}` is not a location")]
    UnknownOrigin(String),
    #[error("{to} cannot be reached from {from}")]
    NotAdjacent { from: String, to: String },
    #[error("the road to `{0}` leads nowhere")]
    UnknownLocation(String),
}

/// Structural problems found by [`WorldGraph::audit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// An edge whose target is not a defined location.
    Dangling { from: String, to: String },
    /// An edge with no authored edge back.
    OneWay { from: String, to: String },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::Dangling { from, to } => write!(f, "{from} -> {to}: target undefined"),
            GraphIssue::OneWay { from, to } => write!(f, "{from} -> {to}: no way back"),
        }
    }
}

/// Immutable location graph.
///
/// Edges are directed and used exactly as authored; asymmetries are reported
/// by [`WorldGraph::audit`] and never patched up.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    safe_hub: String,
}

impl WorldGraph {
    pub fn new(locations: impl IntoIterator<Item = Location>, safe_hub: &str) -> Result<Self, WorldError> {
        let mut graph = Self {
            locations: Vec::new(),
            index: HashMap::new(),
            safe_hub: safe_hub.to_string(),
        };
        for location in locations {
            if location.name.trim().is_empty() {
                return Err(WorldError::EmptyName);
            }
            if graph.index.contains_key(&location.name) {
                return Err(WorldError::DuplicateLocation(location.name));
            }
            graph.index.insert(location.name.clone(), graph.locations.len());
            graph.locations.push(location);
        }
        if !graph.contains(safe_hub) {
            return Err(WorldError::MissingHub(safe_hub.to_string()));
        }

        for issue in graph.audit() {
            warn!(%issue, "world graph");
        }
        debug!(locations = graph.locations.len(), hub = safe_hub, "world graph built");
        Ok(graph)
    }

    /// The authored world with the default hub.
    pub fn standard() -> Self {
        Self::authored(DEFAULT_HUB)
    }

    /// The authored world, falling back to the default hub when `safe_hub`
    /// is not one of its locations.
    pub fn with_hub(safe_hub: &str) -> Self {
        if data::LOCATIONS.iter().any(|(name, _, _)| *name == safe_hub) {
            Self::authored(safe_hub)
        } else {
            warn!(hub = safe_hub, fallback = DEFAULT_HUB, "unknown safe hub");
            Self::authored(DEFAULT_HUB)
        }
    }

    fn authored(safe_hub: &str) -> Self {
        let mut graph = Self {
            locations: Vec::with_capacity(data::LOCATIONS.len()),
            index: HashMap::with_capacity(data::LOCATIONS.len()),
            safe_hub: safe_hub.to_string(),
        };
        for (name, description, connections) in data::LOCATIONS {
            graph.index.insert(name.to_string(), graph.locations.len());
            graph.locations.push(Location::new(name, description, connections));
        }
        for issue in graph.audit() {
            warn!(%issue, "world graph");
        }
        graph
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&i| &self.locations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Authored outgoing edges; empty for an unknown location.
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.get(name).map(|l| l.connections.as_slice()).unwrap_or_default()
    }

    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    pub fn is_safe(&self, name: &str) -> bool {
        name == self.safe_hub
    }

    pub fn safe_hub(&self) -> &str {
        &self.safe_hub
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Validate a move along one authored edge.
    pub fn route(&self, from: &str, to: &str) -> Result<&Location, TravelError> {
        let origin = self
            .get(from)
            .ok_or_else(|| TravelError::UnknownOrigin(from.to_string()))?;
        if !origin.connections.iter().any(|c| c == to) {
            return Err(TravelError::NotAdjacent {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.get(to)
            .ok_or_else(|| TravelError::UnknownLocation(to.to_string()))
    }

    /// Dangling and one-way edges, in authored order.
    pub fn audit(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        for location in &self.locations {
            for target in &location.connections {
                let from = location.name.clone();
                let to = target.clone();
                if !self.contains(target) {
                    issues.push(GraphIssue::Dangling { from, to });
                } else if !self.is_adjacent(target, &location.name) {
                    issues.push(GraphIssue::OneWay { from, to });
                }
            }
        }
        issues
    }
}
