use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    graphs::{
        path::{Path, ShortestPathRequest},
        Weight,
    },
};

pub mod describe;
pub mod dijkstra;
pub mod dijkstra_data;
pub mod queue;

/// Which edge attribute a search minimizes.
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSelector {
    #[default]
    Distance,
    Time,
}

pub trait PathFinding: Send + Sync {
    /// `Ok(None)` means the two cities are not connected.
    fn shortest_path(&self, path_request: &ShortestPathRequest) -> Result<Option<Path>>;

    fn shortest_path_weight(&self, path_request: &ShortestPathRequest) -> Result<Option<Weight>>;

    fn number_of_cities(&self) -> u32;
}
