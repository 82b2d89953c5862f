use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{CityId, EdgeIndex, RoadEdge, RoadGraph, Weight};
use crate::{
    error::{MapError, Result},
    search::WeightSelector,
};

/// Represents a request for finding a shortest path between two cities.
///
/// `source == target` is a legal request, answered with a path of zero edges.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortestPathRequest {
    source: CityId,
    target: CityId,
}

impl ShortestPathRequest {
    pub fn new(source: CityId, target: CityId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    pub fn source(&self) -> CityId {
        self.source
    }

    pub fn target(&self) -> CityId {
        self.target
    }
}

/// A request together with the answer a correct search gives for it.
///
/// `weight` and `edge_indices` are `None` if the cities are not connected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub selector: WeightSelector,
    pub weight: Option<Weight>,
    pub edge_indices: Option<Vec<EdgeIndex>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestTimingResult {
    pub test_case: ShortestPathTestCase,
    pub timing_in_seconds: f64,
}

/// An ordered sequence of roads leading from a source to a target city.
///
/// Edges keep their stored orientation, so consecutive edges share an
/// endpoint but not necessarily `city_b` of one and `city_a` of the next.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Path {
    pub edge_indices: Vec<EdgeIndex>,
    pub edges: Vec<RoadEdge>,
}

impl Path {
    /// Collects the edges at `indices` of the graph's edge list.
    pub fn from_indices(graph: &RoadGraph, indices: &[EdgeIndex]) -> Result<Path> {
        let edges = indices
            .iter()
            .map(|&index| graph.edge(index).cloned())
            .collect::<Result<Vec<_>>>()?;

        Ok(Path {
            edge_indices: indices.to_vec(),
            edges,
        })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Visits the path starting at `source` and returns all `len() + 1`
    /// cities in order. Each edge is entered from whichever endpoint matches
    /// the current city.
    pub fn walk(&self, source: CityId) -> Result<Vec<CityId>> {
        let mut cities = Vec::with_capacity(self.edges.len() + 1);
        cities.push(source);

        let mut current = source;
        for (position, edge) in self.edges.iter().enumerate() {
            current = edge
                .other_end(current)
                .ok_or(MapError::MalformedPath {
                    position,
                    city: current,
                })?;
            cities.push(current);
        }

        Ok(cities)
    }

    /// Sum of distances and sum of travel times.
    pub fn totals(&self) -> (Weight, Weight) {
        self.edges.iter().fold((0.0, 0.0), |(distance, time), edge| {
            (distance + edge.distance, time + edge.time)
        })
    }

    pub fn weight(&self, selector: WeightSelector) -> Weight {
        self.edges.iter().map(|edge| edge.weight(selector)).sum()
    }

    /// Pixel line segments of the walk, in order, for drawing an overlay.
    pub fn segments(&self, graph: &RoadGraph, source: CityId) -> Result<Vec<((i32, i32), (i32, i32))>> {
        let positions = self
            .walk(source)?
            .into_iter()
            .map(|city| graph.city(city).map(|city| city.position()))
            .collect::<Result<Vec<_>>>()?;

        Ok(positions.into_iter().tuple_windows().collect())
    }
}
