use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    dijkstra_data::DijkstraDataVec,
    queue::{DijkstraQueueElement, NO_EDGE},
    PathFinding, WeightSelector,
};
use crate::{
    error::{MapError, Result},
    graphs::{
        path::{Path, ShortestPathRequest},
        CityId, EdgeIndex, RoadGraph, Weight,
    },
};

#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a RoadGraph,
    selector: WeightSelector,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, path_request: &ShortestPathRequest) -> Result<Option<Path>> {
        let data = self.get_data(path_request.source(), path_request.target())?;
        data.get_path(self.graph, path_request.target())
    }

    fn shortest_path_weight(&self, path_request: &ShortestPathRequest) -> Result<Option<Weight>> {
        let data = self.get_data(path_request.source(), path_request.target())?;
        Ok(data.weight(path_request.target()))
    }

    fn number_of_cities(&self) -> u32 {
        self.graph.number_of_cities()
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a RoadGraph, selector: WeightSelector) -> Dijkstra<'a> {
        Dijkstra { graph, selector }
    }

    /// Runs the search from `source` until `target` is settled or the
    /// component of `source` is exhausted.
    pub fn get_data(&self, source: CityId, target: CityId) -> Result<DijkstraDataVec> {
        self.graph.city(source)?;
        self.graph.city(target)?;

        let mut data = DijkstraDataVec::new(self.graph.number_of_cities() as usize, source);

        while let Some(DijkstraQueueElement { city, .. }) = data.pop() {
            if city == target {
                break;
            }
            self.expand(&mut data, city)?;
        }

        debug!(
            "settled {} of {} cities searching {} -> {}",
            data.search_space_size(),
            self.graph.number_of_cities(),
            source,
            target
        );

        Ok(data)
    }

    pub fn single_source(&self, source: CityId) -> Result<DijkstraDataVec> {
        let mut steps = self.steps(source)?;
        for step in steps.by_ref() {
            step?;
        }
        Ok(steps.data)
    }

    /// Stepwise search from `source`. Every item is one settled city, so a
    /// caller can render the search as it progresses.
    pub fn steps(&self, source: CityId) -> Result<SearchSteps<'a>> {
        self.graph.city(source)?;

        Ok(SearchSteps {
            dijkstra: *self,
            data: DijkstraDataVec::new(self.graph.number_of_cities() as usize, source),
        })
    }

    fn expand(&self, data: &mut DijkstraDataVec, tail: CityId) -> Result<()> {
        for (index, edge) in self.graph.incident_edges(tail)? {
            if let Some(head) = edge.other_end(tail) {
                data.update(tail, head, index, edge.weight(self.selector));
            }
        }
        Ok(())
    }
}

/// One settled city of a stepwise search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchStep {
    pub city: CityId,
    pub weight: Weight,
    /// Edge the city was reached through, `None` for the source.
    pub via: Option<EdgeIndex>,
    /// Queue entries left after this step, stale ones included.
    pub frontier: usize,
}

pub struct SearchSteps<'a> {
    dijkstra: Dijkstra<'a>,
    data: DijkstraDataVec,
}

impl<'a> SearchSteps<'a> {
    /// Shortest path to `target` among the cities settled so far.
    pub fn path_to(&self, target: CityId) -> Result<Option<Path>> {
        match self.data.cities.get(target as usize) {
            Some(entry) if entry.is_expanded => self.data.get_path(self.dijkstra.graph, target),
            Some(_) => Ok(None),
            None => Err(MapError::NotFound(target)),
        }
    }
}

impl<'a> Iterator for SearchSteps<'a> {
    type Item = Result<SearchStep>;

    fn next(&mut self) -> Option<Self::Item> {
        let DijkstraQueueElement { weight, via, city } = self.data.pop()?;

        if let Err(error) = self.dijkstra.expand(&mut self.data, city) {
            return Some(Err(error));
        }

        Some(Ok(SearchStep {
            city,
            weight,
            via: (via != NO_EDGE).then_some(via),
            frontier: self.data.frontier_size(),
        }))
    }
}

/// Shortest path from `source` to `target`, minimizing the attribute chosen
/// by `selector`.
///
/// Returns `Ok(None)` when the cities are not connected and an empty path
/// when `source == target`. Unknown ids fail with [`MapError::NotFound`].
pub fn find_path(
    graph: &RoadGraph,
    source: CityId,
    target: CityId,
    selector: WeightSelector,
) -> Result<Option<Path>> {
    Dijkstra::new(graph, selector).shortest_path(&ShortestPathRequest::new(source, target))
}

/// Answers independent requests in parallel over the shared graph. Results
/// keep the order of `requests`.
pub fn shortest_paths(
    graph: &RoadGraph,
    requests: &[ShortestPathRequest],
    selector: WeightSelector,
) -> Vec<Result<Option<Path>>> {
    let dijkstra = Dijkstra::new(graph, selector);
    requests
        .par_iter()
        .map(|request| dijkstra.shortest_path(request))
        .collect()
}
