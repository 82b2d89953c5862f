use super::queue::{DijkstraQueueElement, HeapQueue, NO_EDGE};
use crate::{
    error::{MapError, Result},
    graphs::{path::Path, CityId, EdgeIndex, RoadGraph, Weight},
};

#[derive(Clone, Debug, Default)]
pub struct DijkstraEntry {
    /// Load index of the edge this city was reached through.
    pub predecessor: Option<EdgeIndex>,
    pub weight: Option<Weight>,
    pub is_expanded: bool,
}

/// Per-city search state of a single-source search.
pub struct DijkstraDataVec {
    pub queue: HeapQueue,
    pub cities: Vec<DijkstraEntry>,
}

impl DijkstraDataVec {
    pub fn new(number_of_cities: usize, source: CityId) -> DijkstraDataVec {
        let mut data = DijkstraDataVec {
            queue: HeapQueue::new(),
            cities: vec![DijkstraEntry::default(); number_of_cities],
        };

        data.cities[source as usize].weight = Some(0.0);
        data.queue
            .push(DijkstraQueueElement::new(0.0, NO_EDGE, source));

        data
    }

    pub fn search_space_size(&self) -> u32 {
        self.cities
            .iter()
            .filter(|entry| entry.is_expanded)
            .count() as u32
    }

    pub fn frontier_size(&self) -> usize {
        self.queue.len()
    }

    /// Removes the lightest unsettled city from the queue and settles it.
    pub fn pop(&mut self) -> Option<DijkstraQueueElement> {
        while let Some(state) = self.queue.pop() {
            let entry = &mut self.cities[state.city as usize];
            if !entry.is_expanded {
                entry.is_expanded = true;
                return Some(state);
            }
        }

        None
    }

    /// Relaxes `edge` from the settled city `tail` towards `head`.
    ///
    /// On equal weight the edge with the smaller load index wins, as long as
    /// `head` is not settled yet.
    pub fn update(&mut self, tail: CityId, head: CityId, edge: EdgeIndex, edge_weight: Weight) {
        let Some(tail_weight) = self.cities[tail as usize].weight else {
            return;
        };
        let alternative_weight = tail_weight + edge_weight;

        let entry = &mut self.cities[head as usize];
        if entry.is_expanded {
            return;
        }

        let improves = match (entry.weight, entry.predecessor) {
            (None, _) => true,
            (Some(current_weight), predecessor) => {
                alternative_weight < current_weight
                    || (alternative_weight == current_weight
                        && predecessor.is_some_and(|predecessor| edge < predecessor))
            }
        };

        if improves {
            entry.weight = Some(alternative_weight);
            entry.predecessor = Some(edge);
            self.queue
                .push(DijkstraQueueElement::new(alternative_weight, edge, head));
        }
    }

    pub fn weight(&self, city: CityId) -> Option<Weight> {
        self.cities.get(city as usize)?.weight
    }

    /// Follows the predecessor edges back from `target`. `None` if `target`
    /// was never reached.
    pub fn get_path(&self, graph: &RoadGraph, target: CityId) -> Result<Option<Path>> {
        if self.weight(target).is_none() {
            return Ok(None);
        }

        let mut edge_indices = Vec::new();
        let mut current = target;
        while let Some(predecessor) = self.cities[current as usize].predecessor {
            let edge = graph.edge(predecessor)?;
            current = edge.other_end(current).ok_or(MapError::MalformedPath {
                position: edge_indices.len(),
                city: current,
            })?;
            edge_indices.push(predecessor);
        }
        edge_indices.reverse();

        Path::from_indices(graph, &edge_indices).map(Some)
    }
}
