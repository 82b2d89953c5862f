use std::path::Path;

use ahash::AHashMap;
use tracing::info;

use super::{read_cities_from_file, read_connections_from_file, City, CityId, EdgeIndex, RoadEdge};
use crate::error::{MapError, Result};

/// Read-only store of cities and undirected roads.
///
/// Every edge is listed once in `edges` (load order) and referenced by index
/// from the adjacency lists of both of its endpoints.
#[derive(Clone, Debug)]
pub struct RoadGraph {
    cities: Vec<City>,
    edges: Vec<RoadEdge>,
    adjacency: Vec<Vec<EdgeIndex>>,
    labels: AHashMap<String, CityId>,
}

impl RoadGraph {
    /// Builds the store from already parsed records.
    ///
    /// City records may come in any order but their ids must be exactly
    /// `0..n`. Dangling endpoints, self-loops and negative or NaN weights
    /// abort the load.
    pub fn load(mut cities: Vec<City>, edges: Vec<RoadEdge>) -> Result<RoadGraph> {
        cities.sort_by_key(|city| city.id);
        for (position, city) in cities.iter().enumerate() {
            if city.id as usize != position {
                return Err(MapError::load(
                    position + 1,
                    format!("city ids must be dense and unique, found {} at position {}", city.id, position),
                ));
            }
        }

        for (index, edge) in edges.iter().enumerate() {
            let line = index + 1;
            for endpoint in [edge.city_a, edge.city_b] {
                if endpoint as usize >= cities.len() {
                    return Err(MapError::load(
                        line,
                        format!("edge references unknown city {}", endpoint),
                    ));
                }
            }
            if edge.is_self_loop() {
                return Err(MapError::load(
                    line,
                    format!("self-loop at city {}", edge.city_a),
                ));
            }
            if !(edge.distance >= 0.0 && edge.time >= 0.0) {
                return Err(MapError::load(
                    line,
                    format!("negative or undefined weight ({}, {})", edge.distance, edge.time),
                ));
            }
        }

        let mut graph = RoadGraph {
            cities,
            edges,
            adjacency: Vec::new(),
            labels: AHashMap::new(),
        };
        graph.rebuild_index();

        info!(
            "loaded road graph with {} cities and {} edges",
            graph.number_of_cities(),
            graph.number_of_edges()
        );

        Ok(graph)
    }

    pub fn from_files(city_file: &Path, connection_file: &Path) -> Result<RoadGraph> {
        let cities = read_cities_from_file(city_file)?;
        let edges = read_connections_from_file(connection_file)?;
        RoadGraph::load(cities, edges)
    }

    fn rebuild_index(&mut self) {
        self.adjacency = vec![Vec::new(); self.cities.len()];
        for (index, edge) in self.edges.iter().enumerate() {
            self.adjacency[edge.city_a as usize].push(index as EdgeIndex);
            self.adjacency[edge.city_b as usize].push(index as EdgeIndex);
        }

        self.labels = AHashMap::with_capacity(self.cities.len());
        for city in &self.cities {
            self.labels.entry(city.label()).or_insert(city.id);
        }
    }

    pub fn number_of_cities(&self) -> u32 {
        self.cities.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn cities(&self) -> impl ExactSizeIterator<Item = &City> + '_ {
        self.cities.iter()
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = &RoadEdge> + '_ {
        self.edges.iter()
    }

    pub fn city(&self, city: CityId) -> Result<&City> {
        self.cities
            .get(city as usize)
            .ok_or(MapError::NotFound(city))
    }

    pub fn edge(&self, index: EdgeIndex) -> Result<&RoadEdge> {
        self.edges
            .get(index as usize)
            .ok_or(MapError::EdgeNotFound(index))
    }

    /// Every edge touching `city`, in load order.
    pub fn neighbors(&self, city: CityId) -> Result<impl ExactSizeIterator<Item = &RoadEdge> + '_> {
        Ok(self
            .incident_edges(city)?
            .map(|(_, edge)| edge))
    }

    /// Like [`RoadGraph::neighbors`] but also yields the load index of every
    /// edge.
    pub fn incident_edges(
        &self,
        city: CityId,
    ) -> Result<impl ExactSizeIterator<Item = (EdgeIndex, &RoadEdge)> + '_> {
        let indices = self
            .adjacency
            .get(city as usize)
            .ok_or(MapError::NotFound(city))?;

        Ok(indices
            .iter()
            .map(move |&index| (index, &self.edges[index as usize])))
    }

    /// The city closest to the pixel `(x, y)`. The first city wins ties.
    pub fn closest_city(&self, x: i32, y: i32) -> Option<CityId> {
        self.cities
            .iter()
            .min_by_key(|city| city.squared_distance_to(x, y))
            .map(|city| city.id)
    }

    /// Looks up a city by its `"<Name>, <Region>"` label. The first city
    /// wins when labels repeat.
    pub fn city_by_label(&self, label: &str) -> Option<CityId> {
        self.labels.get(label).copied()
    }

    /// First city with the given name, ignoring the region.
    pub fn city_by_name(&self, name: &str) -> Option<CityId> {
        self.cities
            .iter()
            .find(|city| city.name == name)
            .map(|city| city.id)
    }
}
