use serde::{Deserialize, Serialize};

use super::{CityId, Weight};
use crate::search::WeightSelector;

/// An undirected road between two cities.
///
/// The endpoints keep the order they were loaded in. Traversal may go either
/// way, but equality always compares the stored orientation.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoadEdge {
    pub city_a: CityId,
    pub city_b: CityId,
    /// Meters.
    pub distance: Weight,
    /// Seconds.
    pub time: Weight,
}

impl RoadEdge {
    pub fn new(city_a: CityId, city_b: CityId, distance: Weight, time: Weight) -> RoadEdge {
        RoadEdge {
            city_a,
            city_b,
            distance,
            time,
        }
    }

    /// The endpoint opposite to `city`, or `None` if the edge does not touch
    /// `city` at all.
    pub fn other_end(&self, city: CityId) -> Option<CityId> {
        if self.city_a == city {
            Some(self.city_b)
        } else if self.city_b == city {
            Some(self.city_a)
        } else {
            None
        }
    }

    pub fn weight(&self, selector: WeightSelector) -> Weight {
        match selector {
            WeightSelector::Distance => self.distance,
            WeightSelector::Time => self.time,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.city_a == self.city_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_end_works_in_both_directions() {
        let edge = RoadEdge::new(3, 7, 10.0, 20.0);

        assert_eq!(edge.other_end(3), Some(7));
        assert_eq!(edge.other_end(7), Some(3));
        assert_eq!(edge.other_end(5), None);
    }

    #[test]
    fn weight_follows_selector() {
        let edge = RoadEdge::new(0, 1, 10.0, 20.0);

        assert_eq!(edge.weight(WeightSelector::Distance), 10.0);
        assert_eq!(edge.weight(WeightSelector::Time), 20.0);
    }
}
