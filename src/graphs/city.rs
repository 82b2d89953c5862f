use serde::{Deserialize, Serialize};

use super::CityId;

/// A vertex of the road network together with its pixel position on the map.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub region: String,
    pub x: i32,
    pub y: i32,
}

impl City {
    pub fn new(id: CityId, name: String, region: String, x: i32, y: i32) -> City {
        City {
            id,
            name,
            region,
            x,
            y,
        }
    }

    /// `"<Name>, <Region>"`, e.g. `"Madison, WI"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.region)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn squared_distance_to(&self, x: i32, y: i32) -> i64 {
        let dx = (self.x - x) as i64;
        let dy = (self.y - y) as i64;
        dx * dx + dy * dy
    }
}
