use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::info;

use crate::error::{MapError, Result};

pub mod city;
pub mod edge;
pub mod path;
pub mod road_graph;

pub use city::City;
pub use edge::RoadEdge;
pub use road_graph::RoadGraph;

pub type CityId = u32;
pub type EdgeIndex = u32;
pub type Weight = f64;

/// Reads tab-delimited city records: `id, name, region, x, y`.
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<City>> {
    let mut cities = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let mut values = line.split('\t').map(str::trim);

        let id: CityId = parse_field(&mut values, "id", line_number)?;
        let name = next_field(&mut values, "name", line_number)?.to_string();
        let region = next_field(&mut values, "region", line_number)?.to_string();
        let x: i32 = parse_field(&mut values, "x", line_number)?;
        let y: i32 = parse_field(&mut values, "y", line_number)?;

        cities.push(City::new(id, name, region, x, y));
    }

    Ok(cities)
}

/// Reads tab-delimited connection records: `edge_id, city_a, city_b,
/// distance, time`. The leading edge id is not used.
pub fn read_connections<R: BufRead>(reader: R) -> Result<Vec<RoadEdge>> {
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let mut values = line.split('\t').map(str::trim);

        next_field(&mut values, "edge id", line_number)?;
        let city_a: CityId = parse_field(&mut values, "city a", line_number)?;
        let city_b: CityId = parse_field(&mut values, "city b", line_number)?;
        let distance: Weight = parse_field(&mut values, "distance", line_number)?;
        let time: Weight = parse_field(&mut values, "time", line_number)?;

        edges.push(RoadEdge::new(city_a, city_b, distance, time));
    }

    Ok(edges)
}

pub fn read_cities_from_file(path: &Path) -> Result<Vec<City>> {
    let reader = BufReader::new(File::open(path)?);
    let cities = read_cities(reader)?;
    info!("read {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

pub fn read_connections_from_file(path: &Path) -> Result<Vec<RoadEdge>> {
    let reader = BufReader::new(File::open(path)?);
    let edges = read_connections(reader)?;
    info!("read {} connections from {}", edges.len(), path.display());
    Ok(edges)
}

fn next_field<'a>(
    values: &mut impl Iterator<Item = &'a str>,
    field: &str,
    line: usize,
) -> Result<&'a str> {
    values
        .next()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MapError::load(line, format!("no {} found", field)))
}

fn parse_field<'a, T: FromStr>(
    values: &mut impl Iterator<Item = &'a str>,
    field: &str,
    line: usize,
) -> Result<T> {
    let value = next_field(values, field, line)?;
    value
        .parse()
        .map_err(|_| MapError::load(line, format!("unable to parse {} '{}'", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tab_delimited_cities() {
        let data = "0\tBirmingham\tAL\t671\t353\n1\tMontgomery\tAL\t680\t375\r\n\n";
        let cities = read_cities(data.as_bytes()).unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].id, 1);
        assert_eq!(cities[1].name, "Montgomery");
        assert_eq!(cities[1].region, "AL");
        assert_eq!((cities[1].x, cities[1].y), (680, 375));
    }

    #[test]
    fn reads_connections_and_ignores_edge_id() {
        let data = "17\t1\t3\t2845\t294533\n18\t3\t5\t1670.5\t259455\n";
        let edges = read_connections(data.as_bytes()).unwrap();

        assert_eq!(edges, vec![
            RoadEdge::new(1, 3, 2845.0, 294533.0),
            RoadEdge::new(3, 5, 1670.5, 259455.0),
        ]);
    }

    #[test]
    fn reports_line_of_malformed_record() {
        let data = "0\t1\t2\t10\t20\n1\t1\tx\t10\t20\n";
        match read_connections(data.as_bytes()) {
            Err(MapError::Load { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("city b"));
            }
            other => panic!("expected load error, got {:?}", other),
        }
    }

    #[test]
    fn reports_missing_field() {
        let data = "0\tBirmingham\tAL\t671\n";
        assert!(matches!(
            read_cities(data.as_bytes()),
            Err(MapError::Load { line: 1, .. })
        ));
    }
}
