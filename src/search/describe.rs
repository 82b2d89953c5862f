use itertools::Itertools;
use tracing::debug;

use crate::{
    error::Result,
    graphs::{path::Path, CityId, RoadGraph, Weight},
};

pub const NO_PATH_FOUND: &str = "No path found.";

/// Renders a path as a bulleted list of the visited cities followed by the
/// distance and time totals.
///
/// Both `None` and an empty path yield [`NO_PATH_FOUND`].
pub fn describe(graph: &RoadGraph, path: Option<&Path>, source: CityId) -> Result<String> {
    let Some(path) = path.filter(|path| !path.is_empty()) else {
        return Ok(NO_PATH_FOUND.to_string());
    };

    for edge in &path.edges {
        let city_a = graph.city(edge.city_a)?;
        let city_b = graph.city(edge.city_b)?;
        debug!("{} <--> {}", city_a.label(), city_b.label());
    }

    let cities = path
        .walk(source)?
        .into_iter()
        .map(|city| graph.city(city).map(|city| format!("• {}", city.label())))
        .collect::<Result<Vec<_>>>()?;

    let (distance, time) = path.totals();

    Ok(format!(
        "Path found:\n{}\ntotal_distance = {}\ttotal_time = {}",
        cities.iter().join("\n"),
        format_weight(distance),
        format_weight(time)
    ))
}

/// Formats a weight so integral values keep a trailing `.0`.
pub fn format_weight(weight: Weight) -> String {
    if weight.is_finite() && weight.fract() == 0.0 {
        format!("{:.1}", weight)
    } else {
        format!("{}", weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::MapError,
        graphs::{City, RoadEdge},
    };

    fn get_small_graph() -> RoadGraph {
        let cities = vec![
            City::new(0, "Birmingham".into(), "AL".into(), 671, 353),
            City::new(1, "Montgomery".into(), "AL".into(), 680, 375),
            City::new(2, "Little Rock".into(), "AR".into(), 585, 331),
            City::new(3, "Phoenix".into(), "AZ".into(), 268, 357),
            City::new(4, "Tucson".into(), "AZ".into(), 286, 380),
            City::new(5, "Anaheim".into(), "CA".into(), 175, 349),
        ];
        let edges = vec![
            RoadEdge::new(1, 3, 2845.0, 294533.0),
            RoadEdge::new(3, 5, 1670.0, 259455.0),
            RoadEdge::new(2, 5, 3895.0, 395542.0),
            RoadEdge::new(0, 2, 2895.0, 249543.0),
            RoadEdge::new(0, 4, 1845.0, 342980.0),
        ];
        RoadGraph::load(cities, edges).unwrap()
    }

    #[test]
    fn no_path() {
        let graph = get_small_graph();

        assert_eq!(describe(&graph, None, 0).unwrap(), "No path found.");
    }

    #[test]
    fn zig_zag_description() {
        let graph = get_small_graph();
        let path = Path::from_indices(&graph, &[0, 1, 2, 3, 4]).unwrap();

        let expected = "Path found:\n• Montgomery, AL\n• Phoenix, AZ\n• Anaheim, CA\n\
                        • Little Rock, AR\n• Birmingham, AL\n• Tucson, AZ\n\
                        total_distance = 13150.0\ttotal_time = 1542053.0";
        assert_eq!(describe(&graph, Some(&path), 1).unwrap(), expected);
    }

    #[test]
    fn empty_path_is_no_path() {
        let graph = get_small_graph();

        assert_eq!(describe(&graph, Some(&Path::default()), 4).unwrap(), NO_PATH_FOUND);
        let same_city = crate::search::dijkstra::find_path(
            &graph,
            4,
            4,
            crate::search::WeightSelector::Distance,
        )
        .unwrap();
        assert_eq!(same_city, Some(Path::default()));
        assert_eq!(describe(&graph, same_city.as_ref(), 4).unwrap(), NO_PATH_FOUND);
    }

    #[test]
    fn detached_path_is_malformed() {
        let graph = get_small_graph();
        let path = Path::from_indices(&graph, &[0, 3]).unwrap();

        assert!(matches!(
            describe(&graph, Some(&path), 1),
            Err(MapError::MalformedPath { position: 1, city: 3 })
        ));
    }

    #[test]
    fn weights_keep_trailing_zero() {
        assert_eq!(format_weight(103318.0), "103318.0");
        assert_eq!(format_weight(0.0), "0.0");
        assert_eq!(format_weight(12.5), "12.5");
        assert_eq!(format_weight(1e16), "10000000000000000.0");
        assert_eq!(format_weight(-42.0), "-42.0");
    }
}
