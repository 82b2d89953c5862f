use std::path::PathBuf;

use city_paths::{
    graphs::{
        path::{Path, ShortestPathRequest},
        CityId, RoadGraph, Weight,
    },
    search::{
        describe::describe,
        dijkstra::{find_path, shortest_paths},
        WeightSelector,
    },
    MapError,
};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn get_test_graph() -> RoadGraph {
    RoadGraph::from_files(&data_file("cities.txt"), &data_file("connections.txt")).unwrap()
}

fn city(graph: &RoadGraph, label: &str) -> CityId {
    graph.city_by_label(label).unwrap()
}

fn expected_path(graph: &RoadGraph, edge_nums: &[u32]) -> Path {
    Path::from_indices(graph, edge_nums).unwrap()
}

/// All pairs shortest path weights by Floyd-Warshall.
fn all_pairs_weights(graph: &RoadGraph, selector: WeightSelector) -> Vec<Vec<Weight>> {
    let n = graph.number_of_cities() as usize;
    let mut weights = vec![vec![Weight::INFINITY; n]; n];
    for (city, row) in weights.iter_mut().enumerate() {
        row[city] = 0.0;
    }
    for edge in graph.edges() {
        let (a, b) = (edge.city_a as usize, edge.city_b as usize);
        let weight = edge.weight(selector);
        weights[a][b] = weights[a][b].min(weight);
        weights[b][a] = weights[b][a].min(weight);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let alternative = weights[i][k] + weights[k][j];
                if alternative < weights[i][j] {
                    weights[i][j] = alternative;
                }
            }
        }
    }
    weights
}

#[test]
fn load_edges() {
    let graph = get_test_graph();

    assert_eq!(graph.number_of_cities(), 12);
    assert_eq!(graph.number_of_edges(), 15);
}

#[test]
fn print_no_path() {
    let graph = get_test_graph();

    assert_eq!(describe(&graph, None, 0).unwrap(), "No path found.");
}

#[test]
fn east_west_path_description() {
    let graph = get_test_graph();
    let path = expected_path(&graph, &[0, 1, 2, 3]);

    let expected = "Path found:\n• Madison, WI\n• Minneapolis, MN\n• Bismarck, ND\n• Helena, MT\n\
                    • Seattle, WA\ntotal_distance = 103318.0\ttotal_time = 3053590.0";
    let result = describe(&graph, Some(&path), city(&graph, "Madison, WI")).unwrap();
    assert_eq!(expected, result);
}

#[test]
fn west_east_path_description() {
    let graph = get_test_graph();
    let path = expected_path(&graph, &[3, 2, 1, 0]);

    let expected = "Path found:\n• Seattle, WA\n• Helena, MT\n• Bismarck, ND\n• Minneapolis, MN\n\
                    • Madison, WI\ntotal_distance = 103318.0\ttotal_time = 3053590.0";
    let result = describe(&graph, Some(&path), city(&graph, "Seattle, WA")).unwrap();
    assert_eq!(expected, result);
}

#[test]
fn find_very_short_path() {
    let graph = get_test_graph();

    let result = find_path(
        &graph,
        city(&graph, "Bismarck, ND"),
        city(&graph, "Omaha, NE"),
        WeightSelector::Distance,
    )
    .unwrap();
    assert_eq!(result, Some(expected_path(&graph, &[4, 5])));
}

#[test]
fn find_long_path() {
    let graph = get_test_graph();
    let madison = city(&graph, "Madison, WI");
    let seattle = city(&graph, "Seattle, WA");

    for selector in [WeightSelector::Distance, WeightSelector::Time] {
        let result = find_path(&graph, madison, seattle, selector).unwrap();
        assert_eq!(result, Some(expected_path(&graph, &[0, 1, 2, 3])));
    }
}

#[test]
fn selector_changes_route() {
    let graph = get_test_graph();
    let portland = city(&graph, "Portland, OR");
    let helena = city(&graph, "Helena, MT");

    let by_distance = find_path(&graph, portland, helena, WeightSelector::Distance).unwrap();
    let by_time = find_path(&graph, portland, helena, WeightSelector::Time).unwrap();

    assert_eq!(by_distance, Some(expected_path(&graph, &[10, 3])));
    assert_eq!(by_time, Some(expected_path(&graph, &[11, 12])));
}

#[test]
fn equal_weight_routes_prefer_earlier_edges() {
    let graph = get_test_graph();

    // Madison -> Des Moines is 17000 both directly (edge 14) and via Chicago
    // (edges 8 and 9).
    let result = find_path(
        &graph,
        city(&graph, "Madison, WI"),
        city(&graph, "Omaha, NE"),
        WeightSelector::Distance,
    )
    .unwrap()
    .unwrap();
    assert_eq!(result.edge_indices, vec![8, 9, 7]);
}

#[test]
fn disconnected_and_unknown_cities() {
    let graph = get_test_graph();
    let honolulu = city(&graph, "Honolulu, HI");

    assert_eq!(
        find_path(&graph, 0, honolulu, WeightSelector::Distance).unwrap(),
        None
    );
    assert!(matches!(
        find_path(&graph, 0, 12, WeightSelector::Distance),
        Err(MapError::NotFound(12))
    ));
}

#[test]
fn paths_are_optimal_walkable_and_deterministic() {
    let graph = get_test_graph();

    for selector in [WeightSelector::Distance, WeightSelector::Time] {
        let weights = all_pairs_weights(&graph, selector);
        let requests: Vec<_> = (0..graph.number_of_cities())
            .flat_map(|source| {
                (0..graph.number_of_cities()).map(move |target| ShortestPathRequest::new(source, target))
            })
            .collect();
        let batch = shortest_paths(&graph, &requests, selector);

        for (request, result) in requests.iter().zip(batch) {
            let (source, target) = (request.source(), request.target());
            let expected = weights[source as usize][target as usize];
            let path = result.unwrap();

            assert_eq!(path, find_path(&graph, source, target, selector).unwrap());

            match path {
                None => assert!(expected.is_infinite()),
                Some(path) => {
                    assert_eq!(path.weight(selector), expected);

                    let cities = path.walk(source).unwrap();
                    assert_eq!(cities.len(), path.len() + 1);
                    assert_eq!(cities.first(), Some(&source));
                    assert_eq!(cities.last(), Some(&target));
                }
            }
        }
    }
}

#[test]
fn segments_follow_the_walk() {
    let graph = get_test_graph();
    let path = expected_path(&graph, &[4, 5]);

    let segments = path.segments(&graph, city(&graph, "Bismarck, ND")).unwrap();
    assert_eq!(segments, vec![((400, 80), (400, 140)), ((400, 140), (450, 200))]);
}
