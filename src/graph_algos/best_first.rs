use crate::collections::Heap;
use crate::errors::SearchError;
use crate::graph::{Graph, VertexId};
use super::shortest_path::reconstruct_path;
use super::{SearchEvent, SearchResult};

use log::debug;


/// Entry scheduled on the priority queue
/// A vertex is re-pushed on every improvement, so the queue can hold
/// several entries per vertex with different tentative distances
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    vertex: VertexId,
    distance: f64, // confirmed cost from the source, not the heuristic estimate
}


/// Find the cheapest path between two vertices
/// With `use_heuristic` the queue orders by cost plus the metric distance to
/// the destination (A*), otherwise by cost alone (Dijkstra's)
///
/// An unreachable destination is not an error: the result carries empty
/// edges and zero cost, and the caller can tell it apart from the
/// source == destination case by comparing the endpoints
pub fn find_shortest_path(
    graph: &Graph,
    source: VertexId,
    dest: VertexId,
    use_heuristic: bool,
) -> Result<SearchResult, SearchError> {
    find_shortest_path_observed(graph, source, dest, use_heuristic, |_| {})
}

/// Same search, with an observer receiving a SearchEvent for every edge
/// relaxation attempt and for every edge of the final path
///
/// The heuristic reuses the metric that derived the graph's edge weights,
/// which keeps it admissible. If the data source supplied explicit weights
/// from some other scale, optimality of the heuristic mode is the caller's
/// responsibility
pub fn find_shortest_path_observed<O>(
    graph: &Graph,
    source: VertexId,
    dest: VertexId,
    use_heuristic: bool,
    mut observer: O,
) -> Result<SearchResult, SearchError>
where
    O: FnMut(SearchEvent),
{

    if source >= graph.vertex_count() {
        return Err(SearchError::VertexOutOfRange(source));
    }
    let goal = graph.point(dest).ok_or(SearchError::VertexOutOfRange(dest))?;

    let metric = graph.metric();

    // Estimated remaining cost to the goal
    // Queue entries only ever hold valid indices, so the lookup cannot fail
    let heuristic = |vertex: VertexId| metric.distance(graph.point(vertex).unwrap(), goal);

    // Ordering rule: cost difference, shifted by the heuristic difference
    // when enabled - the queue then orders by g + h instead of g
    let less_than = |a: &QueueEntry, b: &QueueEntry| {
        let mut difference = a.distance - b.distance;
        if use_heuristic {
            difference += heuristic(a.vertex) - heuristic(b.vertex);
        }
        difference < 0.0
    };

    let mut queue = Heap::new(less_than);
    let mut distances = vec![f64::INFINITY; graph.vertex_count()];
    let mut previous: Vec<Option<(VertexId, f64)>> = vec![None; graph.vertex_count()];

    distances[source] = 0.0;
    queue.push(QueueEntry { vertex: source, distance: 0.0 });

    let mut vertices_visited = 0;

    while let Some(QueueEntry { vertex, distance }) = queue.pop() {

        // A better path to this vertex was found after the entry was pushed
        if distance > distances[vertex] {
            continue;
        }

        vertices_visited += 1;

        // Pop order is non-decreasing in the queue ordering, so the first
        // pop of the destination settles it
        if vertex == dest {
            break;
        }

        for &(neighbor, weight) in graph.neighbors(vertex) {

            // Every relaxation attempt is reported, including ones that
            // fail to improve - the frontier stream shows explored edges
            observer(SearchEvent::Frontier { v: vertex, u: neighbor });

            let new_distance = distances[vertex] + weight;
            if new_distance >= distances[neighbor] {
                continue;
            }

            queue.push(QueueEntry { vertex: neighbor, distance: new_distance });
            previous[neighbor] = Some((vertex, weight));
            distances[neighbor] = new_distance;
        }
    }

    let (edges, total_cost) = reconstruct_path(&previous, dest);
    for &(v, u, _) in &edges {
        observer(SearchEvent::FinalPathEdge { v, u });
    }

    debug!(
        "search {source} -> {dest} (heuristic: {use_heuristic}): cost {total_cost}, {vertices_visited} vertices visited"
    );

    Ok(SearchResult { edges, total_cost, vertices_visited })
}
