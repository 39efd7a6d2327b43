use crate::graph::VertexId;

/// Construct the traversed path by walking the predecessor chain backwards
/// from the destination
/// Returns the edges ordered from source to destination together with the
/// sum of their weights
/// An empty chain means the destination was never reached, or is the source
pub(crate) fn reconstruct_path(
    previous: &[Option<(VertexId, f64)>],
    dest: VertexId,
) -> (Vec<(VertexId, VertexId, f64)>, f64) {

    let mut edges = Vec::new();
    let mut total_cost = 0.0;

    let mut current = dest;
    while let Some((parent, weight)) = previous[current] {
        edges.push((parent, current, weight));
        total_cost += weight;
        current = parent;
    }

    // The walk runs goal to start, so the edges are in reverse order
    edges.reverse();

    (edges, total_cost)
}
