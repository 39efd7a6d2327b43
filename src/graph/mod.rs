mod loader;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::{DistanceMetric, Point};

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use log::debug;


/// Dense vertex index, assigned by record order
pub type VertexId = usize;


/// Undirected weighted edge between two dense vertex indices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub v: VertexId,
    pub u: VertexId,
    pub weight: f64,
}

/// Parsed vertex record - raw id plus coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct VertexRecord {
    pub id: u64,
    pub point: Point,
}

/// Parsed edge record - endpoints by raw vertex id
/// A missing weight is derived from the graph metric at assembly
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub id: u64,
    pub v: u64,
    pub u: u64,
    pub weight: Option<f64>,
}


/// Undirected weighted graph embedded in a 2D coordinate space
/// Immutable once assembled - searches only ever borrow it, so independent
/// searches may run concurrently over a shared reference
pub struct Graph {
    vertices: FxIndexMap<u64, Point>, // insertion order is the dense VertexId
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(VertexId, f64)>>,
    tree: KdTree<f64, VertexId, [f64; 2]>,
    metric: DistanceMetric,
}

impl Graph {

    /// Parse the two token-delimited datasets and assemble the graph
    /// Vertex records are `id coordinate_1 coordinate_2`, edge records are
    /// `id v u weight` or `id v u` with the weight derived from `metric`
    pub fn from_text(vertices: &str, edges: &str, metric: DistanceMetric) -> Result<Self, GraphError> {
        let vertex_records = loader::parse_vertices(vertices)?;
        let edge_records = loader::parse_edges(edges)?;

        Self::from_records(vertex_records, edge_records, metric)
    }

    /// Assemble a graph from parsed records
    /// Vertex record order assigns the dense indices 0..N-1
    pub fn from_records(
        vertices: Vec<VertexRecord>,
        edges: Vec<EdgeRecord>,
        metric: DistanceMetric,
    ) -> Result<Self, GraphError> {

        let mut vertex_map: FxIndexMap<u64, Point> = FxIndexMap::default();
        let mut tree = KdTree::new(2);

        for record in vertices {
            let coordinates = [record.point.x, record.point.y];

            let (index, previous) = vertex_map.insert_full(record.id, record.point);
            if previous.is_some() {
                return Err(GraphError::DuplicateVertex(record.id));
            }

            tree.add(coordinates, index)?;
        }

        // Resolve edge endpoints through the id map and derive missing weights
        let mut edge_list: Vec<Edge> = Vec::with_capacity(edges.len());
        for record in edges {
            let v = vertex_map.get_index_of(&record.v).ok_or(GraphError::UnknownVertex {
                edge: record.id,
                vertex: record.v,
            })?;
            let u = vertex_map.get_index_of(&record.u).ok_or(GraphError::UnknownVertex {
                edge: record.id,
                vertex: record.u,
            })?;

            let weight = match record.weight {
                Some(weight) => weight,
                None => {
                    let (_, point_v) = vertex_map.get_index(v).unwrap(); // index came from this map
                    let (_, point_u) = vertex_map.get_index(u).unwrap();
                    metric.distance(point_v, point_u)
                }
            };

            edge_list.push(Edge { v, u, weight });
        }

        // The graph is undirected, so every edge appears once per direction
        let mut adjacency: Vec<Vec<(VertexId, f64)>> = vec![Vec::new(); vertex_map.len()];
        for edge in &edge_list {
            adjacency[edge.v].push((edge.u, edge.weight));
            adjacency[edge.u].push((edge.v, edge.weight));
        }

        debug!("assembled graph: {} vertices, {} edges", vertex_map.len(), edge_list.len());

        Ok(Self {
            vertices: vertex_map,
            edges: edge_list,
            adjacency,
            tree,
            metric,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The metric that derived this graph's edge weights
    /// The search heuristic reads it back so both stay consistent
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Coordinate of a vertex, None if the index is out of range
    pub fn point(&self, vertex: VertexId) -> Option<&Point> {
        self.vertices.get_index(vertex).map(|(_, point)| point)
    }

    /// Neighbors of a vertex as (neighbor, edge weight) pairs
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, f64)] {
        self.adjacency.get(vertex).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Snap an arbitrary coordinate to the closest vertex
    /// Returns None only when the graph has no vertices
    pub fn nearest_vertex(&self, point: &Point) -> Result<Option<VertexId>, GraphError> {
        if self.vertices.is_empty() {
            return Ok(None);
        }

        let found = self.tree.nearest(&[point.x, point.y], 1, &squared_euclidean)?;
        Ok(found.first().map(|&(_, &index)| index))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(id: u64, x: f64, y: f64) -> VertexRecord {
        VertexRecord { id, point: Point { x, y } }
    }

    fn edge(id: u64, v: u64, u: u64, weight: Option<f64>) -> EdgeRecord {
        EdgeRecord { id, v, u, weight }
    }

    #[test]
    fn test_assembly_with_explicit_weights() {
        let graph = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(1, 0.0, 3.0), vertex(2, 4.0, 0.0)],
            vec![edge(0, 0, 1, Some(3.0)), edge(1, 0, 2, Some(4.0))],
            DistanceMetric::Planar,
        ).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.point(1), Some(&Point { x: 0.0, y: 3.0 }));
        assert_eq!(graph.point(3), None);
    }

    #[test]
    fn test_adjacency_contains_each_edge_twice() {
        let graph = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(1, 0.0, 3.0), vertex(2, 4.0, 0.0)],
            vec![edge(0, 0, 1, Some(3.0)), edge(1, 0, 2, Some(4.0))],
            DistanceMetric::Planar,
        ).unwrap();

        assert_eq!(graph.neighbors(0), &[(1, 3.0), (2, 4.0)]);
        assert_eq!(graph.neighbors(1), &[(0, 3.0)]);
        assert_eq!(graph.neighbors(2), &[(0, 4.0)]);
    }

    #[test]
    fn test_missing_weights_derived_from_metric() {
        let graph = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(1, 3.0, 4.0)],
            vec![edge(0, 0, 1, None)],
            DistanceMetric::Planar,
        ).unwrap();

        assert_eq!(graph.edges()[0].weight, 5.0);
        assert_eq!(graph.neighbors(1), &[(0, 5.0)]);
    }

    #[test]
    fn test_duplicate_vertex_id_rejected() {
        let result = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(0, 1.0, 1.0)],
            vec![],
            DistanceMetric::Planar,
        );

        assert!(matches!(result, Err(GraphError::DuplicateVertex(0))));
    }

    #[test]
    fn test_edge_with_unknown_endpoint_rejected() {
        let result = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(1, 1.0, 1.0)],
            vec![edge(5, 0, 9, Some(1.0))],
            DistanceMetric::Planar,
        );

        assert!(matches!(result, Err(GraphError::UnknownVertex { edge: 5, vertex: 9 })));
    }

    #[test]
    fn test_from_text_with_derived_haversine_weights() {
        let vertices = "0 42.28 -124.61\n1 32.28 -113.79\n";
        let edges = "0 0 1\n";

        let graph = Graph::from_text(vertices, edges, DistanceMetric::Haversine).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        let expected = DistanceMetric::Haversine.distance(
            graph.point(0).unwrap(),
            graph.point(1).unwrap(),
        );
        assert_eq!(graph.edges()[0].weight, expected);
        assert!(expected > 1300.0 && expected < 1600.0);
    }

    #[test]
    fn test_from_text_malformed_record() {
        let result = Graph::from_text("0 1.0 2.0\n1 oops 4.0\n", "", DistanceMetric::Planar);
        assert!(matches!(result, Err(GraphError::MalformedRecord { line: 2, .. })));
    }

    #[test]
    fn test_nearest_vertex() {
        let graph = Graph::from_records(
            vec![vertex(0, 0.0, 0.0), vertex(1, 10.0, 0.0), vertex(2, 0.0, 10.0)],
            vec![],
            DistanceMetric::Planar,
        ).unwrap();

        let probe = Point { x: 8.5, y: 1.0 };
        assert_eq!(graph.nearest_vertex(&probe).unwrap(), Some(1));

        let origin = Point { x: 0.4, y: -0.2 };
        assert_eq!(graph.nearest_vertex(&origin).unwrap(), Some(0));
    }

    #[test]
    fn test_nearest_vertex_on_empty_graph() {
        let graph = Graph::from_records(vec![], vec![], DistanceMetric::Planar).unwrap();
        assert_eq!(graph.nearest_vertex(&Point { x: 0.0, y: 0.0 }).unwrap(), None);
    }
}
