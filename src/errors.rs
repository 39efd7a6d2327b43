
#[derive(Debug)]
pub enum GraphError {
    MalformedRecord { line: usize, reason: String }, // Bad field count or token in a data record
    DuplicateVertex(u64), // Vertex id appears in more than one record
    UnknownVertex { edge: u64, vertex: u64 }, // Edge references an id with no vertex record
    KdTreeError(String),
}

#[derive(Debug)]
pub enum SearchError {
    VertexOutOfRange(usize), // Source or destination index outside the graph
}


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::KdTreeError(error.to_string())
    }
}
