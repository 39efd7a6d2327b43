use crate::errors::GraphError;
use crate::geometry::Point;
use super::{EdgeRecord, VertexRecord};


/// Parse vertex records, one per line: `id coordinate_1 coordinate_2`
/// Blank lines are skipped so a trailing line terminator is harmless
pub fn parse_vertices(data: &str) -> Result<Vec<VertexRecord>, GraphError> {

    let mut records = Vec::new();

    for (number, line) in data.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(malformed(number + 1, format!("expected 3 fields, found {}", fields.len())));
        }

        let id = parse_id(number + 1, fields[0])?;
        let x = parse_number(number + 1, fields[1])?;
        let y = parse_number(number + 1, fields[2])?;

        records.push(VertexRecord { id, point: Point { x, y } });
    }

    Ok(records)
}

/// Parse edge records, one per line: `id v u weight` or `id v u`
/// Endpoints reference vertex ids, a missing weight is derived later
pub fn parse_edges(data: &str) -> Result<Vec<EdgeRecord>, GraphError> {

    let mut records = Vec::new();

    for (number, line) in data.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 && fields.len() != 4 {
            return Err(malformed(number + 1, format!("expected 3 or 4 fields, found {}", fields.len())));
        }

        let id = parse_id(number + 1, fields[0])?;
        let v = parse_id(number + 1, fields[1])?;
        let u = parse_id(number + 1, fields[2])?;

        let weight = if fields.len() == 4 {
            let weight = parse_number(number + 1, fields[3])?;
            if weight < 0.0 {
                return Err(malformed(number + 1, format!("negative edge weight {weight}")));
            }
            Some(weight)
        } else {
            None
        };

        records.push(EdgeRecord { id, v, u, weight });
    }

    Ok(records)
}


fn malformed(line: usize, reason: String) -> GraphError {
    GraphError::MalformedRecord { line, reason }
}

fn parse_id(line: usize, field: &str) -> Result<u64, GraphError> {
    field.parse::<u64>().map_err(|_| malformed(line, format!("invalid id token {field:?}")))
}

fn parse_number(line: usize, field: &str) -> Result<f64, GraphError> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(line, format!("invalid numeric token {field:?}"))),
    }
}
