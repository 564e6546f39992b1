use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{RouteRecord, RouteTable};

/// number of route rows listed under the map.
pub const DEFAULT_TABLE_ROWS: usize = 25;

/// the shortest routes, as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// number of rows in the full routes dataset
    pub total_rows: usize,
}

impl RouteTableView {
    pub fn new(routes: &RouteTable, limit: usize) -> RouteTableView {
        let rows = shortest_routes(routes, limit)
            .into_iter()
            .map(|row| display_cells(row, routes.distance_column, routes.headers.len()))
            .collect_vec();
        RouteTableView {
            headers: routes.headers.clone(),
            rows,
            total_rows: routes.len(),
        }
    }
}

/// orders distances ascending with missing distances after every present one.
pub fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// the first `limit` routes by ascending distance. the sort is stable, so ties and
/// rows with a missing distance keep their file order.
pub fn shortest_routes(routes: &RouteTable, limit: usize) -> Vec<&RouteRecord> {
    routes
        .rows
        .iter()
        .sorted_by(|a, b| compare_distance(a.distance_km, b.distance_km))
        .take(limit)
        .collect_vec()
}

/// cell text for a row, one cell per header. short rows are padded with blanks and
/// cells past the last header are dropped. the distance cell shows the file's text
/// when it holds a number and is blank otherwise.
fn display_cells(row: &RouteRecord, distance_column: usize, width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| {
            let cell = row.fields.get(idx).map(String::as_str).unwrap_or_default();
            if idx == distance_column && row.distance_km.is_none() {
                String::new()
            } else if idx == distance_column {
                cell.trim().to_string()
            } else {
                cell.to_string()
            }
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::load_ops::read_routes_from_reader;

    #[test]
    fn test_table_sorted_with_missing_last() {
        let csv = "route_id,distance_km\na,3.5\nb,\nc,1.25\nd,oops\ne,1.25\nf,0.5\n";
        let routes = read_routes_from_reader(csv.as_bytes(), "routes.csv").unwrap();
        let table = RouteTableView::new(&routes, DEFAULT_TABLE_ROWS);
        let ids = table.rows.iter().map(|r| r[0].as_str()).collect_vec();
        assert_eq!(ids, vec!["f", "c", "e", "a", "b", "d"]);
        assert_eq!(table.rows[0][1], "0.5");
        assert_eq!(table.rows[4][1], "");
        assert_eq!(table.headers, vec!["route_id", "distance_km"]);
        assert_eq!(table.total_rows, 6);
    }

    #[test]
    fn test_table_truncated_to_limit() {
        let mut csv = String::from("route_id,distance_km\n");
        for i in 0..1000 {
            // descending distances so the shortest are at the end of the file
            csv.push_str(&format!("r{i},{}\n", 1000 - i));
        }
        let routes = read_routes_from_reader(csv.as_bytes(), "routes.csv").unwrap();
        let table = RouteTableView::new(&routes, DEFAULT_TABLE_ROWS);
        assert_eq!(table.rows.len(), 25);
        assert_eq!(table.total_rows, 1000);
        assert_eq!(table.rows[0], vec!["r999", "1"]);
        assert_eq!(table.rows[24], vec!["r975", "25"]);
        let distances = table
            .rows
            .iter()
            .map(|r| r[1].parse::<f64>().unwrap())
            .collect_vec();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_table_with_fewer_rows_than_limit() {
        let routes =
            read_routes_from_reader("distance_km\n2\n1\n".as_bytes(), "routes.csv").unwrap();
        let table = RouteTableView::new(&routes, DEFAULT_TABLE_ROWS);
        assert_eq!(table.rows, vec![vec!["1"], vec!["2"]]);
    }

    #[test]
    fn test_distance_cell_keeps_file_text() {
        let csv = "route_id,distance_km\na, 2.0 \nb,1.50\n";
        let routes = read_routes_from_reader(csv.as_bytes(), "routes.csv").unwrap();
        let table = RouteTableView::new(&routes, DEFAULT_TABLE_ROWS);
        assert_eq!(table.rows, vec![vec!["b", "1.50"], vec!["a", "2.0"]]);
    }

    #[test]
    fn test_ragged_rows_aligned_to_headers() {
        let csv = "a,b,distance_km\nx,1.0\ny,z,2.0,extra\n";
        let routes = read_routes_from_reader(csv.as_bytes(), "routes.csv").unwrap();
        let table = RouteTableView::new(&routes, DEFAULT_TABLE_ROWS);
        assert_eq!(table.rows, vec![vec!["y", "z", "2.0"], vec!["x", "1.0", ""]]);
        assert!(table.rows.iter().all(|r| r.len() == table.headers.len()));
    }
}
