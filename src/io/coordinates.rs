//! Whitespace-separated coordinate files.
//!
//! One city per line: `id x y`. Header and footer lines of TSPLIB-style
//! files (`NAME: ...`, `NODE_COORD_SECTION`, `EOF`) have a non-numeric
//! first token and are skipped, as is any line that does not carry exactly
//! two finite coordinates.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::TspError;
use crate::models::City;

/// Parses cities from a reader.
///
/// Cities keep their file order. A repeated id overwrites the earlier
/// coordinates but keeps the earlier position.
///
/// # Errors
///
/// Only I/O failures; malformed lines are skipped.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_coordinates;
///
/// let text = "NAME: demo\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 4.0\nEOF\n";
/// let cities = parse_coordinates(text.as_bytes()).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].id(), 2);
/// ```
pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<Vec<City>, TspError> {
    let mut cities: Vec<City> = Vec::new();
    let mut positions: HashMap<usize, usize> = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(id_field) = fields.next() else {
            continue;
        };
        if !id_field.bytes().all(|b| b.is_ascii_digit()) {
            debug!(line = line_no + 1, "skipping non-city line");
            continue;
        }
        let Ok(id) = id_field.parse::<usize>() else {
            warn!(line = line_no + 1, id = id_field, "city id out of range, skipping");
            continue;
        };

        let coords: Vec<&str> = fields.collect();
        let parsed = match coords.as_slice() {
            [x, y] => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
            _ => None,
        };
        let Some((x, y)) = parsed.filter(|(x, y)| x.is_finite() && y.is_finite()) else {
            warn!(line = line_no + 1, "malformed coordinates, skipping");
            continue;
        };

        let city = City::new(id, x, y);
        match positions.get(&id) {
            Some(&pos) => cities[pos] = city,
            None => {
                positions.insert(id, cities.len());
                cities.push(city);
            }
        }
    }

    debug!(cities = cities.len(), "coordinates parsed");
    Ok(cities)
}

/// Reads cities from a coordinate file.
pub fn read_coordinates(path: impl AsRef<Path>) -> Result<Vec<City>, TspError> {
    let file = File::open(path)?;
    parse_coordinates(BufReader::new(file))
}
