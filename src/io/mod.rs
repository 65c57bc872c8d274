//! City coordinate ingestion.

mod coordinates;

pub use coordinates::{parse_coordinates, read_coordinates};
