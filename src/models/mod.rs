//! Domain model types for Euclidean TSP instances.
//!
//! Cities carry an id and planar coordinates; a tour is the closed
//! sequence of city ids produced and consumed by every optimizer.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
