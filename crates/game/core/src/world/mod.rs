//! World travel: location graph, shortest paths and per-player travel sessions.
//!
//! Locations sit on an integer grid and connect to their four orthogonal
//! neighbours. A travel request finds the fewest-hops route, converts it to a
//! duration and gates the player behind an arrival timestamp.

pub mod graph;
pub mod location;
pub mod path;
pub mod travel;

pub use graph::{WorldError, WorldGraph};
pub use location::{Coordinate, LocationId, LocationNode};
pub use path::{PathCost, ShortestPath, shortest_path};
pub use travel::{
    TravelContext, TravelError, TravelPhase, TravelSession, begin_travel, can_move,
    complete_arrival,
};
