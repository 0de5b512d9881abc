//! Fewest-hops routing between locations.

use pathfinding::prelude::dijkstra;

use super::graph::WorldGraph;
use super::location::LocationId;

/// Cost of a route in edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCost {
    /// Number of edges traversed.
    Hops(u32),
    /// No route exists (infinite cost).
    Unreachable,
}

impl PathCost {
    pub const fn hops(self) -> Option<u32> {
        match self {
            Self::Hops(hops) => Some(hops),
            Self::Unreachable => None,
        }
    }
}

/// Route found by [`shortest_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    pub cost: PathCost,
    /// Locations from source to target inclusive; empty when unreachable.
    pub path: Vec<LocationId>,
}

impl ShortestPath {
    fn unreachable() -> Self {
        Self {
            cost: PathCost::Unreachable,
            path: Vec::new(),
        }
    }
}

/// Dijkstra from `source` to `target` with every edge costing one hop.
///
/// Unknown endpoints and disconnected targets yield [`PathCost::Unreachable`]
/// with an empty path. When several routes share the minimum cost, which one
/// is returned is unspecified.
pub fn shortest_path(graph: &WorldGraph, source: LocationId, target: LocationId) -> ShortestPath {
    if !graph.contains(source) || !graph.contains(target) {
        return ShortestPath::unreachable();
    }

    let found = dijkstra(
        &source,
        |&id| graph.neighbors(id).iter().map(|&next| (next, 1u32)),
        |&id| id == target,
    );

    match found {
        Some((path, hops)) => ShortestPath {
            cost: PathCost::Hops(hops),
            path,
        },
        None => ShortestPath::unreachable(),
    }
}
