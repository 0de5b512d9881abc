//! Adjacency construction for the location grid.

use std::collections::{BTreeMap, HashMap};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorCategory, GameError};

use super::location::{Coordinate, LocationId, LocationNode};

/// Errors raised while building the world graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("location {id} is defined more than once")]
    DuplicateLocation { id: LocationId },

    #[error("locations {first} and {second} share position {position}")]
    DuplicateCoordinate {
        first: LocationId,
        second: LocationId,
        position: Coordinate,
    },
}

impl GameError for WorldError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::DataIntegrity
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateLocation { .. } => "WORLD_DUPLICATE_LOCATION",
            Self::DuplicateCoordinate { .. } => "WORLD_DUPLICATE_COORDINATE",
        }
    }
}

type Neighbors = ArrayVec<LocationId, { GameConfig::MAX_NEIGHBORS }>;

/// Locations plus their 4-directional adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldGraph {
    nodes: BTreeMap<LocationId, LocationNode>,
    adjacency: BTreeMap<LocationId, Neighbors>,
}

impl WorldGraph {
    /// Build the graph from every known location.
    ///
    /// Two locations are neighbours when their coordinates differ by exactly
    /// one on a single axis.
    ///
    /// # Complexity
    ///
    /// O(n²) pairwise scan without a spatial index. Worlds hold a few hundred
    /// locations at most; revisit if content ever grows without bound.
    pub fn build(locations: impl IntoIterator<Item = LocationNode>) -> Result<Self, WorldError> {
        let mut nodes = BTreeMap::new();
        let mut occupied: HashMap<Coordinate, LocationId> = HashMap::new();

        for node in locations {
            if let Some(&first) = occupied.get(&node.position) {
                return Err(WorldError::DuplicateCoordinate {
                    first,
                    second: node.id,
                    position: node.position,
                });
            }
            if nodes.contains_key(&node.id) {
                return Err(WorldError::DuplicateLocation { id: node.id });
            }
            occupied.insert(node.position, node.id);
            nodes.insert(node.id, node);
        }

        let mut adjacency = BTreeMap::new();
        for node in nodes.values() {
            let mut neighbors = Neighbors::new();
            for other in nodes.values() {
                // Unique coordinates bound this at four entries.
                if node.position.is_adjacent(&other.position) {
                    neighbors.push(other.id);
                }
            }
            adjacency.insert(node.id, neighbors);
        }

        Ok(Self { nodes, adjacency })
    }

    pub fn node(&self, id: LocationId) -> Option<&LocationNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Neighbours of `id`; empty for unknown locations.
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        self.adjacency
            .get(&id)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Location at `position`, if any.
    pub fn location_at(&self, position: Coordinate) -> Option<&LocationNode> {
        self.nodes.values().find(|node| node.position == position)
    }

    /// Every location in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &LocationNode> + '_ {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: i32, height: i32) -> Vec<LocationNode> {
        let mut nodes = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let id = LocationId((y * width + x) as u32);
                nodes.push(LocationNode::new(id, format!("{x}:{y}"), Coordinate::new(x, y)));
            }
        }
        nodes
    }

    #[test]
    fn grid_nodes_have_expected_degree() {
        let graph = WorldGraph::build(grid(3, 3)).unwrap();

        // corner, edge and centre of a 3x3 grid
        assert_eq!(graph.neighbors(LocationId(0)).len(), 2);
        assert_eq!(graph.neighbors(LocationId(1)).len(), 3);
        assert_eq!(graph.neighbors(LocationId(4)).len(), 4);

        let mut centre = graph.neighbors(LocationId(4)).to_vec();
        centre.sort();
        assert_eq!(
            centre,
            vec![LocationId(1), LocationId(3), LocationId(5), LocationId(7)]
        );
    }

    #[test]
    fn diagonal_and_distant_nodes_are_not_linked() {
        let graph = WorldGraph::build([
            LocationNode::new(LocationId(1), "a", Coordinate::new(0, 0)),
            LocationNode::new(LocationId(2), "b", Coordinate::new(1, 1)),
            LocationNode::new(LocationId(3), "c", Coordinate::new(0, 2)),
        ])
        .unwrap();

        assert!(graph.neighbors(LocationId(1)).is_empty());
        assert!(graph.neighbors(LocationId(2)).is_empty());
        assert!(graph.neighbors(LocationId(99)).is_empty());
    }

    #[test]
    fn duplicate_ids_and_positions_are_rejected() {
        let err = WorldGraph::build([
            LocationNode::new(LocationId(1), "a", Coordinate::new(0, 0)),
            LocationNode::new(LocationId(1), "b", Coordinate::new(5, 5)),
        ])
        .unwrap_err();
        assert_eq!(err, WorldError::DuplicateLocation { id: LocationId(1) });

        let err = WorldGraph::build([
            LocationNode::new(LocationId(1), "a", Coordinate::new(0, 0)),
            LocationNode::new(LocationId(2), "b", Coordinate::new(0, 0)),
        ])
        .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateCoordinate { .. }));
        assert_eq!(err.category(), ErrorCategory::DataIntegrity);
    }

    #[test]
    fn lookup_by_position() {
        let graph = WorldGraph::build(grid(2, 2)).unwrap();
        assert_eq!(
            graph.location_at(Coordinate::new(1, 1)).map(|node| node.id),
            Some(LocationId(3))
        );
        assert!(graph.location_at(Coordinate::new(7, 7)).is_none());
    }
}
