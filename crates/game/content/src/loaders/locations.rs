//! World location loader.

use std::path::Path;

use game_core::{LocationNode, WorldGraph};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Location list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCatalog {
    pub locations: Vec<LocationNode>,
}

/// Loader for world locations from RON files.
pub struct LocationLoader;

impl LocationLoader {
    pub fn load(path: &Path) -> LoadResult<WorldGraph> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse locations from RON text and build the adjacency graph.
    pub fn parse(content: &str) -> LoadResult<WorldGraph> {
        let catalog: LocationCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse location RON: {}", e))?;

        WorldGraph::build(catalog.locations)
            .map_err(|e| anyhow::anyhow!("Invalid world layout: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::LocationId;

    #[test]
    fn builds_graph_from_locations() {
        let world = LocationLoader::parse(
            r#"(
                locations: [
                    (id: 1, name: "Frostwind Pass", position: (x: 0, y: 0), region: Some("Default")),
                    (id: 2, name: "Old Road", position: (x: 1, y: 0)),
                    (id: 3, name: "Barrow", position: (x: 1, y: 1), level_required: 5),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(world.len(), 3);
        assert_eq!(world.neighbors(LocationId(2)).len(), 2);
        let barrow = world.node(LocationId(3)).unwrap();
        assert_eq!(barrow.level_required, 5);
        assert_eq!(world.node(LocationId(2)).unwrap().level_required, 1);
        assert_eq!(
            world.node(LocationId(1)).unwrap().region.as_deref(),
            Some("Default")
        );
    }

    #[test]
    fn overlapping_positions_fail() {
        let err = LocationLoader::parse(
            r#"(locations: [
                (id: 1, name: "a", position: (x: 0, y: 0)),
                (id: 2, name: "b", position: (x: 0, y: 0)),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid world layout"));
    }
}
