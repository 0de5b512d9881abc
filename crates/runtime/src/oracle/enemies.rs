use std::collections::HashMap;

use game_core::{EnemyId, EnemyOracle, EnemyTemplate};

/// EnemyOracle implementation with static templates.
#[derive(Default)]
pub struct EnemyOracleImpl {
    templates: HashMap<EnemyId, EnemyTemplate>,
}

impl EnemyOracleImpl {
    pub fn new(templates: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|template| (template.id, template))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl EnemyOracle for EnemyOracleImpl {
    fn template(&self, id: EnemyId) -> Option<EnemyTemplate> {
        self.templates.get(&id).cloned()
    }
}
