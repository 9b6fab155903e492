//! Shared game type registry
//!
//! Game type configs can be edited while other threads classify scores
//! against them. The registry serializes edits behind a single write lock
//! and hands out cloned snapshots to readers, so a tier computation never
//! observes a half-applied edit.

use crate::config::GameTypeConfig;
use crate::error::{Result, TierTallyError};
use ahash::AHashMap;
use parking_lot::RwLock;

/// Game types keyed by display name
#[derive(Debug, Default)]
pub struct GameTypeRegistry {
    game_types: RwLock<AHashMap<String, GameTypeConfig>>,
}

impl GameTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game type; names must be unique
    pub fn insert(&self, config: GameTypeConfig) -> Result<()> {
        let mut game_types = self.game_types.write();
        if game_types.contains_key(config.name()) {
            return Err(TierTallyError::DuplicateGameType(config.name().to_string()));
        }
        log::debug!(
            "registering game type {:?} (good={}, bad={})",
            config.name(),
            config.good_score(),
            config.bad_score()
        );
        game_types.insert(config.name().to_string(), config);
        Ok(())
    }

    /// Edit a registered game type, optionally renaming it
    pub fn edit(&self, name: &str, new_name: &str, good_score: i32, bad_score: i32) -> Result<()> {
        let mut game_types = self.game_types.write();
        if new_name != name && game_types.contains_key(new_name) {
            return Err(TierTallyError::DuplicateGameType(new_name.to_string()));
        }

        let mut config = game_types
            .get(name)
            .cloned()
            .ok_or_else(|| TierTallyError::GameTypeNotFound(name.to_string()))?;
        config.edit(new_name, good_score, bad_score)?;

        log::debug!("editing game type {:?} -> {:?}", name, new_name);
        game_types.remove(name);
        game_types.insert(new_name.to_string(), config);
        Ok(())
    }

    /// Snapshot of a game type's current config
    pub fn get(&self, name: &str) -> Result<GameTypeConfig> {
        self.game_types
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TierTallyError::GameTypeNotFound(name.to_string()))
    }

    pub fn remove(&self, name: &str) -> Result<GameTypeConfig> {
        let removed = self.game_types.write().remove(name);
        log::debug!("removing game type {:?}", name);
        removed.ok_or_else(|| TierTallyError::GameTypeNotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.game_types.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.game_types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.game_types.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn registry_with(names: &[&str]) -> GameTypeRegistry {
        let registry = GameTypeRegistry::new();
        for name in names {
            registry.insert(GameTypeConfig::new(*name, 100, 20).unwrap()).unwrap();
        }
        registry
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let registry = registry_with(&["Catan"]);
        let err = registry
            .insert(GameTypeConfig::new("Catan", 10, 2).unwrap())
            .unwrap_err();
        assert_eq!(err, TierTallyError::DuplicateGameType("Catan".to_string()));
        assert_eq!(registry.get("Catan").unwrap().good_score(), 100);
    }

    #[test]
    fn test_edit_renames() {
        let registry = registry_with(&["Catan", "Uno"]);
        registry.edit("Catan", "Settlers", 12, 4).unwrap();

        assert_eq!(registry.names(), vec!["Settlers".to_string(), "Uno".to_string()]);
        let config = registry.get("Settlers").unwrap();
        assert_eq!((config.good_score(), config.bad_score()), (12, 4));
        assert!(matches!(registry.get("Catan"), Err(TierTallyError::GameTypeNotFound(_))));
    }

    #[test]
    fn test_edit_failure_leaves_registry_untouched() {
        let registry = registry_with(&["Catan", "Uno"]);

        assert!(registry.edit("Catan", "Uno", 12, 4).is_err());
        assert!(registry.edit("Catan", "Catan", 4, 12).is_err());
        assert!(registry.edit("Chess", "Chess", 12, 4).is_err());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Catan").unwrap().good_score(), 100);
    }

    #[test]
    fn test_remove() {
        let registry = registry_with(&["Catan"]);
        assert_eq!(registry.remove("Catan").unwrap().name(), "Catan");
        assert!(registry.is_empty());
        assert!(registry.remove("Catan").is_err());
    }

    #[test]
    fn test_concurrent_readers_see_whole_edits() {
        let registry = Arc::new(registry_with(&["Catan"]));

        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..200 {
                    registry.edit("Catan", "Catan", 100 + i, 20 + i).unwrap();
                }
            })
        };

        for _ in 0..200 {
            let config = registry.get("Catan").unwrap();
            assert_eq!(config.good_score() - config.bad_score(), 80);
        }
        writer.join().unwrap();
    }
}
