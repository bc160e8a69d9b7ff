use crate::overlay::{Level, OverlayId, Position};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One active overlay as tracked by the registry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRecord {
    pub id: OverlayId,
    pub position: Position,
    pub level: Level,
}

/// Source of truth for which overlays are currently active, keyed by id.
/// Confined to the UI context; no locking. Insertion order carries no meaning,
/// queries go by id or position only.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    records: IndexMap<OverlayId, OverlayRecord>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record for `id`, silently replacing any existing one.
    /// Callers must not reuse an id for a distinct overlay while the original
    /// is still registered.
    pub fn register(&mut self, id: &str, position: Position, level: Level) {
        self.records.insert(
            id.to_string(),
            OverlayRecord {
                id: id.to_string(),
                position,
                level,
            },
        );
    }

    /// Removes the record for `id` if present. Removing an absent id is a
    /// no-op; explicit dismissal and the hide hook may both call this for the
    /// same overlay.
    pub fn unregister(&mut self, id: &str) {
        self.records.swap_remove(id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&OverlayRecord> {
        self.records.get(id)
    }

    /// Ids of all overlays at `position`. Order is unspecified.
    pub fn find_by_position(&self, position: Position) -> Vec<OverlayId> {
        self.records
            .values()
            .filter(|record| record.position == position)
            .map(|record| record.id.clone())
            .collect()
    }

    pub fn all_ids(&self) -> Vec<OverlayId> {
        self.records.keys().cloned().collect()
    }

    pub fn all_records(&self) -> Vec<OverlayRecord> {
        self.records.values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest level across all records, or `None` when nothing is registered.
    pub fn highest_level(&self) -> Option<Level> {
        self.records.values().map(|record| record.level).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_count() {
        let mut registry = OverlayRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());

        registry.register("a", Position::Bottom, 1);
        registry.register("b", Position::Top, 2);
        assert_eq!(registry.count(), 2);

        registry.unregister("a");
        assert_eq!(registry.count(), 1);
        registry.unregister("b");
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_unregister_absent_id_is_noop() {
        let mut registry = OverlayRegistry::new();
        registry.register("a", Position::Bottom, 1);

        registry.unregister("never-registered");
        assert_eq!(registry.count(), 1);

        // Unregistering twice is also fine.
        registry.unregister("a");
        registry.unregister("a");
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_reregister_is_last_write_wins() {
        let mut registry = OverlayRegistry::new();
        registry.register("a", Position::Bottom, 1);
        registry.register("a", Position::Center, 7);

        assert_eq!(registry.count(), 1);
        let record = registry.find_by_id("a").unwrap();
        assert_eq!(record.position, Position::Center);
        assert_eq!(record.level, 7);
    }

    #[test]
    fn test_find_by_position_partitions_records() {
        let mut registry = OverlayRegistry::new();
        registry.register("a", Position::Bottom, 1);
        registry.register("b", Position::Top, 2);
        registry.register("c", Position::Bottom, 3);

        let mut bottom = registry.find_by_position(Position::Bottom);
        bottom.sort();
        assert_eq!(bottom, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(registry.find_by_position(Position::Top), vec!["b"]);
        assert!(registry.find_by_position(Position::Center).is_empty());
    }

    #[test]
    fn test_highest_level() {
        let mut registry = OverlayRegistry::new();
        assert_eq!(registry.highest_level(), None);

        registry.register("a", Position::Bottom, 100);
        registry.register("b", Position::Top, 50);
        assert_eq!(registry.highest_level(), Some(100));
        assert_eq!(registry.find_by_position(Position::Top), vec!["b"]);
        assert_eq!(registry.count(), 2);

        registry.unregister("a");
        assert_eq!(registry.highest_level(), Some(50));
    }

    #[test]
    fn test_snapshots() {
        let mut registry = OverlayRegistry::new();
        registry.register("a", Position::Bottom, 1);
        registry.register("b", Position::Top, 2);

        let mut ids = registry.all_ids();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(registry.all_records().len(), 2);

        registry.clear();
        assert_eq!(registry.count(), 0);
        assert!(registry.all_ids().is_empty());
    }
}
