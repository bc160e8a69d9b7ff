use crate::overlay::registry::OverlayRegistry;
use crate::overlay::Level;

/// Baseline used when the registry is empty and the host reports no level of
/// its own.
pub const DEFAULT_BASE_LEVEL: Level = 0;

/// Computes the level for the next overlay: strictly above every level the
/// registry tracks, or above the host's baseline when nothing is tracked yet.
///
/// Levels are never reclaimed or compacted after dismissal; they only grow.
/// On `i64` the headroom outlives any realistic process, so overflow is left
/// unhandled.
pub fn compute(registry: &OverlayRegistry, host_baseline: Option<Level>) -> Level {
    match registry.highest_level() {
        Some(highest) => highest + 1,
        None => host_baseline.unwrap_or(DEFAULT_BASE_LEVEL) + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Position;

    #[test]
    fn test_empty_registry_uses_host_baseline() {
        let registry = OverlayRegistry::new();
        assert_eq!(compute(&registry, Some(200)), 201);
    }

    #[test]
    fn test_empty_registry_without_baseline_uses_default() {
        let registry = OverlayRegistry::new();
        assert_eq!(compute(&registry, None), DEFAULT_BASE_LEVEL + 1);
    }

    #[test]
    fn test_non_empty_registry_wins_over_baseline() {
        let mut registry = OverlayRegistry::new();
        registry.register("a", Position::Bottom, 10);
        registry.register("b", Position::Top, 42);

        // The baseline is ignored as soon as anything is tracked.
        assert_eq!(compute(&registry, Some(500)), 43);
    }

    #[test]
    fn test_computed_level_is_strictly_above_highest() {
        let mut registry = OverlayRegistry::new();
        for (index, id) in ["a", "b", "c"].iter().enumerate() {
            registry.register(id, Position::Bottom, index as Level * 3);
            let next = compute(&registry, None);
            assert!(next > registry.highest_level().unwrap());
        }
    }
}
