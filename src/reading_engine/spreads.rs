//! Spread resolution: card count first, then normalized name.
//!
//! The routing table is built from the spread catalog, so the dispatcher has
//! no per-layout branches. A name only has to be unique within its count:
//! "Relationship" (7 cards) and "You, Them, Relationship" (3 cards) coexist,
//! and so could two layouts with the same name at different counts.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::reading_engine::{
    catalog::SPREADS,
    error::{ReadingError, ReadingResult},
    models::SpreadLayout,
};

/// Lookup key for a spread name.
///
/// Lowercases, trims, and drops everything that is not alphanumeric, so
/// `"Past, Present, Future"`, `"pastpresentfuture"` and
/// `"  PAST PRESENT FUTURE "` all map to `"pastpresentfuture"`.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Reject requests before any lookup or randomness happens.
pub fn validate_request(card_count: u32, spread_name: &str) -> ReadingResult<()> {
    if card_count == 0 {
        return Err(ReadingError::InvalidConfiguration(
            "card count must be a positive integer".into(),
        ));
    }
    if spread_name.is_empty() {
        return Err(ReadingError::InvalidConfiguration(
            "spread name must be a non-empty string".into(),
        ));
    }
    Ok(())
}

/// Closed set of layouts keyed by `(card_count, normalize(name))`.
#[derive(Debug, Clone)]
pub struct SpreadRegistry {
    by_count: BTreeMap<u32, HashMap<String, SpreadLayout>>,
}

impl SpreadRegistry {
    /// Build the routing table, checking every layout as it goes in.
    pub fn new(layouts: &[SpreadLayout]) -> ReadingResult<Self> {
        let mut by_count: BTreeMap<u32, HashMap<String, SpreadLayout>> = BTreeMap::new();
        for layout in layouts {
            if layout.card_count == 0 {
                return Err(ReadingError::InvalidCatalog(format!(
                    "spread {:?} has no cards",
                    layout.name
                )));
            }
            if layout.positions.len() != layout.card_count as usize {
                return Err(ReadingError::InvalidCatalog(format!(
                    "spread {:?} needs {} cards but has {} positions",
                    layout.name,
                    layout.card_count,
                    layout.positions.len()
                )));
            }
            let key = normalize(layout.name);
            if key.is_empty() {
                return Err(ReadingError::InvalidCatalog(format!(
                    "spread {:?} has no usable name",
                    layout.name
                )));
            }
            let names = by_count.entry(layout.card_count).or_default();
            if let Some(existing) = names.insert(key, *layout) {
                return Err(ReadingError::InvalidCatalog(format!(
                    "spreads {:?} and {:?} collide for {} cards",
                    existing.name, layout.name, layout.card_count
                )));
            }
        }
        Ok(SpreadRegistry { by_count })
    }

    /// Registry over the built-in spread catalog.
    pub fn builtin() -> ReadingResult<Self> {
        SpreadRegistry::new(&SPREADS)
    }

    /// Resolve a request to exactly one layout.
    pub fn resolve(&self, card_count: u32, spread_name: &str) -> ReadingResult<&SpreadLayout> {
        validate_request(card_count, spread_name)?;

        let names = self.by_count.get(&card_count).ok_or_else(|| ReadingError::UnknownCount {
            card_count,
            available: self.counts(),
        })?;

        let key = normalize(spread_name);
        let layout = names.get(&key).ok_or_else(|| ReadingError::UnknownLayout {
            card_count,
            name: spread_name.to_string(),
            known: self.layouts_for(card_count).iter().map(|l| l.name.to_string()).collect(),
        })?;

        debug!(card_count, key = %key, spread = layout.name, "spread resolved");
        Ok(layout)
    }

    /// Card counts that have at least one layout, ascending.
    pub fn counts(&self) -> Vec<u32> {
        self.by_count.keys().copied().collect()
    }

    /// Layouts registered for `card_count`, in catalog id order.
    pub fn layouts_for(&self, card_count: u32) -> Vec<&SpreadLayout> {
        let mut layouts: Vec<&SpreadLayout> = self
            .by_count
            .get(&card_count)
            .map(|names| names.values().collect())
            .unwrap_or_default();
        layouts.sort_by_key(|l| l.id);
        layouts
    }

    /// Every layout, ordered by card count then catalog id.
    pub fn layouts(&self) -> Vec<&SpreadLayout> {
        self.counts()
            .into_iter()
            .flat_map(|count| self.layouts_for(count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading_engine::models::SpreadAction;

    fn registry() -> SpreadRegistry {
        SpreadRegistry::builtin().unwrap()
    }

    #[test]
    fn normalize_ignores_case_space_and_punctuation() {
        let key = normalize("Past, Present, Future");
        assert_eq!(key, "pastpresentfuture");
        assert_eq!(normalize("pastpresentfuture"), key);
        assert_eq!(normalize("  PAST PRESENT FUTURE "), key);
        assert_eq!(normalize("Yes/No"), "yesno");
        assert_eq!(normalize("3x3"), "3x3");
    }

    #[test]
    fn resolves_every_builtin_spread_by_its_own_name() {
        let reg = registry();
        for layout in &SPREADS {
            let found = reg.resolve(layout.card_count, layout.name).unwrap();
            assert_eq!(found.id, layout.id);
        }
    }

    #[test]
    fn resolves_spelling_variants() {
        let reg = registry();
        for name in ["Past, Present, Future", "pastpresentfuture", "  PAST-PRESENT-FUTURE "] {
            assert_eq!(reg.resolve(3, name).unwrap().name, "Past, Present, Future");
        }
        assert_eq!(reg.resolve(1, "yes / no").unwrap().name, "Yes/No");
        assert_eq!(reg.resolve(10, "celtic_cross").unwrap().name, "Celtic Cross");
    }

    #[test]
    fn same_name_routes_by_count() {
        let reg = registry();
        assert_eq!(reg.resolve(7, "Relationship").unwrap().id, 16);
        assert!(matches!(
            reg.resolve(3, "Relationship"),
            Err(ReadingError::UnknownLayout { card_count: 3, .. })
        ));
    }

    #[test]
    fn unknown_count() {
        match registry().resolve(6, "anything") {
            Err(ReadingError::UnknownCount { card_count, available }) => {
                assert_eq!(card_count, 6);
                assert_eq!(available, vec![1, 2, 3, 4, 5, 7, 9, 10]);
            }
            other => panic!("expected UnknownCount, got {other:?}"),
        }
    }

    #[test]
    fn unknown_layout_for_known_count() {
        match registry().resolve(3, "not a real spread") {
            Err(ReadingError::UnknownLayout { card_count, name, known }) => {
                assert_eq!(card_count, 3);
                assert_eq!(name, "not a real spread");
                assert_eq!(known.len(), 6);
                assert_eq!(known[0], "Past, Present, Future");
            }
            other => panic!("expected UnknownLayout, got {other:?}"),
        }
    }

    #[test]
    fn invalid_configuration_is_checked_first() {
        let reg = registry();
        for name in ["Past, Present, Future", "", "anything"] {
            assert!(matches!(reg.resolve(0, name), Err(ReadingError::InvalidConfiguration(_))));
        }
        assert!(matches!(reg.resolve(3, ""), Err(ReadingError::InvalidConfiguration(_))));
        // An unknown count with an empty name is still a configuration error.
        assert!(matches!(reg.resolve(6, ""), Err(ReadingError::InvalidConfiguration(_))));
    }

    #[test]
    fn punctuation_only_name_is_an_unknown_layout() {
        assert!(matches!(
            registry().resolve(3, "!!!"),
            Err(ReadingError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn whitespace_only_name_is_routed_not_rejected() {
        let reg = registry();
        assert!(matches!(
            reg.resolve(3, "   "),
            Err(ReadingError::UnknownLayout { card_count: 3, .. })
        ));
        assert!(matches!(
            reg.resolve(6, " "),
            Err(ReadingError::UnknownCount { card_count: 6, .. })
        ));
    }

    #[test]
    fn no_partial_matches() {
        let reg = registry();
        assert!(reg.resolve(3, "Past, Present").is_err());
        assert!(reg.resolve(10, "Celtic").is_err());
    }

    #[test]
    fn layouts_for_is_in_catalog_order() {
        let ids: Vec<u32> = registry().layouts_for(2).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert!(registry().layouts_for(6).is_empty());
        assert_eq!(registry().layouts().len(), SPREADS.len());
    }

    #[test]
    fn new_layout_needs_only_a_catalog_entry() {
        let mut layouts = SPREADS.to_vec();
        layouts.push(SpreadLayout {
            id: 19,
            card_count: 6,
            name: "Hexagram",
            positions: &["One", "Two", "Three", "Four", "Five", "Six"],
            description: "Six cards.",
            action: SpreadAction::NotImplemented,
        });
        let reg = SpreadRegistry::new(&layouts).unwrap();
        assert_eq!(reg.resolve(6, "hexagram").unwrap().id, 19);
        assert_eq!(reg.resolve(3, "Past, Present, Future").unwrap().id, 6);
    }

    #[test]
    fn colliding_names_are_rejected() {
        let mut layouts = SPREADS.to_vec();
        layouts.push(SpreadLayout { id: 19, name: "past present future", ..SPREADS[6] });
        assert!(matches!(SpreadRegistry::new(&layouts), Err(ReadingError::InvalidCatalog(_))));
    }

    #[test]
    fn label_count_must_match_card_count() {
        let bad = SpreadLayout { positions: &["Only"], ..SPREADS[6] };
        assert!(matches!(SpreadRegistry::new(&[bad]), Err(ReadingError::InvalidCatalog(_))));
    }
}
