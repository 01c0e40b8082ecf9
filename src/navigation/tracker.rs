use std::rc::Rc;

use super::active::{ActiveSectionReader, ActiveSectionWriter};
use super::registry::{RegionId, RegionRegistry};

/// One region's intersection with the viewport, as delivered by the platform.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl VisibilityEntry {
    pub fn new(id: impl Into<String>, ratio: f64) -> Self {
        VisibilityEntry {
            id: id.into(),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

/// Decides which region is in view from batches of visibility entries.
///
/// A region qualifies once `threshold` of it is on screen. The latest batch
/// with a qualifying region wins. Inside one batch the topmost qualifying
/// region wins. A batch with nothing qualifying leaves the value alone.
pub struct VisibilityTracker<H> {
    registry: Rc<RegionRegistry<H>>,
    threshold: f64,
    active: ActiveSectionWriter,
}

impl<H> VisibilityTracker<H> {
    pub fn new(registry: Rc<RegionRegistry<H>>, threshold: f64, active: ActiveSectionWriter) -> Self {
        VisibilityTracker {
            registry,
            threshold,
            active,
        }
    }

    pub fn reader(&self) -> ActiveSectionReader {
        self.active.reader()
    }

    /// Applies one batch. Returns the new active region if it changed.
    pub fn on_visibility(&self, entries: &[VisibilityEntry]) -> Option<RegionId> {
        let winner = entries
            .iter()
            .filter(|e| e.is_intersecting && e.ratio >= self.threshold)
            .filter_map(|e| self.registry.position(&e.id).map(|pos| (pos, &e.id)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, id)| RegionId::new(id.as_str()))?;

        if self.active.set(Some(winner.clone())) {
            log::debug!("Active section is now {}", winner);
            Some(winner)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ACTIVE_THRESHOLD, SECTION_IDS};
    use crate::navigation::active::active_section;
    use proptest::prelude::*;

    fn tracker() -> VisibilityTracker<()> {
        let registry = Rc::new(RegionRegistry::from_ids(SECTION_IDS.iter().copied()));
        let (writer, _reader) = active_section();
        VisibilityTracker::new(registry, ACTIVE_THRESHOLD, writer)
    }

    #[test]
    fn follows_regions_crossing_the_threshold() {
        let tracker = tracker();
        let reader = tracker.reader();

        tracker.on_visibility(&[VisibilityEntry::new("how-it-works", 0.35)]);
        assert_eq!(reader.get(), Some(RegionId::new("how-it-works")));

        tracker.on_visibility(&[VisibilityEntry::new("security", 0.5)]);
        assert_eq!(reader.get(), Some(RegionId::new("security")));
    }

    #[test]
    fn below_threshold_keeps_last_value() {
        let tracker = tracker();
        let reader = tracker.reader();

        tracker.on_visibility(&[VisibilityEntry::new("features", 0.9)]);
        assert_eq!(tracker.on_visibility(&[VisibilityEntry::new("features", 0.1)]), None);
        tracker.on_visibility(&[VisibilityEntry::new("revolution", 0.29)]);

        assert_eq!(reader.get(), Some(RegionId::new("features")));
    }

    #[test]
    fn same_batch_prefers_topmost_region() {
        let tracker = tracker();
        let reader = tracker.reader();

        tracker.on_visibility(&[
            VisibilityEntry::new("contact", 0.6),
            VisibilityEntry::new("revolution", 0.4),
            VisibilityEntry::new("security", 1.0),
        ]);

        assert_eq!(reader.get(), Some(RegionId::new("revolution")));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let tracker = tracker();
        let reader = tracker.reader();

        tracker.on_visibility(&[VisibilityEntry::new("hero", 1.0)]);
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn non_intersecting_entries_do_not_qualify() {
        let tracker = tracker();
        let reader = tracker.reader();

        tracker.on_visibility(&[VisibilityEntry {
            id: "features".to_string(),
            ratio: 0.5,
            is_intersecting: false,
        }]);
        assert_eq!(reader.get(), None);
    }

    fn entry_strategy() -> impl Strategy<Value = VisibilityEntry> {
        let ids = prop::sample::select(vec![
            "features",
            "how-it-works",
            "revolution",
            "security",
            "contact",
            "hero",
            "does-not-exist",
            "",
        ]);
        (ids, 0.0f64..=1.0, any::<bool>()).prop_map(|(id, ratio, is_intersecting)| VisibilityEntry {
            id: id.to_string(),
            ratio,
            is_intersecting,
        })
    }

    proptest! {
        /// After every batch the active region is empty or a registered id.
        #[test]
        fn active_region_is_always_registered(
            batches in prop::collection::vec(prop::collection::vec(entry_strategy(), 0..6), 0..40)
        ) {
            let tracker = tracker();
            let reader = tracker.reader();
            for batch in &batches {
                tracker.on_visibility(batch);
                if let Some(id) = reader.get() {
                    prop_assert!(SECTION_IDS.contains(&id.as_str()));
                }
            }
        }

        /// Once a region became active, later batches never clear it.
        #[test]
        fn active_region_is_never_cleared(
            batches in prop::collection::vec(prop::collection::vec(entry_strategy(), 0..6), 1..40)
        ) {
            let tracker = tracker();
            let reader = tracker.reader();
            let mut seen_some = false;
            for batch in &batches {
                tracker.on_visibility(batch);
                seen_some |= reader.get().is_some();
                if seen_some {
                    prop_assert!(reader.get().is_some());
                }
            }
        }
    }
}
