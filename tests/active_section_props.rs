use std::collections::HashMap;

use proptest::prelude::*;

use dev_portfolio::app::domain::SectionRegistry;
use dev_portfolio::app::services::scroll_tracker::{ScrollTracker, TrackerThresholds, resolve_active};

/// Arbitrary measurements: each anchor is either unmounted or at some
/// offset from the viewport top.
fn measurements() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::of(-5_000i32..5_000), 7)
}

fn measure_map(registry: &SectionRegistry, tops: &[Option<i32>]) -> HashMap<&'static str, i32> {
    registry
        .iter()
        .zip(tops)
        .filter_map(|(section, top)| top.map(|t| (section.anchor, t)))
        .collect()
}

proptest! {
    #[test]
    fn resolved_section_is_registered(tops in measurements(), threshold in -200i32..400) {
        let registry = SectionRegistry::portfolio();
        let measure = measure_map(&registry, &tops);
        if let Some(section) = resolve_active(&registry, &measure, threshold) {
            prop_assert!(registry.contains(section.id));
        }
    }

    #[test]
    fn tracker_active_id_stays_registered(
        steps in prop::collection::vec((0u32..20_000, measurements()), 1..20)
    ) {
        let registry = SectionRegistry::portfolio();
        let mut tracker = ScrollTracker::new(&registry, TrackerThresholds::default());
        for (offset, tops) in steps {
            let measure = measure_map(&registry, &tops);
            let state = tracker.update(&registry, offset, &measure);
            prop_assert!(registry.contains(state.active_section_id));
            prop_assert_eq!(state.is_past_threshold, offset > 10);
        }
    }

    #[test]
    fn lowest_qualifying_section_wins(tops in measurements()) {
        let registry = SectionRegistry::portfolio();
        let measure = measure_map(&registry, &tops);
        let expected = registry
            .iter()
            .zip(&tops)
            .filter(|(_, top)| matches!(top, Some(t) if *t <= 100))
            .map(|(section, _)| section.id)
            .last();
        prop_assert_eq!(resolve_active(&registry, &measure, 100).map(|s| s.id), expected);
    }
}
