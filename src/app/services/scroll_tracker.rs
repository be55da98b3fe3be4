//! Derives the active section from where each section currently sits in
//! the viewport.

use std::collections::HashMap;

use tracing::debug;

use crate::app::domain::section::{SectionDescriptor, SectionRegistry};

/// Resolves an anchor to the distance (px) between the top edge of its
/// element and the top of the viewport. Negative once scrolled past.
/// `None` means the anchor is not currently mounted.
pub trait SectionMeasure {
    fn top_of(&self, anchor: &str) -> Option<i32>;
}

impl<F> SectionMeasure for F
where
    F: Fn(&str) -> Option<i32>,
{
    fn top_of(&self, anchor: &str) -> Option<i32> {
        self(anchor)
    }
}

impl SectionMeasure for HashMap<&str, i32> {
    fn top_of(&self, anchor: &str) -> Option<i32> {
        self.get(anchor).copied()
    }
}

/// Scan sections bottom-up and return the first whose top edge is at or
/// above `threshold`. When several qualify the lowest one wins.
pub fn resolve_active<'r, M>(
    registry: &'r SectionRegistry,
    measure: &M,
    threshold: i32,
) -> Option<&'r SectionDescriptor>
where
    M: SectionMeasure + ?Sized,
{
    registry
        .iter()
        .rev()
        .find(|section| matches!(measure.top_of(section.anchor), Some(top) if top <= threshold))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub scroll_offset: u32,
    pub active_section_id: &'static str,
    pub is_past_threshold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerThresholds {
    pub activation: i32,
    pub header: u32,
}

impl Default for TrackerThresholds {
    fn default() -> Self {
        Self {
            activation: 100,
            header: 10,
        }
    }
}

pub struct ScrollTracker {
    thresholds: TrackerThresholds,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(registry: &SectionRegistry, thresholds: TrackerThresholds) -> Self {
        Self {
            thresholds,
            state: ScrollState {
                scroll_offset: 0,
                active_section_id: registry.first().id,
                is_past_threshold: false,
            },
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recompute from a fresh measurement. If no section qualifies the
    /// active id is left as it was.
    pub fn update<M>(&mut self, registry: &SectionRegistry, scroll_offset: u32, measure: &M) -> ScrollState
    where
        M: SectionMeasure + ?Sized,
    {
        self.state.scroll_offset = scroll_offset;
        self.state.is_past_threshold = scroll_offset > self.thresholds.header;

        if let Some(section) = resolve_active(registry, measure, self.thresholds.activation) {
            if section.id != self.state.active_section_id {
                debug!(from = self.state.active_section_id, to = section.id, "active section changed");
            }
            self.state.active_section_id = section.id;
        }
        self.state
    }

    /// Write the active id directly. Ids outside the registry are ignored.
    pub fn set_active(&mut self, registry: &SectionRegistry, id: &str) -> bool {
        match registry.get(id) {
            Some(section) => {
                self.state.active_section_id = section.id;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> SectionRegistry {
        SectionRegistry::new(vec![
            SectionDescriptor::new("home", "home", "Home"),
            SectionDescriptor::new("about", "about", "About"),
            SectionDescriptor::new("skills", "skills", "Skills"),
        ])
        .unwrap()
    }

    /// Page layout where sections start at fixed document offsets
    fn page_at(scroll: i32) -> impl Fn(&str) -> Option<i32> {
        move |anchor: &str| {
            let doc_top = match anchor {
                "home" => 0,
                "about" => 800,
                "skills" => 1600,
                _ => return None,
            };
            Some(doc_top - scroll)
        }
    }

    #[test]
    fn test_lowest_qualifying_section_wins() {
        let registry = three_sections();
        // home at -750 and about at 50 both qualify
        let active = resolve_active(&registry, &page_at(750), 100).unwrap();
        assert_eq!(active.id, "about");
    }

    #[test]
    fn test_top_of_page_is_home() {
        let registry = three_sections();
        assert_eq!(resolve_active(&registry, &page_at(0), 100).unwrap().id, "home");
        // about sits at 101: one pixel short
        assert_eq!(resolve_active(&registry, &page_at(699), 100).unwrap().id, "home");
        assert_eq!(resolve_active(&registry, &page_at(700), 100).unwrap().id, "about");
    }

    #[test]
    fn test_deep_scroll() {
        let registry = three_sections();
        assert_eq!(resolve_active(&registry, &page_at(5000), 100).unwrap().id, "skills");
    }

    #[test]
    fn test_unmounted_anchor_is_skipped() {
        let registry = three_sections();
        let measure = |anchor: &str| match anchor {
            "home" => Some(-900),
            "about" => None,
            "skills" => Some(700),
            _ => None,
        };
        assert_eq!(resolve_active(&registry, &measure, 100).unwrap().id, "home");
    }

    #[test]
    fn test_nothing_qualifies() {
        let registry = three_sections();
        let measure: HashMap<&str, i32> = [("home", 300), ("about", 1100)].into_iter().collect();
        assert!(resolve_active(&registry, &measure, 100).is_none());
    }

    #[test]
    fn test_tracker_keeps_previous_when_nothing_qualifies() {
        let registry = three_sections();
        let mut tracker = ScrollTracker::new(&registry, TrackerThresholds::default());
        assert_eq!(tracker.state().active_section_id, "home");

        tracker.update(&registry, 1700, &page_at(1700));
        assert_eq!(tracker.state().active_section_id, "skills");

        let floating = |_: &str| Some(500);
        let state = tracker.update(&registry, 1700, &floating);
        assert_eq!(state.active_section_id, "skills");
    }

    #[test]
    fn test_header_threshold() {
        let registry = three_sections();
        let mut tracker = ScrollTracker::new(&registry, TrackerThresholds::default());
        assert!(!tracker.update(&registry, 10, &page_at(10)).is_past_threshold);
        assert!(tracker.update(&registry, 11, &page_at(11)).is_past_threshold);
        assert!(!tracker.update(&registry, 0, &page_at(0)).is_past_threshold);
    }

    #[test]
    fn test_set_active_rejects_unknown_ids() {
        let registry = three_sections();
        let mut tracker = ScrollTracker::new(&registry, TrackerThresholds::default());
        assert!(tracker.set_active(&registry, "skills"));
        assert!(!tracker.set_active(&registry, "blog"));
        assert_eq!(tracker.state().active_section_id, "skills");
    }
}
