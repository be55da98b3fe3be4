use fltk::{
    app::Sender,
    enums::{Color, FrameType},
    group::{Group, Scroll, ScrollType},
    prelude::*,
};

use tracing::warn;

use crate::app::domain::messages::Message;
use crate::app::domain::section::SectionRegistry;
use crate::app::services::scroll_tracker::SectionMeasure;

use super::sections::{
    self, PAGE_MARGIN, about, contact::ContactView, devtools::DevToolsView, footer,
    hero::HeroView, projects::ProjectsView, skills::SkillsView, social::SocialView,
};

const SCROLLBAR_W: i32 = 14;

/// Section ids of the bands in the order they are stacked.
const BAND_ORDER: [&str; 7] = ["home", "about", "skills", "projects", "devtools", "social", "contact"];

/// The scrolling document: every section band followed by the footer.
pub struct Page {
    pub scroll: Scroll,
    pub hero: HeroView,
    pub skills: SkillsView,
    pub projects: ProjectsView,
    pub devtools: DevToolsView,
    pub social: SocialView,
    pub contact: ContactView,
    anchors: Vec<(&'static str, Group)>,
    /// Every band plus the footer, resized with the viewport
    bands: Vec<Group>,
    content_height: i32,
}

/// Registry anchor of each band, in stacking order. A band whose id the
/// registry does not know has no anchor.
pub fn band_anchors(registry: &SectionRegistry) -> [Option<&'static str>; 7] {
    BAND_ORDER.map(|id| registry.get(id).map(|section| section.anchor))
}

/// Registry anchors with no band to measure
pub fn unplaced_anchors(registry: &SectionRegistry) -> Vec<&'static str> {
    let placed = band_anchors(registry);
    registry
        .iter()
        .map(|section| section.anchor)
        .filter(|anchor| !placed.contains(&Some(*anchor)))
        .collect()
}

/// Width left to a band once the margins and the scrollbar are taken
pub fn band_width(page_w: i32) -> i32 {
    (page_w - 2 * PAGE_MARGIN - SCROLLBAR_W).max(0)
}

/// Keep a requested offset inside the scrollable range
pub fn clamp_offset(target: i32, content_height: i32, viewport_height: i32) -> i32 {
    let max = (content_height - viewport_height).max(0);
    target.clamp(0, max)
}

impl Page {
    pub fn build(x: i32, y: i32, w: i32, h: i32, registry: &SectionRegistry, sender: &Sender<Message>) -> Self {
        let mut scroll = Scroll::new(x, y, w, h, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);
        scroll.set_color(Color::Background);
        scroll.set_scrollbar_size(SCROLLBAR_W);

        let band_x = x + PAGE_MARGIN;
        let band_w = band_width(w);
        let mut top = y;

        let hero = sections::hero::build(band_x, top, band_w, sender);
        top += sections::hero::HEIGHT;
        let about = about::build(band_x, top, band_w);
        top += about::HEIGHT;
        let skills = sections::skills::build(band_x, top, band_w, sender);
        top += sections::skills::HEIGHT;
        let projects = sections::projects::build(band_x, top, band_w, sender);
        top += sections::projects::HEIGHT;
        let devtools = sections::devtools::build(band_x, top, band_w, sender);
        top += sections::devtools::HEIGHT;
        let social = sections::social::build(band_x, top, band_w, sender);
        top += sections::social::HEIGHT;
        let contact = sections::contact::build(band_x, top, band_w, sender);
        top += sections::contact::HEIGHT;

        let footer = footer::build(x, top, w - SCROLLBAR_W, registry, sender);
        top += footer::HEIGHT;

        scroll.end();

        let groups = [
            hero.group.clone(),
            about,
            skills.group.clone(),
            projects.group.clone(),
            devtools.group.clone(),
            social.group.clone(),
            contact.group.clone(),
        ];
        let anchors = band_anchors(registry)
            .into_iter()
            .zip(groups.iter())
            .filter_map(|(anchor, group)| anchor.map(|a| (a, group.clone())))
            .collect();
        for anchor in unplaced_anchors(registry) {
            warn!(anchor, "no page band for section anchor");
        }
        let mut bands = groups.to_vec();
        bands.push(footer);

        Self {
            scroll,
            hero,
            skills,
            projects,
            devtools,
            social,
            contact,
            anchors,
            bands,
            content_height: top - y,
        }
    }

    pub fn offset(&self) -> i32 {
        self.scroll.yposition()
    }

    /// Stretch or shrink every band to the viewport width. Heights stay,
    /// so section offsets are unchanged.
    pub fn fit_width(&mut self) {
        let page_x = self.scroll.x();
        let page_w = self.scroll.w();
        let last = self.bands.len() - 1;
        for (i, band) in self.bands.iter_mut().enumerate() {
            let (bx, bw) = if i == last {
                (page_x, page_w - SCROLLBAR_W)
            } else {
                (page_x + PAGE_MARGIN, band_width(page_w))
            };
            if band.x() != bx || band.w() != bw {
                band.resize(bx, band.y(), bw, band.h());
            }
        }
        self.scroll.redraw();
    }

    /// Scroll so the section's top edge meets the top of the viewport.
    /// The offset is clamped, so the last sections may stop short.
    pub fn scroll_to_section(&mut self, anchor: &str) -> bool {
        let Some(top) = self.top_of(anchor) else {
            return false;
        };
        let target = clamp_offset(self.offset() + top, self.content_height, self.scroll.h());
        self.scroll.scroll_to(0, target);
        self.scroll.redraw();
        true
    }
}

impl SectionMeasure for Page {
    fn top_of(&self, anchor: &str) -> Option<i32> {
        let (_, group) = self.anchors.iter().find(|(a, _)| *a == anchor)?;
        if !group.visible() {
            return None;
        }
        Some(group.y() - self.scroll.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::section::SectionDescriptor;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-20, 5000, 700), 0);
        assert_eq!(clamp_offset(1200, 5000, 700), 1200);
        assert_eq!(clamp_offset(4800, 5000, 700), 4300);
    }

    #[test]
    fn test_bands_follow_registry_anchors() {
        let registry = SectionRegistry::portfolio();
        let expected: Vec<_> = registry.iter().map(|s| Some(s.anchor)).collect();
        assert_eq!(band_anchors(&registry).to_vec(), expected);
        assert!(unplaced_anchors(&registry).is_empty());
    }

    #[test]
    fn test_renamed_anchor_is_still_measured() {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::new("home", "home", "Home"),
            SectionDescriptor::new("about", "intro", "About"),
        ])
        .unwrap();
        let anchors = band_anchors(&registry);
        assert_eq!(anchors[1], Some("intro"));
        assert_eq!(anchors[2], None);
        assert!(unplaced_anchors(&registry).is_empty());
    }

    #[test]
    fn test_section_without_band_is_reported() {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::new("home", "home", "Home"),
            SectionDescriptor::new("blog", "blog", "Blog"),
        ])
        .unwrap();
        assert_eq!(unplaced_anchors(&registry), vec!["blog"]);
    }

    #[test]
    fn test_band_width_tracks_viewport() {
        assert_eq!(band_width(1100), 1100 - 80 - 14);
        assert_eq!(band_width(480), 386);
        assert_eq!(band_width(50), 0);
    }

    #[test]
    fn test_clamp_offset_short_content() {
        // Nothing to scroll when the page fits the viewport
        assert_eq!(clamp_offset(300, 500, 700), 0);
    }
}
