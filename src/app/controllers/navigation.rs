use crate::app::domain::section::SectionRegistry;
use crate::app::domain::settings::ThemePreference;
use crate::app::services::scroll_tracker::{
    ScrollState, ScrollTracker, SectionMeasure, TrackerThresholds,
};

/// Everything the header needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationViewState {
    pub is_menu_open: bool,
    pub active_section_id: &'static str,
    pub is_scrolled: bool,
    pub theme: ThemePreference,
}

/// Composes the section registry, scroll tracker, theme and mobile menu
/// flag into [`NavigationViewState`].
///
/// The active section has two writers: link selection (applied at once,
/// before the page has scrolled) and the scroll tracker. Whichever runs
/// last wins.
pub struct NavigationViewModel {
    registry: SectionRegistry,
    tracker: ScrollTracker,
    menu_open: bool,
    theme: ThemePreference,
}

impl NavigationViewModel {
    pub fn new(registry: SectionRegistry, thresholds: TrackerThresholds, theme: ThemePreference) -> Self {
        let tracker = ScrollTracker::new(&registry, thresholds);
        Self {
            registry,
            tracker,
            menu_open: false,
            theme,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn state(&self) -> NavigationViewState {
        let scroll = self.tracker.state();
        NavigationViewState {
            is_menu_open: self.menu_open,
            active_section_id: scroll.active_section_id,
            is_scrolled: scroll.is_past_threshold,
            theme: self.theme,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn toggle_menu(&mut self) -> NavigationViewState {
        self.menu_open = !self.menu_open;
        self.state()
    }

    pub fn close_menu(&mut self) -> NavigationViewState {
        self.menu_open = false;
        self.state()
    }

    /// A navigation link was activated. The menu always closes, even for
    /// the section that is already active or an unknown id.
    pub fn select_link(&mut self, id: &str) -> NavigationViewState {
        self.tracker.set_active(&self.registry, id);
        self.close_menu()
    }

    pub fn on_scroll<M>(&mut self, scroll_offset: u32, measure: &M) -> NavigationViewState
    where
        M: SectionMeasure + ?Sized,
    {
        self.tracker.update(&self.registry, scroll_offset, measure);
        self.state()
    }

    pub fn on_theme(&mut self, theme: ThemePreference) -> NavigationViewState {
        self.theme = theme;
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_model() -> NavigationViewModel {
        NavigationViewModel::new(
            SectionRegistry::portfolio(),
            TrackerThresholds::default(),
            ThemePreference::Dark,
        )
    }

    /// Each section is 800 px tall, stacked in registry order
    fn stacked_page(scroll: i32) -> impl Fn(&str) -> Option<i32> {
        let registry = SectionRegistry::portfolio();
        move |anchor: &str| {
            registry
                .iter()
                .position(|s| s.anchor == anchor)
                .map(|i| i as i32 * 800 - scroll)
        }
    }

    #[test]
    fn test_initial_state() {
        let vm = view_model();
        assert_eq!(
            vm.state(),
            NavigationViewState {
                is_menu_open: false,
                active_section_id: "home",
                is_scrolled: false,
                theme: ThemePreference::Dark,
            }
        );
    }

    #[test]
    fn test_select_link_is_immediate_and_closes_menu() {
        let mut vm = view_model();
        assert!(vm.toggle_menu().is_menu_open);

        let state = vm.select_link("projects");
        assert_eq!(state.active_section_id, "projects");
        assert!(!state.is_menu_open);
    }

    #[test]
    fn test_select_active_link_still_closes_menu() {
        let mut vm = view_model();
        vm.toggle_menu();
        let state = vm.select_link("home");
        assert_eq!(state.active_section_id, "home");
        assert!(!state.is_menu_open);
    }

    #[test]
    fn test_unknown_link_keeps_active_section() {
        let mut vm = view_model();
        vm.toggle_menu();
        let state = vm.select_link("blog");
        assert_eq!(state.active_section_id, "home");
        assert!(!state.is_menu_open);
    }

    #[test]
    fn test_scroll_overrides_optimistic_selection() {
        let mut vm = view_model();
        vm.select_link("contact");
        // Scroll settles on skills instead
        let state = vm.on_scroll(1650, &stacked_page(1650));
        assert_eq!(state.active_section_id, "skills");
        assert!(state.is_scrolled);
    }

    #[test]
    fn test_selection_after_scroll_wins() {
        let mut vm = view_model();
        vm.on_scroll(900, &stacked_page(900));
        assert_eq!(vm.state().active_section_id, "about");
        assert_eq!(vm.select_link("social").active_section_id, "social");
    }

    #[test]
    fn test_theme_change() {
        let mut vm = view_model();
        let state = vm.on_theme(ThemePreference::Light);
        assert_eq!(state.theme, ThemePreference::Light);
        assert_eq!(state.active_section_id, "home");
    }

    #[test]
    fn test_header_follows_scroll_offset() {
        let mut vm = view_model();
        assert!(!vm.on_scroll(5, &stacked_page(5)).is_scrolled);
        assert!(vm.on_scroll(40, &stacked_page(40)).is_scrolled);
        assert_eq!(vm.scroll_state().scroll_offset, 40);
    }

    #[test]
    fn test_menu_toggle() {
        let mut vm = view_model();
        assert!(vm.toggle_menu().is_menu_open);
        assert!(!vm.toggle_menu().is_menu_open);
        vm.toggle_menu();
        assert!(!vm.close_menu().is_menu_open);
    }
}
