use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
};

use crate::app::controllers::navigation::NavigationViewState;
use crate::app::domain::content::BRAND;
use crate::app::domain::messages::Message;
use crate::app::domain::section::SectionRegistry;
use crate::ui::theme::{ACCENT, Palette};

pub const HEADER_HEIGHT: i32 = 64;
/// Below this window width the inline links collapse into the menu
pub const COMPACT_WIDTH: i32 = 768;
const LINK_WIDTH: i32 = 92;
const ICON_WIDTH: i32 = 44;
const MENU_ITEM_HEIGHT: i32 = 40;

const SUN: &str = "\u{2600}";
const MOON: &str = "\u{263e}";
const MENU_OPEN: &str = "\u{2630}";
const MENU_CLOSE: &str = "\u{2715}";

pub fn is_compact(window_width: i32) -> bool {
    window_width < COMPACT_WIDTH
}

fn nav_link(label: &str) -> Button {
    let mut button = Button::default();
    button.set_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_label_size(14);
    button.clear_visible_focus();
    button
}

fn style_link(button: &mut Button, active: bool, fill: Color) {
    button.set_color(fill);
    if active {
        button.set_label_color(ACCENT);
        button.set_label_font(Font::HelveticaBold);
    } else {
        button.set_label_color(Color::Foreground);
        button.set_label_font(Font::Helvetica);
    }
    button.redraw();
}

/// Fixed header: brand, one link per section, theme and menu toggles.
pub struct NavBar {
    pub widget: Flex,
    links: Vec<(&'static str, Button)>,
    theme_button: Button,
    menu_button: Button,
    fill: Vec<Button>,
    compact: bool,
}

impl NavBar {
    pub fn new(x: i32, y: i32, w: i32, registry: &SectionRegistry, sender: &Sender<Message>) -> Self {
        let mut widget = Flex::new(x, y, w, HEADER_HEIGHT, None);
        widget.set_type(FlexType::Row);
        widget.set_margins(24, 10, 24, 10);
        widget.set_spacing(4);
        widget.set_frame(FrameType::FlatBox);

        let mut brand = Button::default();
        brand.set_label(BRAND);
        brand.set_frame(FrameType::FlatBox);
        brand.set_label_font(Font::HelveticaBold);
        brand.set_label_size(20);
        brand.set_label_color(ACCENT);
        brand.clear_visible_focus();
        brand.emit(*sender, Message::NavigateTo(registry.first().id));
        widget.fixed(&brand, 160);

        // Flexible gap between brand and links
        Frame::default();

        let links: Vec<(&'static str, Button)> = registry
            .iter()
            .map(|section| {
                let mut link = nav_link(section.label);
                link.emit(*sender, Message::NavigateTo(section.id));
                widget.fixed(&link, LINK_WIDTH);
                (section.id, link)
            })
            .collect();

        let mut theme_button = nav_link(SUN);
        theme_button.set_label_size(18);
        theme_button.set_tooltip("Toggle theme");
        theme_button.emit(*sender, Message::ToggleTheme);
        widget.fixed(&theme_button, ICON_WIDTH);

        let mut menu_button = nav_link(MENU_OPEN);
        menu_button.set_label_size(18);
        menu_button.set_tooltip("Menu");
        menu_button.emit(*sender, Message::ToggleMenu);
        widget.fixed(&menu_button, ICON_WIDTH);
        menu_button.hide();

        widget.end();

        let fill = vec![brand, theme_button.clone(), menu_button.clone()];
        Self {
            widget,
            links,
            theme_button,
            menu_button,
            fill,
            compact: false,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Swap inline links for the menu toggle, or back
    pub fn set_compact(&mut self, compact: bool) {
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        for (_, link) in self.links.iter_mut() {
            if compact { link.hide() } else { link.show() }
        }
        if compact {
            self.menu_button.show();
        } else {
            self.menu_button.hide();
        }
        self.widget.layout();
        self.widget.redraw();
    }

    pub fn render(&mut self, state: &NavigationViewState, palette: &Palette, is_dark: bool) {
        let fill = palette.header(state.is_scrolled);
        self.widget.set_color(fill);

        for (id, link) in self.links.iter_mut() {
            style_link(link, *id == state.active_section_id, fill);
        }
        for button in self.fill.iter_mut() {
            button.set_color(fill);
        }

        // Show the scheme a click switches to
        self.theme_button.set_label(if is_dark { SUN } else { MOON });
        self.theme_button.set_label_color(Color::Foreground);
        self.menu_button.set_label(if state.is_menu_open { MENU_CLOSE } else { MENU_OPEN });
        self.menu_button.set_label_color(Color::Foreground);
        self.widget.redraw();
    }
}

/// Drop-down list of section links shown under the header in compact
/// layouts while the menu is open.
pub struct MobileMenu {
    pub widget: Group,
    links: Vec<(&'static str, Button)>,
    height: i32,
}

impl MobileMenu {
    pub fn new(x: i32, y: i32, w: i32, registry: &SectionRegistry, sender: &Sender<Message>) -> Self {
        let h = MENU_ITEM_HEIGHT * registry.len() as i32;
        let mut widget = Group::new(x, y, w, h, None);
        widget.set_frame(FrameType::FlatBox);

        let links = registry
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let mut link = Button::new(x, y + i as i32 * MENU_ITEM_HEIGHT, w, MENU_ITEM_HEIGHT, None);
                link.set_label(section.label);
                link.set_frame(FrameType::FlatBox);
                link.clear_visible_focus();
                link.emit(*sender, Message::NavigateTo(section.id));
                (section.id, link)
            })
            .collect();

        widget.end();
        widget.hide();
        Self { widget, links, height: h }
    }

    pub fn render(&mut self, state: &NavigationViewState, palette: &Palette, compact: bool) {
        if !(compact && state.is_menu_open) {
            self.widget.hide();
            return;
        }

        let fill = palette.header(true);
        self.widget.set_color(fill);
        for (id, link) in self.links.iter_mut() {
            style_link(link, *id == state.active_section_id, fill);
        }
        self.widget.show();
        self.widget.redraw();
    }

    /// Window resizes scale overlays; restore the natural height
    pub fn fit_width(&mut self, w: i32) {
        let (x, y) = (self.widget.x(), self.widget.y());
        self.widget.resize(x, y, w, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_breakpoint() {
        assert!(is_compact(767));
        assert!(!is_compact(768));
        assert!(!is_compact(1280));
    }
}
