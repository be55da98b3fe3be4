use chrono::Datelike;
use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::content::{BRAND, OWNER_NAME, QUICK_LINKS, SOCIAL_LINKS};
use crate::app::domain::messages::Message;
use crate::app::domain::section::SectionRegistry;
use crate::ui::theme::ACCENT;

use super::{caption, link_button};

pub const HEIGHT: i32 = 220;
const COLUMN_GAP: i32 = 40;

pub fn copyright_line(year: i32) -> String {
    format!("\u{00a9} {year} {OWNER_NAME}. All rights reserved.")
}

pub fn build(x: i32, y: i32, w: i32, registry: &SectionRegistry, sender: &Sender<Message>) -> Group {
    let mut group = Group::new(x, y, w, HEIGHT, None);
    group.set_frame(FrameType::FlatBox);
    group.set_color(Color::Background2);

    let column_w = (w - 2 * COLUMN_GAP) / 3;
    let top = y + 30;

    let mut brand = Frame::new(x, top, column_w, 30, None);
    brand.set_label(BRAND);
    brand.set_label_font(Font::HelveticaBold);
    brand.set_label_size(22);
    brand.set_label_color(ACCENT);
    brand.set_align(Align::Left | Align::Inside);
    caption(
        x,
        top + 38,
        column_w,
        60,
        "Tools, automations and interfaces that make developers more productive.",
    );

    let links_x = x + column_w + COLUMN_GAP;
    column_title(links_x, top, column_w, "Quick Links");
    for (i, section) in QUICK_LINKS.iter().filter_map(|id| registry.get(id)).enumerate() {
        let mut link = Button::new(links_x, top + 34 + i as i32 * 26, column_w / 2, 24, None);
        link.set_label(section.label);
        link.set_frame(FrameType::NoBox);
        link.set_align(Align::Left | Align::Inside);
        link.set_label_color(Color::Inactive);
        link.clear_visible_focus();
        link.emit(*sender, Message::NavigateTo(section.id));
    }

    let social_x = links_x + column_w + COLUMN_GAP;
    column_title(social_x, top, column_w, "Connect");
    for (i, &(label, url)) in SOCIAL_LINKS.iter().enumerate() {
        link_button(social_x, top + 34 + i as i32 * 34, column_w / 2, 28, label, url, sender);
    }

    let year = chrono::Local::now().year();
    let mut copyright = Frame::new(x, y + HEIGHT - 40, w / 2, 24, None);
    copyright.set_label(&copyright_line(year));
    copyright.set_label_size(12);
    copyright.set_label_color(Color::Inactive);
    copyright.set_align(Align::Left | Align::Inside);

    let mut built_with = Frame::new(x + w / 2, y + HEIGHT - 40, w / 2, 24, None);
    built_with.set_label("Built with Rust and FLTK");
    built_with.set_label_size(12);
    built_with.set_label_color(Color::Inactive);
    built_with.set_align(Align::Right | Align::Inside);

    group.end();
    group
}

fn column_title(x: i32, y: i32, w: i32, text: &str) {
    let mut frame = Frame::new(x, y, w, 26, None);
    frame.set_label(text);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_color(Color::Foreground);
    frame.set_align(Align::Left | Align::Inside);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_given_year() {
        let line = copyright_line(2026);
        assert!(line.contains("2026"));
        assert!(line.contains(OWNER_NAME));
    }

    #[test]
    fn test_quick_links_resolve() {
        let registry = SectionRegistry::portfolio();
        assert!(QUICK_LINKS.iter().all(|id| registry.contains(id)));
    }
}
