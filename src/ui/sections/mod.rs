//! Page sections, laid out top to bottom inside the page scroll.
//!
//! Each builder receives the top-left corner and width of its band and
//! places children with absolute coordinates, in the same way the tab bar
//! positions its chips.

pub mod about;
pub mod contact;
pub mod devtools;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod social;

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::tabs::TabSet;
use crate::ui::theme::{ACCENT, ON_ACCENT};

pub const PAGE_MARGIN: i32 = 40;
pub const HEADING_HEIGHT: i32 = 70;
pub const TAB_ROW_HEIGHT: i32 = 36;
const TAB_BUTTON_WIDTH: i32 = 140;
const TAB_GAP: i32 = 8;

/// Running vertical position while placing a band's children
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub w: i32,
}

impl Cursor {
    pub fn new(x: i32, y: i32, w: i32) -> Self {
        Self { x, y, w }
    }

    /// Reserve `h` pixels and return the top of the reserved strip
    pub fn take(&mut self, h: i32) -> i32 {
        let top = self.y;
        self.y += h;
        top
    }

    pub fn gap(&mut self, h: i32) {
        self.y += h;
    }
}

/// FLTK reads `@` in a label as the start of a symbol name
pub fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

pub fn section_group(x: i32, y: i32, w: i32, h: i32) -> Group {
    let mut group = Group::new(x, y, w, h, None);
    group.set_frame(FrameType::FlatBox);
    group.set_color(Color::Background);
    group
}

pub fn heading(cursor: &mut Cursor, text: &str) -> Frame {
    let y = cursor.take(HEADING_HEIGHT);
    let mut frame = Frame::new(cursor.x, y + 10, cursor.w, HEADING_HEIGHT - 20, None);
    frame.set_label(text);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(30);
    frame.set_label_color(Color::Foreground);
    frame
}

/// Left-aligned wrapped text
pub fn paragraph(x: i32, y: i32, w: i32, h: i32, text: &str) -> Frame {
    let mut frame = Frame::new(x, y, w, h, None);
    frame.set_label(text);
    frame.set_align(Align::Left | Align::Inside | Align::Wrap | Align::Top);
    frame.set_label_size(15);
    frame.set_label_color(Color::Foreground);
    frame
}

/// Secondary text in the muted color
pub fn caption(x: i32, y: i32, w: i32, h: i32, text: &str) -> Frame {
    let mut frame = paragraph(x, y, w, h, text);
    frame.set_label_size(13);
    frame.set_label_color(Color::Inactive);
    frame
}

pub fn title(x: i32, y: i32, w: i32, h: i32, text: &str) -> Frame {
    let mut frame = paragraph(x, y, w, h, text);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(18);
    frame
}

pub fn card(x: i32, y: i32, w: i32, h: i32) -> Frame {
    let mut frame = Frame::new(x, y, w, h, None);
    frame.set_frame(FrameType::RFlatBox);
    frame.set_color(Color::Background2);
    frame
}

pub fn accent_button(x: i32, y: i32, w: i32, h: i32, label: &str) -> Button {
    let mut button = Button::new(x, y, w, h, None);
    button.set_label(label);
    button.set_frame(FrameType::RFlatBox);
    button.set_color(ACCENT);
    button.set_label_color(ON_ACCENT);
    button.set_label_font(Font::HelveticaBold);
    button.clear_visible_focus();
    button
}

pub fn outline_button(x: i32, y: i32, w: i32, h: i32, label: &str) -> Button {
    let mut button = Button::new(x, y, w, h, None);
    button.set_label(label);
    button.set_frame(FrameType::RoundedFrame);
    button.set_color(Color::Background);
    button.set_label_color(Color::Foreground);
    button.clear_visible_focus();
    button
}

pub fn link_button(x: i32, y: i32, w: i32, h: i32, label: &str, url: &'static str, sender: &Sender<Message>) -> Button {
    let mut button = outline_button(x, y, w, h, label);
    button.emit(*sender, Message::OpenUrl(url));
    button
}

/// A row of tab buttons over a stack of panels, one visible at a time
pub struct TabPanel {
    tabs: TabSet,
    buttons: Vec<Button>,
    panels: Vec<Group>,
}

impl TabPanel {
    /// Place the tab row at the cursor. `message` builds the selection
    /// message for a tab id.
    pub fn tab_row(
        cursor: &mut Cursor,
        tabs: &[(&'static str, &'static str)],
        sender: &Sender<Message>,
        message: fn(&'static str) -> Message,
    ) -> Vec<Button> {
        let y = cursor.take(TAB_ROW_HEIGHT);
        let count = tabs.len() as i32;
        let row_w = count * TAB_BUTTON_WIDTH + (count - 1).max(0) * TAB_GAP;
        let mut x = cursor.x + (cursor.w - row_w) / 2;

        tabs.iter()
            .map(|&(id, label)| {
                let mut button = Button::new(x, y, TAB_BUTTON_WIDTH, TAB_ROW_HEIGHT, None);
                button.set_label(label);
                button.set_frame(FrameType::RFlatBox);
                button.clear_visible_focus();
                button.emit(*sender, message(id));
                x += TAB_BUTTON_WIDTH + TAB_GAP;
                button
            })
            .collect()
    }

    /// `panels` must be in the same order as the ids of `tabs`
    pub fn new(tabs: TabSet, buttons: Vec<Button>, panels: Vec<Group>) -> Self {
        debug_assert_eq!(tabs.ids().len(), buttons.len());
        debug_assert_eq!(tabs.ids().len(), panels.len());
        let mut panel = Self { tabs, buttons, panels };
        panel.refresh();
        panel
    }

    /// Switch panels. Unknown ids leave the current tab in place.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.tabs.select(id) {
            return false;
        }
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let ids: Vec<&'static str> = self.tabs.ids().to_vec();
        for ((id, button), panel) in ids.into_iter().zip(&mut self.buttons).zip(&mut self.panels) {
            if self.tabs.is_active(id) {
                button.set_color(ACCENT);
                button.set_label_color(ON_ACCENT);
                panel.show();
            } else {
                button.set_color(Color::Background2);
                button.set_label_color(Color::Foreground);
                panel.hide();
            }
            button.redraw();
        }
        if let Some(mut parent) = self.panels.first().and_then(|p| p.parent()) {
            parent.redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("contact@example.com"), "contact@@example.com");
        assert_eq!(escape_label("plain"), "plain");
    }

    #[test]
    fn test_cursor_take_advances() {
        let mut cursor = Cursor::new(40, 100, 1020);
        assert_eq!(cursor.take(70), 100);
        cursor.gap(10);
        assert_eq!(cursor.take(20), 180);
        assert_eq!(cursor.y, 200);
    }
}
