use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::content::{AVAILABILITY_BADGE, GITHUB_PROFILE_URL, OWNER_NAME, RESUME_URL};
use crate::app::domain::messages::Message;
use crate::ui::theme::{ACCENT, ON_ACCENT};

use super::{Cursor, accent_button, caption, link_button, section_group};

pub const HEIGHT: i32 = 720;
const AVATAR_SIZE: i32 = 140;
const BUTTON_W: i32 = 150;
const BUTTON_H: i32 = 44;

pub struct HeroView {
    pub group: Group,
    /// Typewriter output
    pub role_label: Frame,
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> HeroView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 90, w);

    let initials: String = OWNER_NAME
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();
    let top = cursor.take(AVATAR_SIZE);
    let mut avatar = Frame::new(x + (w - AVATAR_SIZE) / 2, top, AVATAR_SIZE, AVATAR_SIZE, None);
    avatar.set_label(&initials);
    avatar.set_frame(FrameType::OFlatFrame);
    avatar.set_color(ACCENT);
    avatar.set_label_color(ON_ACCENT);
    avatar.set_label_font(Font::HelveticaBold);
    avatar.set_label_size(44);

    cursor.gap(24);
    let top = cursor.take(28);
    let mut badge = Frame::new(x + (w - 180) / 2, top, 180, 28, None);
    badge.set_label(AVAILABILITY_BADGE);
    badge.set_frame(FrameType::RFlatBox);
    badge.set_color(Color::Background2);
    badge.set_label_color(ACCENT);
    badge.set_label_size(13);

    cursor.gap(20);
    let top = cursor.take(70);
    let mut name = Frame::new(x, top, w, 70, None);
    name.set_label(&format!("Hi, I'm {OWNER_NAME}"));
    name.set_label_font(Font::HelveticaBold);
    name.set_label_size(52);
    name.set_label_color(Color::Foreground);

    let top = cursor.take(44);
    let mut role_label = Frame::new(x, top, w, 44, None);
    role_label.set_frame(FrameType::FlatBox);
    role_label.set_color(Color::Background);
    role_label.set_label_font(Font::Helvetica);
    role_label.set_label_size(28);
    role_label.set_label_color(ACCENT);

    cursor.gap(8);
    let top = cursor.take(44);
    let mut tagline = caption(
        x + w / 6,
        top,
        w * 2 / 3,
        44,
        "I build developer tools and automations that make everyday engineering faster.",
    );
    tagline.set_align(Align::Center | Align::Inside | Align::Wrap);

    cursor.gap(28);
    let top = cursor.take(BUTTON_H);
    let row_w = BUTTON_W * 3 + 16 * 2;
    let left = x + (w - row_w) / 2;
    let mut contact = accent_button(left, top, BUTTON_W, BUTTON_H, "Contact Me");
    contact.emit(*sender, Message::NavigateTo("contact"));
    link_button(left + BUTTON_W + 16, top, BUTTON_W, BUTTON_H, "Download Resume", RESUME_URL, sender);
    link_button(left + 2 * (BUTTON_W + 16), top, BUTTON_W, BUTTON_H, "GitHub", GITHUB_PROFILE_URL, sender);

    let mut scroll_hint = Button::new(x + (w - 40) / 2, y + HEIGHT - 70, 40, 40, "@2->");
    scroll_hint.set_frame(FrameType::NoBox);
    scroll_hint.set_label_color(Color::Inactive);
    scroll_hint.set_tooltip("Scroll down");
    scroll_hint.clear_visible_focus();
    scroll_hint.emit(*sender, Message::NavigateTo("about"));

    group.end();
    HeroView { group, role_label }
}
