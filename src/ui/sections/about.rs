use fltk::{
    enums::{Color, Font},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::content::{ABOUT_PARAGRAPHS, CERTIFICATIONS, EDUCATION, FOCUS_AREAS};
use crate::ui::theme::ACCENT;

use super::{Cursor, caption, card, heading, paragraph, section_group, title};

pub const HEIGHT: i32 = 680;
const PARAGRAPH_H: i32 = 78;
const CARD_H: i32 = 150;
const CARD_GAP: i32 = 20;

pub fn build(x: i32, y: i32, w: i32) -> Group {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "About Me");

    for text in ABOUT_PARAGRAPHS {
        let top = cursor.take(PARAGRAPH_H);
        paragraph(x, top, w, PARAGRAPH_H - 8, text);
    }

    let top = cursor.take(32);
    let mut focus = Frame::new(x, top, w, 28, None);
    focus.set_label(&FOCUS_AREAS.join("   \u{2022}   "));
    focus.set_label_color(ACCENT);
    focus.set_label_font(Font::HelveticaBold);
    focus.set_label_size(14);

    cursor.gap(20);
    let top = cursor.take(36);
    let mut subheading = Frame::new(x, top, w, 32, None);
    subheading.set_label("Education & Certifications");
    subheading.set_label_font(Font::HelveticaBold);
    subheading.set_label_size(20);
    subheading.set_label_color(Color::Foreground);

    cursor.gap(12);
    let top = cursor.take(CARD_H);
    let columns = EDUCATION.len() as i32 + 1;
    let card_w = (w - CARD_GAP * (columns - 1)) / columns;
    let mut left = x;

    for school in &EDUCATION {
        card(left, top, card_w, CARD_H);
        title(left + 16, top + 16, card_w - 32, 26, school.degree);
        let mut school_label = caption(left + 16, top + 46, card_w - 32, 22, school.school);
        school_label.set_label_color(ACCENT);
        caption(left + 16, top + 72, card_w - 32, CARD_H - 88, school.focus);
        left += card_w + CARD_GAP;
    }

    card(left, top, card_w, CARD_H);
    title(left + 16, top + 16, card_w - 32, 26, "Certifications");
    let listed: Vec<String> = CERTIFICATIONS.iter().map(|c| format!("\u{2022} {c}")).collect();
    caption(left + 16, top + 50, card_w - 32, CARD_H - 66, &listed.join("\n"));

    group.end();
    group
}
