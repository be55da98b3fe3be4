use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    prelude::*,
};

use crate::app::domain::contact::{ContactField, ContactForm, ValidationErrors};
use crate::app::domain::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_RESPONSE_TIME, SOCIAL_LINKS};
use crate::app::domain::messages::Message;

use super::{
    Cursor, accent_button, caption, card, escape_label, heading, link_button, section_group, title,
};

pub const HEIGHT: i32 = 600;
const LABEL_H: i32 = 22;
const INPUT_H: i32 = 36;
const ERROR_H: i32 = 22;
const MESSAGE_H: i32 = 130;
const COLUMN_GAP: i32 = 32;
const SEND_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";
const ERROR_COLOR: Color = Color::from_rgb(239, 68, 68);

pub struct ContactView {
    pub group: Group,
    name: Input,
    email: Input,
    subject: Input,
    message: MultilineInput,
    errors: Vec<(ContactField, Frame)>,
    submit: Button,
}

fn style_input<I: InputExt>(input: &mut I, label: &str) {
    input.set_label(label);
    input.set_align(Align::TopLeft);
    input.set_label_color(Color::Foreground);
    input.set_label_size(14);
    input.set_frame(FrameType::FlatBox);
    input.set_color(Color::Background2);
    input.set_text_color(Color::Foreground);
    input.set_cursor_color(Color::Foreground);
}

fn error_label(x: i32, y: i32, w: i32) -> Frame {
    let mut frame = Frame::new(x, y, w, ERROR_H, None);
    // Opaque so a shorter message fully covers the previous one
    frame.set_frame(FrameType::FlatBox);
    frame.set_color(Color::Background);
    frame.set_align(Align::Left | Align::Inside);
    frame.set_label_size(12);
    frame.set_label_color(ERROR_COLOR);
    frame
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> ContactView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "Get In Touch");

    let form_w = w * 3 / 5;
    let half_w = (form_w - 16) / 2;
    let mut errors = Vec::with_capacity(ContactField::all().len());

    // Name and email share a row
    cursor.gap(LABEL_H);
    let top = cursor.take(INPUT_H);
    let mut name = Input::new(x, top, half_w, INPUT_H, None);
    style_input(&mut name, ContactField::Name.label());
    let mut email = Input::new(x + half_w + 16, top, half_w, INPUT_H, None);
    style_input(&mut email, ContactField::Email.label());
    let top = cursor.take(ERROR_H);
    errors.push((ContactField::Name, error_label(x, top, half_w)));
    errors.push((ContactField::Email, error_label(x + half_w + 16, top, half_w)));

    cursor.gap(LABEL_H);
    let top = cursor.take(INPUT_H);
    let mut subject = Input::new(x, top, form_w, INPUT_H, None);
    style_input(&mut subject, ContactField::Subject.label());
    let top = cursor.take(ERROR_H);
    errors.push((ContactField::Subject, error_label(x, top, form_w)));

    cursor.gap(LABEL_H);
    let top = cursor.take(MESSAGE_H);
    let mut message = MultilineInput::new(x, top, form_w, MESSAGE_H, None);
    style_input(&mut message, ContactField::Message.label());
    message.set_wrap(true);
    let top = cursor.take(ERROR_H);
    errors.push((ContactField::Message, error_label(x, top, form_w)));

    cursor.gap(8);
    let top = cursor.take(44);
    let mut submit = accent_button(x, top, form_w, 44, SEND_LABEL);
    submit.emit(*sender, Message::SubmitContact);

    info_column(x + form_w + COLUMN_GAP, y + 30 + super::HEADING_HEIGHT, w - form_w - COLUMN_GAP, sender);

    group.end();
    ContactView {
        group,
        name,
        email,
        subject,
        message,
        errors,
        submit,
    }
}

fn info_column(x: i32, y: i32, w: i32, sender: &Sender<Message>) {
    const CARD_H: i32 = 76;
    let email = escape_label(CONTACT_EMAIL);
    let rows = [
        ("Email", email.as_str()),
        ("Location", CONTACT_LOCATION),
        ("Response Time", CONTACT_RESPONSE_TIME),
    ];

    let mut top = y;
    for (label, value) in rows {
        card(x, top, w, CARD_H);
        title(x + 16, top + 10, w - 32, 24, label).set_label_size(15);
        caption(x + 16, top + 38, w - 32, 26, value);
        top += CARD_H + 12;
    }

    top += 8;
    let mut connect = Frame::new(x, top, w, 24, None);
    connect.set_label("Connect With Me");
    connect.set_label_font(Font::HelveticaBold);
    connect.set_label_color(Color::Foreground);
    connect.set_align(Align::Left | Align::Inside);

    let button_w = (w - 16) / SOCIAL_LINKS.len() as i32;
    for (i, &(label, url)) in SOCIAL_LINKS.iter().enumerate() {
        link_button(x + i as i32 * (button_w + 8), top + 32, button_w, 34, label, url, sender);
    }
}

impl ContactView {
    pub fn read_form(&self) -> ContactForm {
        ContactForm {
            name: self.name.value(),
            email: self.email.value(),
            subject: self.subject.value(),
            message: self.message.value(),
        }
    }

    /// One message per failing field; fields that passed are cleared
    pub fn show_errors(&mut self, errors: &ValidationErrors) {
        for (field, frame) in self.errors.iter_mut() {
            let text = errors.get(*field).map(|e| e.message).unwrap_or("");
            frame.set_label(text);
            frame.redraw();
        }
    }

    pub fn clear_errors(&mut self) {
        self.show_errors(&ValidationErrors::default());
    }

    pub fn set_sending(&mut self, sending: bool) {
        if sending {
            self.submit.set_label(SENDING_LABEL);
            self.submit.deactivate();
        } else {
            self.submit.set_label(SEND_LABEL);
            self.submit.activate();
        }
        self.submit.redraw();
    }

    pub fn reset(&mut self) {
        self.name.set_value("");
        self.email.set_value("");
        self.subject.set_value("");
        self.message.set_value("");
        self.clear_errors();
        self.set_sending(false);
    }
}
