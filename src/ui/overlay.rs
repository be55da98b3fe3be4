use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Event, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::content::BRAND;
use crate::app::domain::messages::Message;
use crate::ui::theme::{ACCENT, ON_ACCENT};

const TOAST_W: i32 = 360;
const TOAST_H: i32 = 76;
const TOAST_MARGIN: i32 = 24;

/// Pointer, keyboard and focus events the loading cover keeps from the
/// page underneath.
pub fn swallows_input(event: Event) -> bool {
    matches!(
        event,
        Event::Push
            | Event::Released
            | Event::Drag
            | Event::MouseWheel
            | Event::KeyDown
            | Event::KeyUp
            | Event::Shortcut
            | Event::Focus
    )
}

/// Full-window cover shown until the page is ready. Swallows input so
/// nothing underneath reacts while it is up.
pub struct LoadingScreen {
    pub widget: Group,
}

impl LoadingScreen {
    pub fn new(w: i32, h: i32) -> Self {
        let mut widget = Group::new(0, 0, w, h, None);
        widget.set_frame(FrameType::FlatBox);
        widget.set_color(Color::Background);

        let mut spinner = Frame::new((w - 64) / 2, h / 2 - 90, 64, 64, "@refresh");
        spinner.set_label_color(ACCENT);
        spinner.set_label_size(40);

        let mut title = Frame::new(0, h / 2 - 10, w, 40, None);
        title.set_label("Loading Portfolio");
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(24);
        title.set_label_color(Color::Foreground);

        let mut brand = Frame::new(0, h / 2 + 30, w, 24, None);
        brand.set_label(BRAND);
        brand.set_label_color(Color::Inactive);

        widget.end();
        widget.handle(|_, event| swallows_input(event));

        Self { widget }
    }

    pub fn is_visible(&self) -> bool {
        self.widget.visible()
    }

    pub fn dismiss(&mut self) {
        self.widget.hide();
    }
}

/// Transient confirmation in the bottom-right corner.
pub struct Toast {
    widget: Button,
}

impl Toast {
    /// Clicking the toast dismisses it early
    pub fn new(window_w: i32, window_h: i32, sender: &Sender<Message>) -> Self {
        let mut widget = Button::new(0, 0, TOAST_W, TOAST_H, None);
        widget.set_frame(FrameType::RFlatBox);
        widget.set_color(ACCENT);
        widget.set_label_color(ON_ACCENT);
        widget.set_align(Align::Left | Align::Inside | Align::Wrap);
        widget.clear_visible_focus();
        widget.emit(*sender, Message::DismissToast);
        widget.hide();

        let mut toast = Self { widget };
        toast.place(window_w, window_h);
        toast
    }

    pub fn place(&mut self, window_w: i32, window_h: i32) {
        self.widget.resize(
            window_w - TOAST_W - TOAST_MARGIN,
            window_h - TOAST_H - TOAST_MARGIN,
            TOAST_W,
            TOAST_H,
        );
    }

    pub fn show(&mut self, title: &str, detail: &str) {
        self.widget.set_label(&format!("  {title}\n  {detail}"));
        self.widget.show();
        self.widget.redraw();
    }

    pub fn hide(&mut self) {
        self.widget.hide();
    }
}
