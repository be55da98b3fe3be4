use fltk::{
    app::{self, Sender},
    enums::Event,
    prelude::*,
    window::Window,
};

use crate::app::domain::content::BRAND;
use crate::app::domain::messages::Message;
use crate::app::domain::section::SectionRegistry;

use super::nav_bar::{HEADER_HEIGHT, MobileMenu, NavBar};
use super::overlay::{LoadingScreen, Toast};
use super::page::Page;

pub const WINDOW_WIDTH: i32 = 1100;
pub const WINDOW_HEIGHT: i32 = 800;

pub struct MainWidgets {
    pub wind: Window,
    pub nav_bar: NavBar,
    pub mobile_menu: MobileMenu,
    pub page: Page,
    pub toast: Toast,
    pub loading: LoadingScreen,
}

pub fn build_main_window(registry: &SectionRegistry, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    wind.set_label(BRAND);
    wind.set_xclass(BRAND);
    wind.size_range(480, 400, 0, 0);

    let nav_bar = NavBar::new(0, 0, WINDOW_WIDTH, registry, sender);
    let page = Page::build(
        0,
        HEADER_HEIGHT,
        WINDOW_WIDTH,
        WINDOW_HEIGHT - HEADER_HEIGHT,
        registry,
        sender,
    );

    // Overlays come last so they draw on top and see events first
    let mobile_menu = MobileMenu::new(0, HEADER_HEIGHT, WINDOW_WIDTH, registry, sender);
    let toast = Toast::new(WINDOW_WIDTH, WINDOW_HEIGHT, sender);
    let loading = LoadingScreen::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    wind.end();
    wind.resizable(&page.scroll);

    let s = *sender;
    wind.set_callback(move |_| {
        // Escape also fires the window callback; only the close button quits
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });
    let s = *sender;
    wind.resize_callback(move |_, _, _, w, _| s.send(Message::Resized(w)));

    MainWidgets {
        wind,
        nav_bar,
        mobile_menu,
        page,
        toast,
        loading,
    }
}
