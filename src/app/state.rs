use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fltk::{app::Sender, prelude::*, window::Window};
use tracing::{debug, info, warn};

use super::controllers::contact::{ContactController, SubmitError};
use super::controllers::navigation::NavigationViewModel;
use super::controllers::scroll::ScrollWatcher;
use super::controllers::typewriter::TypewriterController;
use super::domain::content::ROLES;
use super::domain::messages::Message;
use super::domain::section::SectionRegistry;
use super::domain::settings::PortfolioConfig;
use super::infrastructure::timer::TimerGuard;
use super::services::scroll_tracker::TrackerThresholds;
use super::services::theme_store::{Subscription, ThemeStore};
use super::services::typewriter::{Typewriter, TypewriterError, TypewriterTimings};
use crate::ui::main_window::MainWidgets;
use crate::ui::nav_bar::{MobileMenu, NavBar, is_compact};
use crate::ui::overlay::{LoadingScreen, Toast};
use crate::ui::page::Page;
use crate::ui::theme::{Palette, apply_palette};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

const TOAST_DURATION: Duration = Duration::from_secs(3);
const SENT_TITLE: &str = "Message Sent!";
const SENT_DETAIL: &str = "Thanks for reaching out. I'll get back to you soon.";

pub struct AppState {
    pub config: PortfolioConfig,
    pub window: Window,
    pub nav_bar: NavBar,
    pub mobile_menu: MobileMenu,
    pub page: Page,
    pub toast: Toast,
    pub loading: LoadingScreen,
    pub sender: Sender<Message>,
    pub theme: ThemeStore,
    /// Shared with the theme subscriber that keeps the header in sync
    pub navigation: Rc<RefCell<NavigationViewModel>>,
    pub contact: ContactController,
    typewriter: TypewriterController,
    scroll_watcher: Option<ScrollWatcher>,
    loading_timer: Option<TimerGuard>,
    submit_timer: Option<TimerGuard>,
    toast_timer: Option<TimerGuard>,
    subscriptions: Vec<Subscription>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        config: PortfolioConfig,
        mut theme: ThemeStore,
        registry: SectionRegistry,
        sender: Sender<Message>,
    ) -> Result<Self, TypewriterError> {
        let MainWidgets {
            wind,
            nav_bar,
            mobile_menu,
            page,
            toast,
            loading,
        } = widgets;

        let thresholds = TrackerThresholds {
            activation: config.activation_threshold,
            header: config.header_threshold,
        };
        let navigation = Rc::new(RefCell::new(NavigationViewModel::new(
            registry,
            thresholds,
            theme.theme(),
        )));

        let machine = Typewriter::new(ROLES, TypewriterTimings::from(&config))?;
        let typewriter = TypewriterController::new(machine, page.hero.role_label.clone());

        let system_dark = theme.system_dark();
        let mut subscriptions = vec![
            theme.subscribe(move |pref| apply_palette(&Palette::for_scheme(pref.is_dark(system_dark)))),
        ];
        let nav = navigation.clone();
        subscriptions.push(theme.subscribe(move |pref| {
            nav.borrow_mut().on_theme(pref);
        }));
        #[cfg(target_os = "windows")]
        {
            let titlebar = wind.clone();
            subscriptions.push(theme.subscribe(move |pref| {
                set_windows_titlebar_theme(&titlebar, pref.is_dark(system_dark));
            }));
        }

        apply_palette(&Palette::for_scheme(theme.is_dark()));

        let mut state = Self {
            config,
            window: wind,
            nav_bar,
            mobile_menu,
            page,
            toast,
            loading,
            sender,
            theme,
            navigation,
            contact: ContactController::new(),
            typewriter,
            scroll_watcher: None,
            loading_timer: None,
            submit_timer: None,
            toast_timer: None,
            subscriptions,
        };
        let width = state.window.w();
        state.on_resized(width);
        Ok(state)
    }

    /// The page stays inactive behind the cover so it cannot take focus
    pub fn start_loading(&mut self) {
        self.page.scroll.deactivate();
        let s = self.sender;
        self.loading_timer = Some(TimerGuard::schedule(self.config.loading_delay(), move |_| {
            s.send(Message::LoadingDone);
        }));
    }

    /// Reveal the page and start everything that animates or tracks it
    pub fn finish_loading(&mut self) {
        self.loading_timer = None;
        if !self.loading.is_visible() {
            return;
        }
        self.loading.dismiss();
        self.page.scroll.activate();
        self.typewriter.start();
        self.scroll_watcher = Some(ScrollWatcher::start(
            &self.page.scroll,
            self.config.scroll_poll_interval(),
            self.sender,
        ));
        self.on_scrolled(self.page.offset());
        info!("portfolio ready");
    }

    /// Highlight the link at once, then scroll. The scroll tracker takes
    /// over again when the resulting offset change is reported.
    pub fn navigate_to(&mut self, id: &str) {
        let anchor = {
            let mut navigation = self.navigation.borrow_mut();
            navigation.select_link(id);
            navigation.registry().get(id).map(|section| section.anchor)
        };
        self.render_navigation();

        match anchor {
            Some(anchor) => {
                if !self.page.scroll_to_section(anchor) {
                    debug!(anchor, "section not mounted, nothing to scroll to");
                }
            }
            None => warn!(id, "navigation to unknown section"),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.navigation.borrow_mut().toggle_menu();
        self.render_navigation();
    }

    pub fn on_scrolled(&mut self, offset: i32) {
        let offset = u32::try_from(offset).unwrap_or(0);
        self.navigation.borrow_mut().on_scroll(offset, &self.page);
        self.render_navigation();
    }

    /// Subscribers repaint the palette and update the view-model
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.render_navigation();
    }

    pub fn on_resized(&mut self, width: i32) {
        let compact = is_compact(width);
        if compact != self.nav_bar.is_compact() {
            self.nav_bar.set_compact(compact);
            if !compact {
                self.navigation.borrow_mut().close_menu();
            }
        }
        self.mobile_menu.fit_width(width);
        self.page.fit_width();
        self.toast.place(width, self.window.h());
        self.render_navigation();
    }

    pub fn select_skill_category(&mut self, id: &str) {
        if !self.page.skills.tabs.select(id) {
            debug!(id, "unknown skill category");
        }
    }

    pub fn select_project_tab(&mut self, id: &str) {
        if !self.page.projects.tabs.select(id) {
            debug!(id, "unknown project tab");
        }
    }

    pub fn select_tool_category(&mut self, id: &str) {
        if !self.page.devtools.tabs.select(id) {
            debug!(id, "unknown tool category");
        }
    }

    pub fn select_social_tab(&mut self, id: &str) {
        if !self.page.social.tabs.select(id) {
            debug!(id, "unknown social tab");
        }
    }

    pub fn open_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(url, error = %e, "failed to open link in browser");
        }
    }

    pub fn submit_contact(&mut self) {
        let form = self.page.contact.read_form();
        match self.contact.begin_submit(form) {
            Ok(()) => {
                self.page.contact.clear_errors();
                self.page.contact.set_sending(true);
                let s = self.sender;
                self.submit_timer = Some(TimerGuard::schedule(self.config.submit_delay(), move |_| {
                    s.send(Message::ContactSubmitted);
                }));
            }
            Err(SubmitError::Invalid(errors)) => {
                debug!(failing = errors.len(), "contact form rejected");
                self.page.contact.show_errors(&errors);
            }
            Err(SubmitError::InFlight) => debug!("submit ignored while a message is sending"),
        }
    }

    pub fn contact_submitted(&mut self) {
        self.submit_timer = None;
        if self.contact.complete().is_none() {
            return;
        }
        self.page.contact.reset();
        self.toast.show(SENT_TITLE, SENT_DETAIL);

        let s = self.sender;
        self.toast_timer = Some(TimerGuard::schedule(TOAST_DURATION, move |_| {
            s.send(Message::DismissToast);
        }));
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_timer = None;
        self.toast.hide();
    }

    /// Cancel every timer and drop theme subscribers before the window goes
    pub fn shutdown(&mut self) {
        self.typewriter.stop();
        self.scroll_watcher = None;
        self.loading_timer = None;
        self.submit_timer = None;
        self.toast_timer = None;
        for subscription in self.subscriptions.drain(..) {
            self.theme.unsubscribe(subscription);
        }
    }

    fn render_navigation(&mut self) {
        let view = self.navigation.borrow().state();
        let is_dark = self.theme.is_dark();
        let palette = Palette::for_scheme(is_dark);
        self.nav_bar.render(&view, &palette, is_dark);
        self.mobile_menu.render(&view, &palette, self.nav_bar.is_compact());
    }
}
