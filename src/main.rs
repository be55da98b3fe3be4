use fltk::{app, prelude::*};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use dev_portfolio::app::domain::{Message, PortfolioConfig, SectionRegistry};
use dev_portfolio::app::infrastructure::platform::detect_system_dark_mode;
use dev_portfolio::app::infrastructure::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use dev_portfolio::app::services::theme_store::ThemeStore;
use dev_portfolio::app::state::AppState;
use dev_portfolio::ui::main_window::build_main_window;
#[cfg(target_os = "windows")]
use dev_portfolio::ui::theme::set_windows_titlebar_theme;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_storage() -> Box<dyn KeyValueStore> {
    match JsonFileStore::in_config_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "no config directory, theme will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() {
    init_tracing();

    let config = PortfolioConfig::load();
    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let theme = ThemeStore::new(
        open_storage(),
        config.storage_key.clone(),
        config.default_theme,
        detect_system_dark_mode(),
    );

    let registry = SectionRegistry::portfolio();
    let widgets = build_main_window(&registry, &sender);
    let mut state = match AppState::new(widgets, config, theme, registry, sender) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "cannot start portfolio");
            return;
        }
    };

    state.window.show();

    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&state.window, state.theme.is_dark());

    state.start_loading();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::LoadingDone => state.finish_loading(),
                Message::WindowClose => {
                    state.shutdown();
                    app.quit();
                }
                Message::Resized(width) => state.on_resized(width),

                Message::NavigateTo(id) => state.navigate_to(id),
                Message::ToggleMenu => state.toggle_menu(),
                Message::Scrolled(offset) => state.on_scrolled(offset),

                Message::ToggleTheme => state.toggle_theme(),

                Message::SelectSkillCategory(id) => state.select_skill_category(id),
                Message::SelectProjectTab(id) => state.select_project_tab(id),
                Message::SelectToolCategory(id) => state.select_tool_category(id),
                Message::SelectSocialTab(id) => state.select_social_tab(id),

                Message::OpenUrl(url) => state.open_url(url),

                Message::SubmitContact => state.submit_contact(),
                Message::ContactSubmitted => state.contact_submitted(),
                Message::DismissToast => state.dismiss_toast(),
            }
        }
    }
}
