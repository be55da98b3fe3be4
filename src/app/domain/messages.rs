/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and timers send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Lifecycle
    LoadingDone,
    WindowClose,
    Resized(i32),

    // Navigation
    NavigateTo(&'static str),
    ToggleMenu,
    Scrolled(i32),

    // Theme
    ToggleTheme,

    // Section tabs
    SelectSkillCategory(&'static str),
    SelectProjectTab(&'static str),
    SelectToolCategory(&'static str),
    SelectSocialTab(&'static str),

    // External links open in the system browser
    OpenUrl(&'static str),

    // Contact form
    SubmitContact,
    ContactSubmitted,
    DismissToast,
}
