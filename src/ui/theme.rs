use fltk::{app, enums::Color};
#[cfg(target_os = "windows")]
use fltk::{prelude::*, window::Window};

/// Accent used for the brand, active links and highlighted skill bars.
/// It reads well on both schemes, so it does not change with the theme.
pub const ACCENT: Color = Color::from_rgb(99, 102, 241);
pub const ON_ACCENT: Color = Color::White;
/// Bars and chips that should not compete with the accent
pub const ACCENT_SOFT: Color = Color::from_rgb(129, 140, 248);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub surface: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub muted: (u8, u8, u8),
    pub header_solid: (u8, u8, u8),
}

impl Palette {
    pub const DARK: Self = Self {
        background: (17, 24, 39),
        surface: (31, 41, 55),
        foreground: (243, 244, 246),
        muted: (156, 163, 175),
        header_solid: (24, 33, 50),
    };

    pub const LIGHT: Self = Self {
        background: (249, 250, 251),
        surface: (255, 255, 255),
        foreground: (17, 24, 39),
        muted: (75, 85, 99),
        header_solid: (255, 255, 255),
    };

    pub fn for_scheme(is_dark: bool) -> Self {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }

    pub fn background(&self) -> Color {
        rgb(self.background)
    }

    /// Header fill: blends with the page at the top, solid once scrolled
    pub fn header(&self, is_scrolled: bool) -> Color {
        if is_scrolled {
            rgb(self.header_solid)
        } else {
            self.background()
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

/// Repaint every widget that uses the indexed colors.
///
/// Page widgets are built with `Color::Background`, `Color::Background2`,
/// `Color::Foreground` and `Color::Inactive`, so changing the global
/// palette is enough to re-skin them.
pub fn apply_palette(palette: &Palette) {
    let (r, g, b) = palette.background;
    app::set_background_color(r, g, b);
    let (r, g, b) = palette.surface;
    app::set_background2_color(r, g, b);
    let (r, g, b) = palette.foreground;
    app::set_foreground_color(r, g, b);
    let (r, g, b) = palette.muted;
    app::set_inactive_color(r, g, b);
    let (r, g, b) = ACCENT.to_rgb();
    app::set_selection_color(r, g, b);
    app::redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };
    // 20 on Windows 11 / 10 2004+, 19 on 10 1809-1903
    for attribute in [20, 19] {
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
