//! Desktop color-scheme detection, used to resolve the `system` theme.

use tracing::debug;

/// Returns true when the desktop prefers a dark color scheme.
/// Falls back to light when nothing can be detected.
pub fn detect_system_dark_mode() -> bool {
    let detected = query_desktop();
    debug!(?detected, "system color scheme probe");
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn query_desktop() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn query_desktop() -> Option<bool> {
    // GNOME 42+ exposes the explicit preference first
    if let Some(scheme) = gsettings("color-scheme") {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
        if scheme.contains("prefer-light") {
            return Some(false);
        }
    }
    gsettings("gtk-theme").map(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn query_desktop() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent (non-zero exit) in light mode
    if !output.status.success() {
        return Some(false);
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn query_desktop() -> Option<bool> {
    None
}
