//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Clear form shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "^R"
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "^R";
