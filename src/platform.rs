//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Category switch shortcut display
/// - macOS: "Cmd+←/→"
/// - Linux/Windows: "Ctrl+←/→"
#[cfg(target_os = "macos")]
pub const CATEGORY_SHORTCUT: &str = "Cmd+←/→";

#[cfg(not(target_os = "macos"))]
pub const CATEGORY_SHORTCUT: &str = "Ctrl+←/→";
