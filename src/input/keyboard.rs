//! Keyboard router
//!
//! A single dispatch table maps key presses to playback actions. The
//! mapping mirrors the movie page shortcuts: space toggles play/pause,
//! arrows seek and adjust volume, `f`/`m`/`c` toggle fullscreen, mute and
//! cinematic mode, and Escape leaves fullscreen.

/// Keys the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    F,
    M,
    C,
    Escape,

    /// Any key without a mapping
    Other,
}

/// Playback action resolved from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayPause,
    SkipBackward,
    SkipForward,
    VolumeUp,
    VolumeDown,
    ToggleFullscreen,
    ToggleMute,
    ToggleCinematic,

    /// Exit fullscreen, effective only while fullscreen is active
    ExitFullscreen,
}

/// Resolve a key press to its playback action, if any
pub fn map_key(key: Key) -> Option<KeyAction> {
    match key {
        Key::Space => Some(KeyAction::TogglePlayPause),
        Key::Left => Some(KeyAction::SkipBackward),
        Key::Right => Some(KeyAction::SkipForward),
        Key::Up => Some(KeyAction::VolumeUp),
        Key::Down => Some(KeyAction::VolumeDown),
        Key::F => Some(KeyAction::ToggleFullscreen),
        Key::M => Some(KeyAction::ToggleMute),
        Key::C => Some(KeyAction::ToggleCinematic),
        Key::Escape => Some(KeyAction::ExitFullscreen),
        Key::Other => None,
    }
}

/// Whether the host default for this key is suppressed
///
/// Escape acts on fullscreen but is intentionally absent here; the movie
/// page never prevents its default.
pub fn suppresses_default(key: Key) -> bool {
    matches!(
        key,
        Key::Space | Key::Left | Key::Right | Key::Up | Key::Down | Key::F | Key::M | Key::C
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_keys() {
        assert_eq!(map_key(Key::Space), Some(KeyAction::TogglePlayPause));
        assert_eq!(map_key(Key::Left), Some(KeyAction::SkipBackward));
        assert_eq!(map_key(Key::Right), Some(KeyAction::SkipForward));
        assert_eq!(map_key(Key::Up), Some(KeyAction::VolumeUp));
        assert_eq!(map_key(Key::Down), Some(KeyAction::VolumeDown));
        assert_eq!(map_key(Key::F), Some(KeyAction::ToggleFullscreen));
        assert_eq!(map_key(Key::M), Some(KeyAction::ToggleMute));
        assert_eq!(map_key(Key::C), Some(KeyAction::ToggleCinematic));
        assert_eq!(map_key(Key::Escape), Some(KeyAction::ExitFullscreen));
        assert_eq!(map_key(Key::Other), None);
    }

    #[test]
    fn test_escape_does_not_suppress_default() {
        assert!(suppresses_default(Key::Space));
        assert!(suppresses_default(Key::C));
        assert!(!suppresses_default(Key::Escape));
        assert!(!suppresses_default(Key::Other));
    }
}
