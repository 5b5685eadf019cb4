//! Auto-hide overlay state machine
//!
//! The control overlay is either VISIBLE or HIDDEN. Hiding happens only
//! when the idle timer elapses while media is playing; if playback is
//! paused the timer still fires but the transition is suppressed, so the
//! controls stay up indefinitely. Any qualifying activity (pointer
//! movement, touch, key press, a settled orientation change) reveals the
//! overlay and resets the idle timer, which the controller owns.

/// Overlay visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Visible,
    Hidden,
}

/// Two-state machine for the control overlay
#[derive(Debug)]
pub struct OverlayStateMachine {
    state: OverlayState,
}

impl OverlayStateMachine {
    /// Start in the VISIBLE state
    pub fn new() -> Self {
        Self {
            state: OverlayState::Visible,
        }
    }

    /// Current state
    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// Transition to VISIBLE on qualifying activity
    ///
    /// Returns true when the state actually changed. VISIBLE→VISIBLE is a
    /// valid self-transition (it resets the idle timer) but reports false.
    pub fn reveal(&mut self) -> bool {
        let changed = self.state == OverlayState::Hidden;
        self.state = OverlayState::Visible;
        changed
    }

    /// Idle timer elapsed; transition to HIDDEN only while playing
    ///
    /// Returns true when the overlay became hidden.
    pub fn idle_elapsed(&mut self, playing: bool) -> bool {
        if playing && self.state == OverlayState::Visible {
            self.state = OverlayState::Hidden;
            true
        } else {
            false
        }
    }
}

impl Default for OverlayStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_visible() {
        let machine = OverlayStateMachine::new();
        assert_eq!(machine.state(), OverlayState::Visible);
    }

    #[test]
    fn test_hide_only_while_playing() {
        let mut machine = OverlayStateMachine::new();

        // Paused: transition suppressed
        assert!(!machine.idle_elapsed(false));
        assert!(machine.is_visible());

        // Playing: transition fires
        assert!(machine.idle_elapsed(true));
        assert_eq!(machine.state(), OverlayState::Hidden);

        // Already hidden: nothing to do
        assert!(!machine.idle_elapsed(true));
    }

    #[test]
    fn test_reveal_reports_changes_only() {
        let mut machine = OverlayStateMachine::new();

        // Self-transition resets the timer but reports no change
        assert!(!machine.reveal());

        machine.idle_elapsed(true);
        assert!(machine.reveal());
        assert!(machine.is_visible());
    }
}
