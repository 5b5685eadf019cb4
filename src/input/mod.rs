//! Input handling for the cinema playback controller
//!
//! This module defines the events the host delivers to the controller
//! (touch, keyboard, pointer, widget clicks, media and fullscreen
//! notifications) together with the gesture recognizer and keyboard
//! router that classify raw input into playback actions.

pub mod gestures;
pub mod keyboard;

pub use gestures::{Gesture, GestureRecognizer};
pub use keyboard::{map_key, suppresses_default, Key, KeyAction};

use crate::media::MediaEvent;

/// Events delivered to the controller by the host event loop
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A touch gesture started at the given viewport position
    TouchStart { x: f64, y: f64 },

    /// A touch moved while a gesture is in progress
    TouchMove,

    /// A touch gesture ended at the given viewport position
    TouchEnd { x: f64, y: f64 },

    /// The pointer moved over the player region
    PointerMoved { x: f64, y: f64 },

    /// A key was pressed
    KeyPressed { key: Key },

    /// The progress bar was clicked at `offset_x` within a bar of
    /// `bar_width` pixels
    ProgressBarClick { offset_x: f64, bar_width: f64 },

    /// A quality option was selected
    QualitySelected { quality: String },

    /// A click landed outside the quality selector region
    OutsideClick,

    /// The device orientation changed
    OrientationChanged,

    /// The page is being unloaded
    PageUnload,

    /// A media element lifecycle event
    Media(MediaEvent),

    /// A fullscreen change notification from any vendor variant
    FullscreenChanged,
}

/// Whether the controller consumed an input event
///
/// `Consumed` corresponds to suppressing the default host behavior for
/// the event (native scrolling for touch moves, page scrolling for
/// mapped keys, zoom for double taps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The event was handled and the host default must be suppressed
    Consumed,

    /// The host default behavior may proceed
    Default,
}
