//! Media element abstraction for the cinema playback controller
//!
//! The controller does not own playback itself; it drives an external
//! media element (on the movie page, the HTML video element). This module
//! defines the trait the controller programs against plus the lifecycle
//! events the element reports back. A simulated implementation backs the
//! headless harness and the test suite.

mod simulated;

pub use simulated::SimulatedMedia;

/// A single buffered time range in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Start of the range in seconds
    pub start: f64,

    /// End of the range in seconds
    pub end: f64,
}

/// Lifecycle events reported by the media element
///
/// These mirror the media events the controller subscribes to: metadata
/// arrival, position ticks, play/pause flips, buffering progress, volume
/// changes, and end of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and stream metadata became known
    MetadataLoaded,

    /// Playback position advanced or was set
    TimeUpdate,

    /// Playback started or resumed
    Play,

    /// Playback paused
    Pause,

    /// Playback reached the end of the media
    Ended,

    /// More data was buffered
    BufferProgress,

    /// Volume or muted flag changed
    VolumeChanged,
}

/// External media element driven by the controller
///
/// Methods take `&self`: the element is shared between the controller and
/// the host event loop, and mutation goes through interior mutability the
/// same way a DOM element reference would.
pub trait MediaElement: Send + Sync {
    /// Start or resume playback
    fn play(&self);

    /// Pause playback
    fn pause(&self);

    /// Whether playback is currently paused
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Set the playback position in seconds
    fn set_current_time(&self, secs: f64);

    /// Total duration in seconds, NaN until metadata is known
    fn duration(&self) -> f64;

    /// Current volume in [0.0, 1.0]
    fn volume(&self) -> f64;

    /// Set the volume, clamped by the element to [0.0, 1.0]
    fn set_volume(&self, volume: f64);

    /// Whether audio is muted
    fn is_muted(&self) -> bool;

    /// Set the muted flag
    fn set_muted(&self, muted: bool);

    /// Buffered time ranges, in playback order
    fn buffered(&self) -> Vec<TimeRange>;

    /// Current presentation filter string (e.g. `"brightness(1.2)"`)
    fn filter(&self) -> String;

    /// Replace the presentation filter string
    fn set_filter(&self, filter: &str);
}
