//! Simulated media element
//!
//! A headless stand-in for the page's video element. The harness binary
//! advances it with a wall-clock delta each tick; tests advance it
//! directly. Events accumulate internally and are drained by the host
//! loop, which mirrors how the browser queues media events between
//! callbacks.

use crate::media::{MediaElement, MediaEvent, TimeRange};
use parking_lot::Mutex;

/// How far ahead of the playhead the simulated buffer extends
const BUFFER_AHEAD_SECS: f64 = 30.0;

#[derive(Debug)]
struct Inner {
    current_time: f64,
    duration: f64,
    paused: bool,
    ended: bool,
    muted: bool,
    volume: f64,
    filter: String,
    buffered: Vec<TimeRange>,
    pending: Vec<MediaEvent>,
}

/// Simulated media element for the headless harness and tests
pub struct SimulatedMedia {
    inner: Mutex<Inner>,
}

impl SimulatedMedia {
    /// Create a simulated element with a known duration
    ///
    /// Metadata is available immediately, so a `MetadataLoaded` event is
    /// queued right away.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current_time: 0.0,
                duration: duration_secs,
                paused: true,
                ended: false,
                muted: false,
                volume: 1.0,
                filter: String::new(),
                buffered: vec![TimeRange {
                    start: 0.0,
                    end: BUFFER_AHEAD_SECS.min(duration_secs),
                }],
                pending: vec![MediaEvent::MetadataLoaded],
            }),
        }
    }

    /// Advance the simulation by `dt` seconds of wall time
    ///
    /// While playing this moves the playhead, extends the buffered range,
    /// and queues `TimeUpdate`/`BufferProgress` events. Reaching the end
    /// of the media marks the element ended and queues `Ended`.
    pub fn advance(&self, dt: f64) {
        let mut inner = self.inner.lock();
        if inner.paused || inner.ended {
            return;
        }

        inner.current_time += dt;
        if inner.current_time >= inner.duration {
            // The paused flag stays false at end of stream, matching the
            // media element contract; only play()/pause() flip it.
            inner.current_time = inner.duration;
            inner.ended = true;
            inner.pending.push(MediaEvent::TimeUpdate);
            inner.pending.push(MediaEvent::Ended);
            return;
        }

        let buffer_end = (inner.current_time + BUFFER_AHEAD_SECS).min(inner.duration);
        if let Some(range) = inner.buffered.last_mut() {
            if buffer_end > range.end {
                range.end = buffer_end;
                inner.pending.push(MediaEvent::BufferProgress);
            }
        }
        inner.pending.push(MediaEvent::TimeUpdate);
    }

    /// Drain events queued since the last call
    pub fn take_events(&self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.inner.lock().pending)
    }

    /// Whether playback has run past the end of the media
    pub fn is_ended(&self) -> bool {
        self.inner.lock().ended
    }

    /// Replace the buffered ranges, queuing a `BufferProgress` event
    pub fn set_buffered(&self, ranges: Vec<TimeRange>) {
        let mut inner = self.inner.lock();
        inner.buffered = ranges;
        inner.pending.push(MediaEvent::BufferProgress);
    }
}

impl MediaElement for SimulatedMedia {
    fn play(&self) {
        let mut inner = self.inner.lock();
        if inner.paused {
            inner.paused = false;
            inner.ended = false;
            inner.pending.push(MediaEvent::Play);
        }
    }

    fn pause(&self) {
        let mut inner = self.inner.lock();
        if !inner.paused {
            inner.paused = true;
            inner.pending.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.inner.lock().paused
    }

    fn current_time(&self) -> f64 {
        self.inner.lock().current_time
    }

    fn set_current_time(&self, secs: f64) {
        // Stored verbatim so tests can observe the exact requested
        // position; a real element clamps into its seekable range.
        let mut inner = self.inner.lock();
        inner.current_time = secs;
        inner.pending.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.inner.lock().duration
    }

    fn volume(&self) -> f64 {
        self.inner.lock().volume
    }

    fn set_volume(&self, volume: f64) {
        let mut inner = self.inner.lock();
        inner.volume = volume.clamp(0.0, 1.0);
        inner.pending.push(MediaEvent::VolumeChanged);
    }

    fn is_muted(&self) -> bool {
        self.inner.lock().muted
    }

    fn set_muted(&self, muted: bool) {
        let mut inner = self.inner.lock();
        if inner.muted != muted {
            inner.muted = muted;
            inner.pending.push(MediaEvent::VolumeChanged);
        }
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.inner.lock().buffered.clone()
    }

    fn filter(&self) -> String {
        self.inner.lock().filter.clone()
    }

    fn set_filter(&self, filter: &str) {
        self.inner.lock().filter = filter.to_string();
    }
}
