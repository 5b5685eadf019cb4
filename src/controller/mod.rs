//! Playback controller
//!
//! This module provides the PlaybackController that wires touch,
//! keyboard and pointer input to the media element and reflects media
//! state back onto the control surface. It owns the auto-hide overlay
//! state machine, the timer queue, the fullscreen driver and the
//! progress sink; the host event loop feeds it `ControlEvent`s and polls
//! its timers.

mod timers;

pub use timers::{TimerKind, TimerQueue};

use crate::fullscreen::{FullscreenDriver, FullscreenHost};
use crate::input::{
    map_key, suppresses_default, ControlEvent, Disposition, Gesture, GestureRecognizer, KeyAction,
};
use crate::media::{MediaElement, MediaEvent};
use crate::overlay::OverlayStateMachine;
use crate::progress::{resolve_filename, should_persist, ProgressSink, ProgressSnapshot};
use crate::utils::config::Config;
use crate::utils::error::Result;
use crate::view::{
    effects, reflector, ControlSurface, FullscreenIcon, IndicatorKind, PlayIcon, QualitySelector,
    SeekDirection,
};

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Delay between end of playback and the ending overlay reveal
const ENDING_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// How long the brand animation overlay stays up once revealed
const BRAND_OVERLAY_VISIBLE: Duration = Duration::from_secs(3);

/// Delay between end of playback and navigation back to the library
const RETURN_TO_LIBRARY_DELAY: Duration = Duration::from_secs(8);

/// Clamp a volume adjustment into the valid range
fn clamped_volume(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(0.0, 1.0)
}

/// Controller wiring input events to the media element and surface
pub struct PlaybackController {
    media: Arc<dyn MediaElement>,
    surface: Box<dyn ControlSurface>,
    fullscreen: FullscreenDriver,
    sink: Box<dyn ProgressSink>,
    config: Config,

    timers: TimerQueue,
    gestures: GestureRecognizer,
    overlay: OverlayStateMachine,
    quality: QualitySelector,

    /// Letterbox/vignette effect active
    cinematic_mode: bool,

    /// Volume to restore on unmute, updated when muting
    volume_before_mute: f64,

    /// Filename reported in progress snapshots
    filename: String,

    /// Set after teardown; no timers or events are processed past this
    shut_down: bool,
}

impl PlaybackController {
    /// Create a controller around a media element
    ///
    /// Probes the fullscreen host, resolves the progress filename, and
    /// starts the recurring save timer plus the initial auto-hide timer.
    pub fn new(
        media: Arc<dyn MediaElement>,
        mut surface: Box<dyn ControlSurface>,
        fullscreen_host: Box<dyn FullscreenHost>,
        sink: Box<dyn ProgressSink>,
        config: Config,
        now: Instant,
    ) -> Result<Self> {
        config.validate()?;

        let filename = resolve_filename(
            config.persistence.filename.as_deref(),
            &config.persistence.page_path,
        );
        info!("Initializing playback controller for {}", filename);

        let fullscreen = FullscreenDriver::probe(fullscreen_host);

        let gestures = GestureRecognizer::new(
            config.gestures.swipe_threshold_px,
            config.gestures.double_tap_window_ms,
            config.gestures.viewport_width_px,
        );

        let mut timers = TimerQueue::new();
        timers.schedule_repeating(
            TimerKind::ProgressSave,
            Duration::from_secs(config.persistence.save_interval_secs),
            now,
        );
        timers.schedule(
            TimerKind::AutoHide,
            Duration::from_millis(config.overlay.auto_hide_ms),
            now,
        );

        surface.set_controls_hidden(false);

        Ok(Self {
            media,
            surface,
            fullscreen,
            sink,
            config,
            timers,
            gestures,
            overlay: OverlayStateMachine::new(),
            quality: QualitySelector::new(),
            cinematic_mode: false,
            volume_before_mute: 1.0,
            filename,
            shut_down: false,
        })
    }

    /// Handle an event delivered by the host loop
    ///
    /// Returns whether the host default for the event must be suppressed.
    pub fn handle_event(&mut self, event: ControlEvent, now: Instant) -> Result<Disposition> {
        if self.shut_down {
            return Ok(Disposition::Default);
        }

        match event {
            ControlEvent::TouchStart { x, y } => {
                self.show_controls(now);
                if self.gestures.on_touch_start(x, y, now) {
                    self.toggle_fullscreen();
                    return Ok(Disposition::Consumed);
                }
                Ok(Disposition::Default)
            }

            // Native scroll/zoom is suppressed while a gesture is live
            ControlEvent::TouchMove => Ok(Disposition::Consumed),

            ControlEvent::TouchEnd { x, y } => {
                match self.gestures.on_touch_end(x, y) {
                    Some(Gesture::Tap) => self.toggle_play_pause(),
                    Some(Gesture::Horizontal { forward }) => {
                        let step = self.config.playback.seek_step_secs;
                        self.skip_time(if forward { step } else { -step }, now);
                    }
                    Some(Gesture::Vertical { up, left_half }) => {
                        if left_half {
                            let step = self.config.playback.brightness_step;
                            self.adjust_brightness(if up { step } else { -step }, now);
                        } else {
                            let step = self.config.playback.volume_step;
                            self.adjust_volume(if up { step } else { -step }, now);
                        }
                    }
                    None => {}
                }
                Ok(Disposition::Default)
            }

            ControlEvent::PointerMoved { .. } => {
                self.show_controls(now);
                Ok(Disposition::Default)
            }

            ControlEvent::KeyPressed { key } => {
                if let Some(action) = map_key(key) {
                    self.run_key_action(action, now);
                }
                self.show_controls(now);
                Ok(if suppresses_default(key) {
                    Disposition::Consumed
                } else {
                    Disposition::Default
                })
            }

            ControlEvent::ProgressBarClick {
                offset_x,
                bar_width,
            } => {
                let duration = self.media.duration();
                if let Some(position) = reflector::click_seek_position(offset_x, bar_width, duration)
                {
                    // Intentionally unclamped; see DESIGN.md on the
                    // observed seek-by-click behavior.
                    self.media.set_current_time(position);
                }
                Ok(Disposition::Default)
            }

            ControlEvent::QualitySelected { quality } => {
                self.quality.select(&quality, self.surface.as_mut());
                Ok(Disposition::Default)
            }

            ControlEvent::OutsideClick => {
                self.quality.close(self.surface.as_mut());
                Ok(Disposition::Default)
            }

            ControlEvent::OrientationChanged => {
                self.timers.schedule(
                    TimerKind::OrientationSettle,
                    Duration::from_millis(self.config.overlay.orientation_settle_ms),
                    now,
                );
                Ok(Disposition::Default)
            }

            ControlEvent::PageUnload => {
                self.cleanup();
                Ok(Disposition::Default)
            }

            ControlEvent::Media(media_event) => {
                self.handle_media_event(media_event, now);
                Ok(Disposition::Default)
            }

            ControlEvent::FullscreenChanged => {
                self.update_fullscreen_icon();
                Ok(Disposition::Default)
            }
        }
    }

    /// Fire timers that are due and run their callbacks
    pub fn tick(&mut self, now: Instant) {
        if self.shut_down {
            return;
        }

        for kind in self.timers.poll(now) {
            match kind {
                TimerKind::AutoHide => {
                    if self.overlay.idle_elapsed(!self.media.is_paused()) {
                        self.surface.set_controls_hidden(true);
                    }
                }

                TimerKind::ProgressSave => self.save_progress(),

                TimerKind::OrientationSettle => self.show_controls(now),

                TimerKind::VolumeIndicatorFade => {
                    self.surface.hide_indicator(IndicatorKind::Volume);
                }

                TimerKind::BrightnessIndicatorFade => {
                    self.surface.hide_indicator(IndicatorKind::Brightness);
                }

                TimerKind::SeekFlash(direction) => {
                    self.surface.hide_seek_indicator(direction);
                }

                TimerKind::EndingReveal => {
                    self.surface.set_ending_overlay(true);
                    self.surface.set_brand_overlay(true);
                    self.timers
                        .schedule(TimerKind::BrandOverlayHide, BRAND_OVERLAY_VISIBLE, now);
                }

                TimerKind::BrandOverlayHide => {
                    self.surface.set_brand_overlay(false);
                }

                TimerKind::ReturnToLibrary => {
                    self.go_back();
                    return;
                }
            }
        }
    }

    /// Whether the controller has torn down and left the page
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Whether any fullscreen variant is active
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Whether the cinematic effect is active
    pub fn cinematic_mode(&self) -> bool {
        self.cinematic_mode
    }

    fn handle_media_event(&mut self, event: MediaEvent, now: Instant) {
        match event {
            MediaEvent::MetadataLoaded => {
                let text = reflector::format_time(self.media.duration());
                self.surface.set_total_text(&text);
            }

            MediaEvent::TimeUpdate => {
                let current = self.media.current_time();
                let duration = self.media.duration();

                if let Some(percent) = reflector::progress_percent(current, duration) {
                    self.surface.set_progress_percent(percent);
                }
                let text = reflector::format_time(current);
                self.surface.set_elapsed_text(&text);
            }

            MediaEvent::Play => {
                self.surface.set_play_icon(PlayIcon::Pause);
                if !self.cinematic_mode {
                    self.set_cinematic(true);
                }
            }

            MediaEvent::Pause => {
                self.surface.set_play_icon(PlayIcon::Play);
            }

            MediaEvent::Ended => self.handle_movie_end(now),

            MediaEvent::BufferProgress => {
                let buffered = self.media.buffered();
                if let Some(percent) = reflector::buffer_percent(&buffered, self.media.duration()) {
                    self.surface.set_buffer_percent(percent);
                }
            }

            MediaEvent::VolumeChanged => {
                let icon = reflector::volume_icon(self.media.is_muted(), self.media.volume());
                self.surface.set_volume_icon(icon);
            }
        }
    }

    fn run_key_action(&mut self, action: KeyAction, now: Instant) {
        let volume_step = self.config.playback.volume_step;
        let seek_step = self.config.playback.seek_step_secs;

        match action {
            KeyAction::TogglePlayPause => self.toggle_play_pause(),
            KeyAction::SkipBackward => self.skip_time(-seek_step, now),
            KeyAction::SkipForward => self.skip_time(seek_step, now),
            KeyAction::VolumeUp => self.adjust_volume(volume_step, now),
            KeyAction::VolumeDown => self.adjust_volume(-volume_step, now),
            KeyAction::ToggleFullscreen => self.toggle_fullscreen(),
            KeyAction::ToggleMute => self.toggle_mute(),
            KeyAction::ToggleCinematic => self.set_cinematic(!self.cinematic_mode),
            KeyAction::ExitFullscreen => {
                if self.fullscreen.is_fullscreen() {
                    if let Err(e) = self.fullscreen.exit() {
                        warn!("Exiting fullscreen failed: {}", e);
                    }
                    self.update_fullscreen_icon();
                }
            }
        }
    }

    fn toggle_play_pause(&mut self) {
        if self.media.is_paused() {
            self.media.play();
        } else {
            self.media.pause();
        }
    }

    /// Skip the playback position, clamped to [0, duration]
    fn skip_time(&mut self, delta_secs: f64, now: Instant) {
        let current = self.media.current_time();
        let duration = self.media.duration();

        let target = if duration.is_finite() {
            (current + delta_secs).clamp(0.0, duration)
        } else {
            (current + delta_secs).max(0.0)
        };
        self.media.set_current_time(target);

        let direction = if delta_secs > 0.0 {
            SeekDirection::Right
        } else {
            SeekDirection::Left
        };
        self.surface.show_seek_indicator(direction);
        self.timers.schedule(
            TimerKind::SeekFlash(direction),
            Duration::from_millis(self.config.overlay.gesture_flash_ms),
            now,
        );
    }

    /// Adjust the volume, clamped to [0, 1], with a debounced indicator
    fn adjust_volume(&mut self, delta: f64, now: Instant) {
        let volume = clamped_volume(self.media.volume(), delta);
        self.media.set_volume(volume);

        self.surface
            .show_indicator(IndicatorKind::Volume, effects::indicator_percent(volume));
        self.timers.schedule(
            TimerKind::VolumeIndicatorFade,
            Duration::from_millis(self.config.overlay.indicator_fade_ms),
            now,
        );
    }

    /// Adjust the simulated brightness filter, clamped to [0.1, 2]
    fn adjust_brightness(&mut self, delta: f64, now: Instant) {
        let (filter, value) = effects::adjust_brightness(&self.media.filter(), delta);
        self.media.set_filter(&filter);

        self.surface
            .show_indicator(IndicatorKind::Brightness, effects::indicator_percent(value));
        self.timers.schedule(
            TimerKind::BrightnessIndicatorFade,
            Duration::from_millis(self.config.overlay.indicator_fade_ms),
            now,
        );
    }

    /// Mute, snapshotting the volume, or unmute and restore it
    fn toggle_mute(&mut self) {
        if self.media.is_muted() {
            self.media.set_muted(false);
            self.media.set_volume(self.volume_before_mute);
        } else {
            self.volume_before_mute = self.media.volume();
            self.media.set_muted(true);
        }
    }

    fn toggle_fullscreen(&mut self) {
        if let Err(e) = self.fullscreen.toggle() {
            warn!("Fullscreen toggle failed: {}", e);
        }
        self.update_fullscreen_icon();
    }

    fn update_fullscreen_icon(&mut self) {
        let icon = if self.fullscreen.is_fullscreen() {
            FullscreenIcon::Compress
        } else {
            FullscreenIcon::Expand
        };
        self.surface.set_fullscreen_icon(icon);
    }

    fn set_cinematic(&mut self, active: bool) {
        self.cinematic_mode = active;
        self.surface.set_cinematic_active(active);
    }

    /// Reveal the overlay and reset the idle timer
    fn show_controls(&mut self, now: Instant) {
        self.overlay.reveal();
        self.surface.set_controls_hidden(false);
        self.timers.schedule(
            TimerKind::AutoHide,
            Duration::from_millis(self.config.overlay.auto_hide_ms),
            now,
        );
    }

    /// Persist the playhead if playback is worth snapshotting
    fn save_progress(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();

        if should_persist(self.media.is_paused(), current, duration) {
            let snapshot = ProgressSnapshot::capture(&self.filename, current, duration);
            debug!(
                "Persisting progress {}s/{}s",
                snapshot.current_time, snapshot.duration
            );
            self.sink.submit(snapshot);
        }
    }

    /// Final snapshot plus the timed ending sequence
    fn handle_movie_end(&mut self, now: Instant) {
        info!("Playback ended, starting ending sequence");
        self.save_progress();

        self.timers
            .schedule(TimerKind::EndingReveal, ENDING_REVEAL_DELAY, now);
        self.timers
            .schedule(TimerKind::ReturnToLibrary, RETURN_TO_LIBRARY_DELAY, now);
    }

    /// Tear down and navigate back to the library root
    fn go_back(&mut self) {
        self.cleanup();
        self.surface.navigate_to_library();
        self.shut_down = true;
    }

    /// Cancel all timers so nothing fires after teardown
    fn cleanup(&mut self) {
        self.timers.cancel_all();
    }
}
