//! View layer for the cinema playback controller
//!
//! The controller never touches page markup directly; it renders through
//! the `ControlSurface` trait, whose implementation owns the actual
//! targets (icons, progress fills, clock text, overlays, the quality
//! widgets). A surface is free to ignore any call for a target it does
//! not have, matching the movie page's tolerance of missing elements.

pub mod effects;
pub mod quality;
pub mod reflector;

pub use quality::QualitySelector;

use log::debug;

/// Play/pause button icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Volume button icon, three tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Muted or zero volume
    Muted,

    /// Volume in (0.0, 0.5)
    Low,

    /// Volume in [0.5, 1.0]
    Full,
}

/// Fullscreen button icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Expand,
    Compress,
}

/// Transient percentage indicator kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Volume,
    Brightness,
}

/// Direction flashed after a seek gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekDirection {
    Left,
    Right,
}

/// Render targets of the playback page
pub trait ControlSurface: Send {
    /// Switch the play/pause icon
    fn set_play_icon(&mut self, icon: PlayIcon);

    /// Switch the volume icon tier
    fn set_volume_icon(&mut self, icon: VolumeIcon);

    /// Switch the fullscreen icon
    fn set_fullscreen_icon(&mut self, icon: FullscreenIcon);

    /// Set the progress fill width as a percentage of the bar
    fn set_progress_percent(&mut self, percent: f64);

    /// Set the buffer fill width as a percentage of the bar
    fn set_buffer_percent(&mut self, percent: f64);

    /// Set the elapsed-time clock text
    fn set_elapsed_text(&mut self, text: &str);

    /// Set the total-duration clock text
    fn set_total_text(&mut self, text: &str);

    /// Hide or reveal the control overlay
    fn set_controls_hidden(&mut self, hidden: bool);

    /// Activate or deactivate the cinematic letterbox and vignette
    fn set_cinematic_active(&mut self, active: bool);

    /// Show a transient percentage indicator
    fn show_indicator(&mut self, kind: IndicatorKind, percent: u32);

    /// Fade out a transient percentage indicator
    fn hide_indicator(&mut self, kind: IndicatorKind);

    /// Flash a seek direction indicator
    fn show_seek_indicator(&mut self, direction: SeekDirection);

    /// Stop flashing a seek direction indicator
    fn hide_seek_indicator(&mut self, direction: SeekDirection);

    /// Show or hide the end-of-playback overlay
    fn set_ending_overlay(&mut self, active: bool);

    /// Show or hide the transient brand animation overlay
    fn set_brand_overlay(&mut self, active: bool);

    /// Set the quality button label
    fn set_quality_label(&mut self, label: &str);

    /// Mark a quality option active, clearing any previous one
    fn set_active_quality(&mut self, quality: &str);

    /// Open or close the quality dropdown
    fn set_quality_dropdown_open(&mut self, open: bool);

    /// Leave the playback page for the library root
    fn navigate_to_library(&mut self);
}

/// Surface that logs every update, used by the headless harness
pub struct LogSurface;

impl ControlSurface for LogSurface {
    fn set_play_icon(&mut self, icon: PlayIcon) {
        debug!("surface: play icon -> {:?}", icon);
    }

    fn set_volume_icon(&mut self, icon: VolumeIcon) {
        debug!("surface: volume icon -> {:?}", icon);
    }

    fn set_fullscreen_icon(&mut self, icon: FullscreenIcon) {
        debug!("surface: fullscreen icon -> {:?}", icon);
    }

    fn set_progress_percent(&mut self, percent: f64) {
        debug!("surface: progress {:.1}%", percent);
    }

    fn set_buffer_percent(&mut self, percent: f64) {
        debug!("surface: buffered {:.1}%", percent);
    }

    fn set_elapsed_text(&mut self, text: &str) {
        debug!("surface: elapsed {}", text);
    }

    fn set_total_text(&mut self, text: &str) {
        debug!("surface: total {}", text);
    }

    fn set_controls_hidden(&mut self, hidden: bool) {
        debug!("surface: controls hidden -> {}", hidden);
    }

    fn set_cinematic_active(&mut self, active: bool) {
        debug!("surface: cinematic mode -> {}", active);
    }

    fn show_indicator(&mut self, kind: IndicatorKind, percent: u32) {
        debug!("surface: {:?} indicator {}%", kind, percent);
    }

    fn hide_indicator(&mut self, kind: IndicatorKind) {
        debug!("surface: {:?} indicator faded", kind);
    }

    fn show_seek_indicator(&mut self, direction: SeekDirection) {
        debug!("surface: seek indicator {:?}", direction);
    }

    fn hide_seek_indicator(&mut self, direction: SeekDirection) {
        debug!("surface: seek indicator {:?} cleared", direction);
    }

    fn set_ending_overlay(&mut self, active: bool) {
        debug!("surface: ending overlay -> {}", active);
    }

    fn set_brand_overlay(&mut self, active: bool) {
        debug!("surface: brand overlay -> {}", active);
    }

    fn set_quality_label(&mut self, label: &str) {
        debug!("surface: quality label {}", label);
    }

    fn set_active_quality(&mut self, quality: &str) {
        debug!("surface: active quality {}", quality);
    }

    fn set_quality_dropdown_open(&mut self, open: bool) {
        debug!("surface: quality dropdown open -> {}", open);
    }

    fn navigate_to_library(&mut self) {
        debug!("surface: navigating to library root");
    }
}
