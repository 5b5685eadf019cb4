//! Media state reflection
//!
//! Pure helpers that turn media element state into render values: the
//! elapsed/total clock text, progress and buffer fill percentages, the
//! volume icon tier, and the click-to-seek position. The controller calls
//! these on every media lifecycle event.

use crate::media::TimeRange;
use crate::view::VolumeIcon;

/// Format a position in seconds as clock text
///
/// Renders `H:MM:SS` for positions of an hour or more, `M:SS` otherwise.
/// Non-finite input (an unknown duration) renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }

    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Elapsed percentage of the duration, None while the duration is unknown
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if duration.is_finite() && duration > 0.0 {
        Some((current_time / duration) * 100.0)
    } else {
        None
    }
}

/// Buffered percentage from the end of the last buffered range
pub fn buffer_percent(buffered: &[TimeRange], duration: f64) -> Option<f64> {
    let last = buffered.last()?;
    if duration.is_finite() && duration > 0.0 {
        Some((last.end / duration) * 100.0)
    } else {
        None
    }
}

/// Volume icon tier for the current muted flag and volume
pub fn volume_icon(muted: bool, volume: f64) -> VolumeIcon {
    if muted || volume == 0.0 {
        VolumeIcon::Muted
    } else if volume < 0.5 {
        VolumeIcon::Low
    } else {
        VolumeIcon::Full
    }
}

/// Playback position for a click at `offset_x` on a progress bar of
/// `bar_width` pixels
///
/// The computed time is deliberately not clamped to [0, duration]; clicks
/// resolved outside the bar bounds produce out-of-range positions and the
/// media element is left to cope, matching the page's observed behavior.
pub fn click_seek_position(offset_x: f64, bar_width: f64, duration: f64) -> Option<f64> {
    if bar_width <= 0.0 || !duration.is_finite() {
        return None;
    }
    Some((offset_x / bar_width) * duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(599.9), "9:59");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
        assert_eq!(progress_percent(10.0, f64::NAN), None);
        assert_eq!(progress_percent(10.0, 0.0), None);
    }

    #[test]
    fn test_buffer_percent_uses_last_range() {
        let ranges = [
            TimeRange {
                start: 0.0,
                end: 20.0,
            },
            TimeRange {
                start: 40.0,
                end: 90.0,
            },
        ];
        assert_eq!(buffer_percent(&ranges, 180.0), Some(50.0));
        assert_eq!(buffer_percent(&[], 180.0), None);
    }

    #[test]
    fn test_volume_icon_tiers() {
        assert_eq!(volume_icon(true, 0.8), VolumeIcon::Muted);
        assert_eq!(volume_icon(false, 0.0), VolumeIcon::Muted);
        assert_eq!(volume_icon(false, 0.49), VolumeIcon::Low);
        assert_eq!(volume_icon(false, 0.5), VolumeIcon::Full);
        assert_eq!(volume_icon(false, 1.0), VolumeIcon::Full);
    }

    #[test]
    fn test_click_seek_is_unclamped() {
        assert_eq!(click_seek_position(150.0, 300.0, 120.0), Some(60.0));

        // A click resolved past the right edge maps past the duration
        assert_eq!(click_seek_position(450.0, 300.0, 120.0), Some(180.0));

        assert_eq!(click_seek_position(10.0, 0.0, 120.0), None);
        assert_eq!(click_seek_position(10.0, 300.0, f64::NAN), None);
    }
}
