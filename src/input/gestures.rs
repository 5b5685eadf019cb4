//! Touch gesture recognizer
//!
//! Classifies touch interactions on the player: a short tap toggles
//! play/pause, a double tap toggles fullscreen, and swipes past the
//! threshold become directional gestures. Horizontal swipes seek;
//! vertical swipes split the viewport in half, brightness on the left
//! and volume on the right.

use std::time::{Duration, Instant};

/// Classified touch gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Displacement stayed within the threshold
    Tap,

    /// Horizontal swipe; `forward` is true for a rightward swipe
    Horizontal { forward: bool },

    /// Vertical swipe; `up` is true for an upward swipe, `left_half`
    /// is true when the gesture started in the left viewport half
    Vertical { up: bool, left_half: bool },
}

/// Recognizes taps, double taps and directional swipes
pub struct GestureRecognizer {
    /// Minimum displacement in pixels to classify as a swipe
    threshold: f64,

    /// Maximum gap between taps counting as a double tap
    double_tap_window: Duration,

    /// Viewport width used to split vertical swipes into halves
    viewport_width: f64,

    /// Anchor of the gesture in progress, valid between touch start
    /// and touch end
    touch_start: Option<(f64, f64)>,

    /// Timestamp of the previous touch start, for double tap detection
    last_tap: Option<Instant>,
}

impl GestureRecognizer {
    /// Create a recognizer with the given tuning
    pub fn new(threshold: f64, double_tap_window_ms: u64, viewport_width: f64) -> Self {
        Self {
            threshold,
            double_tap_window: Duration::from_millis(double_tap_window_ms),
            viewport_width,
            touch_start: None,
            last_tap: None,
        }
    }

    /// Record a touch start
    ///
    /// Returns true when this touch completes a double tap, i.e. it
    /// lands within the double-tap window of the previous touch start.
    /// A double tap consumes the whole gesture: no anchor is armed, so
    /// the following touch end classifies as nothing.
    pub fn on_touch_start(&mut self, x: f64, y: f64, now: Instant) -> bool {
        let double_tap = self
            .last_tap
            .is_some_and(|last| now.duration_since(last) < self.double_tap_window);
        self.last_tap = Some(now);

        self.touch_start = if double_tap { None } else { Some((x, y)) };
        double_tap
    }

    /// Complete the gesture and classify it
    ///
    /// Returns None when no touch start was recorded. The anchor is
    /// cleared either way; it is only valid for a single gesture.
    pub fn on_touch_end(&mut self, x: f64, y: f64) -> Option<Gesture> {
        let (start_x, start_y) = self.touch_start.take()?;

        let delta_x = x - start_x;
        let delta_y = y - start_y;
        let abs_x = delta_x.abs();
        let abs_y = delta_y.abs();

        if abs_x <= self.threshold && abs_y <= self.threshold {
            return Some(Gesture::Tap);
        }

        if abs_x > abs_y {
            Some(Gesture::Horizontal {
                forward: delta_x > 0.0,
            })
        } else {
            Some(Gesture::Vertical {
                up: delta_y < 0.0,
                left_half: start_x < self.viewport_width / 2.0,
            })
        }
    }

    /// Update the viewport width after a layout change
    pub fn set_viewport_width(&mut self, width: f64) {
        if width > 0.0 {
            self.viewport_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(50.0, 500, 1280.0)
    }

    #[test]
    fn test_tap_within_threshold() {
        let mut rec = recognizer();
        rec.on_touch_start(100.0, 100.0, Instant::now());
        assert_eq!(rec.on_touch_end(130.0, 120.0), Some(Gesture::Tap));
    }

    #[test]
    fn test_horizontal_swipe_classification() {
        let mut rec = recognizer();
        let t0 = Instant::now();

        rec.on_touch_start(100.0, 100.0, t0);
        assert_eq!(
            rec.on_touch_end(160.0, 110.0),
            Some(Gesture::Horizontal { forward: true })
        );

        rec.on_touch_start(300.0, 100.0, t0 + Duration::from_millis(1000));
        assert_eq!(
            rec.on_touch_end(220.0, 90.0),
            Some(Gesture::Horizontal { forward: false })
        );
    }

    #[test]
    fn test_vertical_swipe_halves() {
        let mut rec = recognizer();
        let t0 = Instant::now();

        // Left half, upward: brightness up
        rec.on_touch_start(200.0, 400.0, t0);
        assert_eq!(
            rec.on_touch_end(210.0, 300.0),
            Some(Gesture::Vertical {
                up: true,
                left_half: true
            })
        );

        // Right half, downward: volume down
        rec.on_touch_start(900.0, 300.0, t0 + Duration::from_millis(1000));
        assert_eq!(
            rec.on_touch_end(890.0, 420.0),
            Some(Gesture::Vertical {
                up: false,
                left_half: false
            })
        );
    }

    #[test]
    fn test_quick_second_touch_after_swipe_counts_as_double_tap() {
        let mut rec = recognizer();
        let t0 = Instant::now();

        // The double-tap clock runs from every touch start, swipe or
        // not, so a quick follow-up touch is consumed as a double tap
        // and never classifies.
        rec.on_touch_start(100.0, 100.0, t0);
        assert_eq!(
            rec.on_touch_end(160.0, 110.0),
            Some(Gesture::Horizontal { forward: true })
        );

        assert!(rec.on_touch_start(300.0, 100.0, t0 + Duration::from_millis(200)));
        assert_eq!(rec.on_touch_end(220.0, 90.0), None);
    }

    #[test]
    fn test_double_tap_detection() {
        let mut rec = recognizer();
        let t0 = Instant::now();

        assert!(!rec.on_touch_start(100.0, 100.0, t0));
        assert!(rec.on_touch_start(102.0, 101.0, t0 + Duration::from_millis(300)));

        // The double tap left no anchor behind
        assert_eq!(rec.on_touch_end(102.0, 101.0), None);

        // A third tap outside the window starts over
        assert!(!rec.on_touch_start(100.0, 100.0, t0 + Duration::from_millis(1200)));
    }

    #[test]
    fn test_touch_end_without_start() {
        let mut rec = recognizer();
        assert_eq!(rec.on_touch_end(10.0, 10.0), None);

        // Anchor is consumed by the first touch end
        rec.on_touch_start(0.0, 0.0, Instant::now());
        rec.on_touch_end(0.0, 0.0);
        assert_eq!(rec.on_touch_end(0.0, 0.0), None);
    }
}
