//! Deterministic timer queue
//!
//! The browser timers the playback page leans on (`setTimeout` /
//! `setInterval`) become a queue of due instants keyed by timer kind.
//! The host loop polls the queue with the current instant and the
//! controller reacts to whatever fired. Keying by kind gives the
//! cancel-and-reschedule semantics the overlay needs for free: at most
//! one timer of a kind is ever pending, and scheduling again resets it.

use crate::view::SeekDirection;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Every timer the controller schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Idle timer for the auto-hide overlay
    AutoHide,

    /// Recurring progress persistence trigger
    ProgressSave,

    /// Layout settle delay after an orientation change
    OrientationSettle,

    /// Fade of the transient volume indicator
    VolumeIndicatorFade,

    /// Fade of the transient brightness indicator
    BrightnessIndicatorFade,

    /// Clear of a flashed seek direction indicator
    SeekFlash(SeekDirection),

    /// Reveal of the ending overlay after playback ends
    EndingReveal,

    /// Hide of the transient brand animation overlay
    BrandOverlayHide,

    /// Navigation back to the library after the ending sequence
    ReturnToLibrary,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Instant,
    interval: Option<Duration>,
}

/// Queue of pending timers keyed by kind
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: HashMap<TimerKind, Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer, replacing any pending timer of the
    /// same kind
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration, now: Instant) {
        self.entries.insert(
            kind,
            Entry {
                due: now + delay,
                interval: None,
            },
        );
    }

    /// Schedule a recurring timer, replacing any pending timer of the
    /// same kind
    pub fn schedule_repeating(&mut self, kind: TimerKind, interval: Duration, now: Instant) {
        self.entries.insert(
            kind,
            Entry {
                due: now + interval,
                interval: Some(interval),
            },
        );
    }

    /// Cancel a pending timer
    pub fn cancel(&mut self, kind: TimerKind) {
        self.entries.remove(&kind);
    }

    /// Cancel everything; used at teardown so no callback fires after
    /// navigation
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Whether a timer of this kind is pending
    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Collect timers due at `now`, in firing order
    ///
    /// One-shot timers are removed; recurring timers are rescheduled one
    /// interval past `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(TimerKind, Entry)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= now)
            .map(|(kind, entry)| (*kind, *entry))
            .collect();

        due.sort_by_key(|(_, entry)| entry.due);

        for (kind, entry) in &due {
            match entry.interval {
                Some(interval) => {
                    self.entries.insert(
                        *kind,
                        Entry {
                            due: now + interval,
                            interval: Some(interval),
                        },
                    );
                }
                None => {
                    self.entries.remove(kind);
                }
            }
        }

        due.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule(TimerKind::AutoHide, Duration::from_secs(3), t0);
        assert!(queue.poll(t0 + Duration::from_secs(2)).is_empty());

        let fired = queue.poll(t0 + Duration::from_secs(3));
        assert_eq!(fired, vec![TimerKind::AutoHide]);
        assert!(!queue.is_scheduled(TimerKind::AutoHide));
    }

    #[test]
    fn test_reschedule_resets_deadline() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule(TimerKind::AutoHide, Duration::from_secs(3), t0);
        queue.schedule(
            TimerKind::AutoHide,
            Duration::from_secs(3),
            t0 + Duration::from_secs(2),
        );

        // Old deadline no longer fires
        assert!(queue.poll(t0 + Duration::from_secs(3)).is_empty());
        assert_eq!(
            queue.poll(t0 + Duration::from_secs(5)),
            vec![TimerKind::AutoHide]
        );
    }

    #[test]
    fn test_repeating_timer_reschedules() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule_repeating(TimerKind::ProgressSave, Duration::from_secs(10), t0);

        assert_eq!(
            queue.poll(t0 + Duration::from_secs(10)),
            vec![TimerKind::ProgressSave]
        );
        assert!(queue.is_scheduled(TimerKind::ProgressSave));
        assert_eq!(
            queue.poll(t0 + Duration::from_secs(20)),
            vec![TimerKind::ProgressSave]
        );
    }

    #[test]
    fn test_firing_order_by_deadline() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule(TimerKind::ReturnToLibrary, Duration::from_secs(8), t0);
        queue.schedule(TimerKind::EndingReveal, Duration::from_secs(1), t0);

        let fired = queue.poll(t0 + Duration::from_secs(9));
        assert_eq!(fired, vec![TimerKind::EndingReveal, TimerKind::ReturnToLibrary]);
    }

    #[test]
    fn test_seek_flash_keyed_per_direction() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule(TimerKind::SeekFlash(SeekDirection::Left), Duration::from_secs(1), t0);
        queue.schedule(TimerKind::SeekFlash(SeekDirection::Right), Duration::from_secs(2), t0);

        // Directions are independent keys
        assert_eq!(
            queue.poll(t0 + Duration::from_secs(1)),
            vec![TimerKind::SeekFlash(SeekDirection::Left)]
        );
        assert!(queue.is_scheduled(TimerKind::SeekFlash(SeekDirection::Right)));
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TimerQueue::new();
        let t0 = Instant::now();

        queue.schedule(TimerKind::AutoHide, Duration::from_secs(3), t0);
        queue.schedule_repeating(TimerKind::ProgressSave, Duration::from_secs(10), t0);
        queue.cancel_all();

        assert!(queue.poll(t0 + Duration::from_secs(60)).is_empty());
    }
}
