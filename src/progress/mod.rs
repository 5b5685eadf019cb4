//! Progress persistence
//!
//! Every few seconds of playback (and once at end of playback) the
//! controller captures a snapshot of the playhead and posts it to the
//! movie server so the library can offer resume-later. Persistence is
//! strictly best-effort: requests are fired and forgotten, failures are
//! logged and never retried, and playback never blocks on the network.

use crate::utils::error::{IntoCinemaError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Snapshot of playback progress sent to the server
///
/// All fields are floored to whole units; the wire shape is fixed by the
/// `/save-progress` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Movie filename the progress belongs to
    pub filename: String,

    /// Playback position in whole seconds
    pub current_time: u64,

    /// Media duration in whole seconds
    pub duration: u64,

    /// Elapsed percentage, 0-100
    pub percentage: u64,
}

impl ProgressSnapshot {
    /// Capture a snapshot from the current playhead
    ///
    /// Seconds are floored before the percentage is computed, so the
    /// percentage is derived from the integer values that go on the wire.
    pub fn capture(filename: &str, current_time: f64, duration: f64) -> Self {
        let current = current_time.floor() as u64;
        let total = duration.floor() as u64;
        let percentage = if total > 0 {
            ((current as f64 / total as f64) * 100.0).floor() as u64
        } else {
            0
        };

        Self {
            filename: filename.to_string(),
            current_time: current,
            duration: total,
            percentage,
        }
    }
}

/// Whether the playhead is worth persisting
///
/// Snapshots are taken only while media is playing with a positive
/// position and a known duration.
pub fn should_persist(paused: bool, current_time: f64, duration: f64) -> bool {
    !paused && current_time > 0.0 && duration.is_finite() && duration > 0.0
}

/// Resolve the filename to report
///
/// An explicit override (the page's injected global) wins; otherwise the
/// last path segment of the playback page URL is used.
pub fn resolve_filename(explicit: Option<&str>, page_path: &str) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => page_path
            .rsplit('/')
            .next()
            .unwrap_or(page_path)
            .to_string(),
    }
}

/// Destination for progress snapshots
pub trait ProgressSink: Send {
    /// Submit a snapshot, fire-and-forget
    fn submit(&self, snapshot: ProgressSnapshot);
}

/// Sink that posts snapshots to the movie server over HTTP
pub struct HttpProgressSink {
    client: reqwest::Client,
    endpoint: String,
    runtime: tokio::runtime::Handle,
}

impl HttpProgressSink {
    /// Create a sink posting to `server_url` + `endpoint_path`
    pub fn new(server_url: &str, endpoint_path: &str, runtime: tokio::runtime::Handle) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .persistence_err("Building HTTP client")?;

        let endpoint = format!(
            "{}{}",
            server_url.trim_end_matches('/'),
            endpoint_path
        );

        Ok(Self {
            client,
            endpoint,
            runtime,
        })
    }
}

impl ProgressSink for HttpProgressSink {
    fn submit(&self, snapshot: ProgressSnapshot) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        // Spawned and never awaited; the controller moves on immediately.
        self.runtime.spawn(async move {
            match client.post(&endpoint).json(&snapshot).send().await {
                Ok(response) => {
                    debug!(
                        "Saved progress {}s/{}s ({}%): {}",
                        snapshot.current_time,
                        snapshot.duration,
                        snapshot.percentage,
                        response.status()
                    );
                }
                Err(e) => {
                    info!("Progress save failed: {}", e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_floors_fields() {
        let snapshot = ProgressSnapshot::capture("movie.mp4", 65.9, 120.7);
        assert_eq!(snapshot.current_time, 65);
        assert_eq!(snapshot.duration, 120);
        assert_eq!(snapshot.percentage, 54); // floor(65/120*100)
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let snapshot = ProgressSnapshot::capture("movie.mp4", 30.0, 120.0);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["filename"], "movie.mp4");
        assert_eq!(json["current_time"], 30);
        assert_eq!(json["duration"], 120);
        assert_eq!(json["percentage"], 25);
    }

    #[test]
    fn test_should_persist_conditions() {
        assert!(should_persist(false, 5.0, 120.0));
        assert!(!should_persist(true, 5.0, 120.0));
        assert!(!should_persist(false, 0.0, 120.0));
        assert!(!should_persist(false, 5.0, f64::NAN));
        assert!(!should_persist(false, 5.0, 0.0));
    }

    #[test]
    fn test_resolve_filename() {
        assert_eq!(
            resolve_filename(Some("override.mp4"), "/watch/other.mp4"),
            "override.mp4"
        );
        assert_eq!(resolve_filename(None, "/watch/movie.mp4"), "movie.mp4");
        assert_eq!(resolve_filename(None, "movie.mp4"), "movie.mp4");
    }
}
