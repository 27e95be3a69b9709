use chrono::{Duration, NaiveDateTime, Timelike};
use sha2::{Digest, Sha256};

use super::resource::ResourceName;

/// Layout of the window start inside the hashed key material
const WINDOW_KEY_FORMAT: &str = "%Y%m%dT%H%M";

/// Start of the fixed, hour-aligned bucket a timestamp falls into.
///
/// The minute is floored to a multiple of the window size and seconds and
/// sub-seconds are zeroed. Hour and date never change. This is a fixed grid,
/// not a sliding window: 10:14:59 and 10:15:00 land in different buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupWindow {
    start: NaiveDateTime,
}

impl DedupWindow {
    /// `window_minutes` must be non-zero and divide 60; callers go through
    /// `DedupKeyGenerator`, which validates it.
    pub(crate) fn containing(timestamp: NaiveDateTime, window_minutes: u32) -> Self {
        let offset = Duration::minutes(i64::from(timestamp.minute() % window_minutes))
            + Duration::seconds(i64::from(timestamp.second()))
            + Duration::nanoseconds(i64::from(timestamp.nanosecond()));

        Self {
            start: timestamp - offset,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }
}

impl std::fmt::Display for DedupWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start.format(WINDOW_KEY_FORMAT))
    }
}

/// Hex-encoded SHA-256 of `"{resource_name}-{window}"`.
///
/// Passed to the incident backend as its idempotency token, so the same
/// resource reported twice in one window maps to one incident.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    pub fn derive(resource_name: &ResourceName, window: &DedupWindow) -> Self {
        let material = format!("{}-{}", resource_name, window);

        let mut hasher = Sha256::new();
        hasher.update(material.as_bytes());

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
