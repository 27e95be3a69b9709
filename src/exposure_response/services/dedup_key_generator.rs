use chrono::{NaiveDateTime, Timelike};

use crate::exposure_response::domain::{DedupKey, DedupWindow, ResourceName};
use crate::shared::{ResponderError, Result};

/// Default dedup window, aligned to the clock hour
pub const DEFAULT_WINDOW_MINUTES: u32 = 15;

/// Accepted `UpdatedAt` layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

/// Longest fractional-second part accepted (microseconds)
const MAX_FRACTION_DIGITS: usize = 6;

/// DedupKeyGenerator derives the idempotency token for an incident.
///
/// Events for the same resource whose timestamps fall in the same
/// hour-aligned window produce the same key. Events straddling a window
/// boundary do not, even when they are one second apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupKeyGenerator {
    window_minutes: u32,
}

impl DedupKeyGenerator {
    /// Creates a generator with a custom window size.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` unless the size is between 1 and 60 and
    /// divides the hour evenly, which keeps every window inside one hour.
    pub fn new(window_minutes: u32) -> Result<Self> {
        if window_minutes == 0 || window_minutes > 60 || 60 % window_minutes != 0 {
            return Err(ResponderError::InvalidConfiguration {
                field: "dedup_window_minutes".to_string(),
                reason: format!(
                    "{} minutes does not divide the hour evenly (use 1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30 or 60)",
                    window_minutes
                ),
            }
            .into());
        }
        Ok(Self { window_minutes })
    }

    pub fn window_minutes(&self) -> u32 {
        self.window_minutes
    }

    /// Generates the dedup key for a resource seen at `timestamp`.
    ///
    /// # Errors
    /// Returns `MalformedTimestamp` if `timestamp` matches neither accepted format
    pub fn generate(&self, resource_name: &ResourceName, timestamp: &str) -> Result<DedupKey> {
        let window = self.window_for(timestamp)?;
        Ok(DedupKey::derive(resource_name, &window))
    }

    pub fn window_for(&self, timestamp: &str) -> Result<DedupWindow> {
        let parsed = parse_timestamp(timestamp)?;
        Ok(DedupWindow::containing(parsed, self.window_minutes))
    }
}

impl Default for DedupKeyGenerator {
    fn default() -> Self {
        Self {
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let malformed = || ResponderError::MalformedTimestamp {
        value: value.to_string(),
    };

    // chrono skips whitespace and takes up to nine fraction digits
    if value.contains(char::is_whitespace) || fraction_digits(value) > MAX_FRACTION_DIGITS {
        return Err(malformed().into());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        // A leap second (":60") comes back as nanosecond >= 1_000_000_000
        .filter(|parsed| parsed.nanosecond() < 1_000_000_000)
        .ok_or_else(|| malformed().into())
}

fn fraction_digits(value: &str) -> usize {
    value
        .rsplit_once('.')
        .map_or(0, |(_, rest)| rest.chars().take_while(char::is_ascii_digit).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MY_BUCKET_1000: &str = "226295de64011d98a86cf74c1107c7ff363f1d2493de824008ec19ec9e25c54f";
    const MY_BUCKET_1015: &str = "9c5e174e9c27829e5df673d458dab36f6a98ff9669abf3060dbd8a185d7d9ea4";

    fn bucket(name: &str) -> ResourceName {
        ResourceName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_fractional_seconds_timestamp() {
        let generator = DedupKeyGenerator::default();
        let key = generator
            .generate(&bucket("my-bucket"), "2024-01-01T10:07:00.000Z")
            .unwrap();
        assert_eq!(key.as_str(), MY_BUCKET_1000);
    }

    #[test]
    fn test_whole_seconds_timestamp() {
        let generator = DedupKeyGenerator::default();
        let key = generator
            .generate(&bucket("my-bucket"), "2024-01-01T10:07:00Z")
            .unwrap();
        assert_eq!(key.as_str(), MY_BUCKET_1000);
    }

    #[test]
    fn test_microsecond_precision_timestamp() {
        let generator = DedupKeyGenerator::default();
        let key = generator
            .generate(&bucket("my-bucket"), "2024-01-01T10:00:00.123456Z")
            .unwrap();
        assert_eq!(key.as_str(), MY_BUCKET_1000);
    }

    #[test]
    fn test_same_window_same_key() {
        let generator = DedupKeyGenerator::default();
        let name = bucket("my-bucket");
        let timestamps = [
            "2024-01-01T10:00:00Z",
            "2024-01-01T10:07:00.000Z",
            "2024-01-01T10:14:59Z",
            "2024-01-01T10:14:59.999Z",
        ];

        for timestamp in timestamps {
            assert_eq!(
                generator.generate(&name, timestamp).unwrap().as_str(),
                MY_BUCKET_1000,
                "timestamp {} should fall in the 10:00 window",
                timestamp
            );
        }
    }

    #[test]
    fn test_adjacent_windows_differ() {
        let generator = DedupKeyGenerator::default();
        let name = bucket("my-bucket");

        let before = generator.generate(&name, "2024-01-01T10:14:59Z").unwrap();
        let after = generator.generate(&name, "2024-01-01T10:15:00Z").unwrap();
        assert_ne!(before, after);

        let later = generator.generate(&name, "2024-01-01T10:15:01Z").unwrap();
        assert_eq!(later.as_str(), MY_BUCKET_1015);
    }

    #[test]
    fn test_same_minute_different_hour_differs() {
        let generator = DedupKeyGenerator::default();
        let name = bucket("my-bucket");
        let a = generator.generate(&name, "2024-01-01T10:05:00Z").unwrap();
        let b = generator.generate(&name, "2024-01-01T11:05:00Z").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generation_is_pure() {
        let generator = DedupKeyGenerator::default();
        let name = bucket("my-bucket");
        let first = generator.generate(&name, "2024-06-30T23:52:10Z").unwrap();
        let second = generator.generate(&name, "2024-06-30T23:52:10Z").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_timestamp() {
        let generator = DedupKeyGenerator::default();
        for value in ["", "2024-01-01 10:07:00", "2024-01-01T10:07:00+00:00", "not a time"] {
            let err = generator.generate(&bucket("my-bucket"), value).unwrap_err();
            match err.downcast_ref::<ResponderError>() {
                Some(ResponderError::MalformedTimestamp { value: v }) => assert_eq!(v, value),
                other => panic!("expected MalformedTimestamp for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_timestamp_outside_strict_layout_is_malformed() {
        let generator = DedupKeyGenerator::default();
        for value in [
            " 2024-01-01T10:07:00Z",
            "2024-01-01T10:07:00Z ",
            "2024-01-01T10:07: 00Z",
            "2024-01-01T10:14:60Z",
            "2024-01-01T10:14:60.500Z",
            "2024-01-01T10:07:00.1234567Z",
        ] {
            let err = generator.generate(&bucket("my-bucket"), value).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<ResponderError>(),
                    Some(ResponderError::MalformedTimestamp { .. })
                ),
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_single_fraction_digit_accepted() {
        let generator = DedupKeyGenerator::default();
        let key = generator
            .generate(&bucket("my-bucket"), "2024-01-01T10:07:00.5Z")
            .unwrap();
        assert_eq!(key.as_str(), MY_BUCKET_1000);
    }

    #[test]
    fn test_window_for_floors_minutes() {
        let generator = DedupKeyGenerator::default();
        let window = generator.window_for("2024-01-01T10:44:30Z").unwrap();
        assert_eq!(window.to_string(), "20240101T1030");
    }

    #[test]
    fn test_custom_window_size() {
        let generator = DedupKeyGenerator::new(30).unwrap();
        assert_eq!(generator.window_minutes(), 30);
        let window = generator.window_for("2024-01-01T10:29:59Z").unwrap();
        assert_eq!(window.to_string(), "20240101T1000");
    }

    #[test]
    fn test_invalid_window_sizes() {
        for minutes in [0, 7, 45, 61, 90] {
            let err = DedupKeyGenerator::new(minutes).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ResponderError>(),
                Some(ResponderError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_default_window_is_fifteen_minutes() {
        assert_eq!(DedupKeyGenerator::default().window_minutes(), 15);
    }
}
