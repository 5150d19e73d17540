//! Time-of-day greeting resolution.
//!
//! A fixed table maps hour ranges to greeting text. The night bucket wraps
//! past midnight (22-4) and matches by disjunction; all other buckets are
//! plain inclusive ranges. Resolution is pure: the current hour comes in
//! through the [`Clock`] trait so callers stay testable.

use chrono::Timelike;

/// A named greeting bucket: display text plus an inclusive hour range.
///
/// A bucket with `start > end` wraps past midnight and matches
/// `hour >= start || hour <= end`.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub name: &'static str,
    pub text: &'static str,
    pub start: u8,
    pub end: u8,
}

impl Bucket {
    fn matches(&self, hour: u8) -> bool {
        if self.start > self.end {
            hour >= self.start || hour <= self.end
        } else {
            hour >= self.start && hour <= self.end
        }
    }
}

/// Greeting buckets in evaluation order. First match wins.
pub const GREETINGS: [Bucket; 4] = [
    Bucket { name: "morning", text: "Good Morning", start: 5, end: 11 },
    Bucket { name: "afternoon", text: "Good Afternoon", start: 12, end: 16 },
    Bucket { name: "evening", text: "Good Evening", start: 17, end: 21 },
    Bucket { name: "night", text: "Good Evening", start: 22, end: 4 },
];

/// Greeting used if no bucket matches. The table covers all 24 hours, so
/// this is only reachable for out-of-range input.
pub const FALLBACK_GREETING: &str = "Hello";

/// First bucket matching an hour, in declaration order.
pub fn resolve_bucket(hour: u8) -> Option<&'static Bucket> {
    GREETINGS.iter().find(|bucket| bucket.matches(hour))
}

/// Resolve an hour (0-23) to its greeting text.
pub fn resolve_greeting(hour: u8) -> &'static str {
    resolve_bucket(hour)
        .map(|bucket| bucket.text)
        .unwrap_or(FALLBACK_GREETING)
}

/// Source of the current local hour.
pub trait Clock {
    /// Current local hour, 0-23.
    fn local_hour(&self) -> u8;
}

/// Wall-clock implementation backed by chrono.
#[derive(Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn local_hour(&self) -> u8 {
        chrono::Local::now().hour() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_hours() {
        for hour in 5..=11 {
            assert_eq!(resolve_greeting(hour), "Good Morning", "hour {hour}");
        }
    }

    #[test]
    fn test_afternoon_hours() {
        for hour in 12..=16 {
            assert_eq!(resolve_greeting(hour), "Good Afternoon", "hour {hour}");
        }
    }

    #[test]
    fn test_evening_hours() {
        for hour in 17..=21 {
            assert_eq!(resolve_greeting(hour), "Good Evening", "hour {hour}");
        }
    }

    #[test]
    fn test_night_wraps_past_midnight() {
        // 22-4 matches on either side of midnight
        assert_eq!(resolve_greeting(22), "Good Evening");
        assert_eq!(resolve_greeting(23), "Good Evening");
        assert_eq!(resolve_greeting(0), "Good Evening");
        assert_eq!(resolve_greeting(4), "Good Evening");
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(resolve_greeting(4), "Good Evening");
        assert_eq!(resolve_greeting(5), "Good Morning");
        assert_eq!(resolve_greeting(11), "Good Morning");
        assert_eq!(resolve_greeting(12), "Good Afternoon");
        assert_eq!(resolve_greeting(16), "Good Afternoon");
        assert_eq!(resolve_greeting(17), "Good Evening");
        assert_eq!(resolve_greeting(21), "Good Evening");
    }

    #[test]
    fn test_total_over_all_hours() {
        // Every valid hour lands in a bucket; the fallback is unreachable
        let texts: Vec<&str> = GREETINGS.iter().map(|b| b.text).collect();
        for hour in 0..=23u8 {
            let greeting = resolve_greeting(hour);
            assert!(texts.contains(&greeting), "hour {hour} fell through to {greeting}");
        }
    }

    #[test]
    fn test_exactly_one_bucket_matches() {
        for hour in 0..=23u8 {
            let matches = GREETINGS.iter().filter(|b| b.matches(hour)).count();
            assert_eq!(matches, 1, "hour {hour} matched {matches} buckets");
        }
    }

    #[test]
    fn test_morning_sample_hour() {
        assert_eq!(resolve_greeting(9), "Good Morning");
    }
}
