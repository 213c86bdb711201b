//! Countdown state machine: tick math and display markup.
//!
//! The machine has two states, counting and expired, and expired is
//! terminal. The UI layer drives it from a repeating timer and cancels
//! the timer on expiry; everything here is pure so it tests without a
//! clock.

pub const MS_PER_SECOND: i64 = 1000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Heading used when the countdown config has no title.
pub const DEFAULT_TITLE: &str = "Next Game Release";

/// Terminal display once the target has passed.
pub const EXPIRED_HTML: &str = "<h3>\u{1f389} New Games Available Now! \u{1f389}</h3>";

/// Time remaining, decomposed by truncating division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counting(TimeParts),
    Expired,
}

/// One step of the countdown at `now_ms` against `target_ms`.
pub fn tick(target_ms: i64, now_ms: i64) -> Tick {
    let remaining = target_ms - now_ms;
    if remaining < 0 {
        return Tick::Expired;
    }
    Tick::Counting(TimeParts {
        days: remaining / MS_PER_DAY,
        hours: (remaining % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (remaining % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (remaining % MS_PER_MINUTE) / MS_PER_SECOND,
    })
}

/// Display markup for the counting state.
pub fn counting_html(title: &str, parts: TimeParts) -> String {
    format!(
        concat!(
            "<h3>{title}</h3>",
            "<div class=\"countdown-timer\">",
            "<div class=\"time-unit\"><span class=\"time-number\">{days}</span><span class=\"time-label\">Days</span></div>",
            "<div class=\"time-unit\"><span class=\"time-number\">{hours}</span><span class=\"time-label\">Hours</span></div>",
            "<div class=\"time-unit\"><span class=\"time-number\">{minutes}</span><span class=\"time-label\">Minutes</span></div>",
            "<div class=\"time-unit\"><span class=\"time-number\">{seconds}</span><span class=\"time-label\">Seconds</span></div>",
            "</div>"
        ),
        title = title,
        days = parts.days,
        hours = parts.hours,
        minutes = parts.minutes,
        seconds = parts.seconds,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_one_of_each() {
        // 90061s = 1d 1h 1m 1s
        let now = 1_700_000_000_000;
        assert_eq!(
            tick(now + 90_061_000, now),
            Tick::Counting(TimeParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            })
        );
    }

    #[test]
    fn test_past_target_expires() {
        assert_eq!(tick(999, 1000), Tick::Expired);
    }

    #[test]
    fn test_zero_remaining_still_counting() {
        // remaining < 0 expires; exactly zero renders all zeros
        assert_eq!(
            tick(1000, 1000),
            Tick::Counting(TimeParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            })
        );
    }

    #[test]
    fn test_truncation_only() {
        let now = 0;
        // 59.9s truncates to 59 seconds, no rounding up
        assert_eq!(
            tick(now + 59_900, now),
            Tick::Counting(TimeParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 59
            })
        );
    }

    #[test]
    fn test_counting_markup() {
        let html = counting_html(
            "Next Game Release",
            TimeParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            },
        );
        assert!(html.starts_with("<h3>Next Game Release</h3>"));
        assert_eq!(html.matches("time-unit").count(), 4);
        assert!(html.contains("<span class=\"time-number\">2</span><span class=\"time-label\">Days</span>"));
        assert!(html.contains("<span class=\"time-number\">5</span><span class=\"time-label\">Seconds</span>"));
    }
}
