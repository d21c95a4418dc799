use std::fmt::{Display, Formatter};

/// A wall-clock time of day as read from the schedule.
///
/// Keeps the text exactly as written next to its value in minutes since midnight. Both are
/// computed once in [TimeOfDay::new] and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    text: String,
    minutes: i32,
}

impl TimeOfDay {
    /// Create a [TimeOfDay] from its `HH:MM` text. Never fails, see [time_to_minutes].
    ///
    /// # Examples
    /// ```
    /// use conference_schedule::time_of_day::TimeOfDay;
    /// let time = TimeOfDay::new("09:20");
    /// assert_eq!(time.minutes(), 560);
    /// assert_eq!(time.text(), "09:20");
    /// ```
    pub fn new(text: &str) -> TimeOfDay {
        TimeOfDay {
            text: text.to_string(),
            minutes: time_to_minutes(text),
        }
    }

    /// Get the text as it appeared in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get minutes since midnight.
    pub fn minutes(&self) -> i32 {
        self.minutes
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Convert `HH:MM` to minutes since midnight.
///
/// The conversion is lenient and does not validate ranges. Each side of the first ':' is read as
/// an optional sign followed by leading digits. A side without digits counts as 0 and a missing
/// ':' leaves the minutes at 0, so malformed input yields a meaningless but well defined value.
///
/// # Examples
/// ```
/// use conference_schedule::time_of_day::time_to_minutes;
/// assert_eq!(time_to_minutes("00:00"), 0);
/// assert_eq!(time_to_minutes("23:59"), 1439);
/// assert_eq!(time_to_minutes("xx:yy"), 0);
/// ```
pub fn time_to_minutes(text: &str) -> i32 {
    let (hours, minutes) = match text.split_once(':') {
        Some((hours, minutes)) => (leading_integer(hours), leading_integer(minutes)),
        None => (leading_integer(text), 0),
    };
    hours.saturating_mul(60).saturating_add(minutes)
}

fn leading_integer(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let mut value: i32 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(d as i32);
    }
    if negative {
        -value
    } else {
        value
    }
}
