use std::fmt::{Display, Formatter};

use anyhow::anyhow;

use crate::speaker::Speaker;
use crate::time_of_day::TimeOfDay;

/// One scheduled talk.
///
/// A line of the schedule has the form
/// ```text
/// HH:MM HH:MM SURNAME NAME PATRONYMIC TOPIC
/// ```
/// where the topic is the rest of the line and may contain blanks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Talk {
    start: TimeOfDay,
    end: TimeOfDay,
    speaker: Speaker,
    topic: String,
}

impl Talk {
    /// Create a [Talk] from its parts.
    pub fn new(start: &str, end: &str, speaker: Speaker, topic: &str) -> Talk {
        Talk {
            start: TimeOfDay::new(start),
            end: TimeOfDay::new(end),
            speaker,
            topic: topic.to_string(),
        }
    }

    /// Parse one schedule line.
    ///
    /// Fails when the line has fewer than five whitespace separated tokens. Time tokens are not
    /// validated.
    ///
    /// # Examples
    /// ```
    /// use conference_schedule::talk::Talk;
    /// let talk = Talk::parse("09:00 09:20 Иванов Иван Иванович Вступительное слово").unwrap();
    /// assert_eq!(talk.topic(), "Вступительное слово");
    /// assert_eq!(talk.duration(), 20);
    /// assert!(Talk::parse("09:00 09:20 Иванов Иван").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Talk, anyhow::Error> {
        let mut tokens = Vec::with_capacity(5);
        let mut rest = line;
        while tokens.len() < 5 {
            match next_token(rest) {
                Some((token, remainder)) => {
                    tokens.push(token);
                    rest = remainder;
                }
                None => {
                    return Err(
                        anyhow!(
                            "Expected at least 5 fields but found {}, line: {}",
                            tokens.len(),
                            line,
                        )
                    );
                }
            }
        }

        // a single space between the patronymic and the topic belongs to neither
        let topic = rest.strip_prefix(' ').unwrap_or(rest);
        let topic = if topic.trim().is_empty() { "" } else { topic };

        Ok(
            Talk::new(
                tokens[0],
                tokens[1],
                Speaker::new(tokens[2], tokens[3], tokens[4]),
                topic,
            )
        )
    }

    pub fn start(&self) -> &TimeOfDay {
        &self.start
    }

    pub fn end(&self) -> &TimeOfDay {
        &self.end
    }

    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Duration in minutes. Zero or negative for malformed times, saturating at the `i32` bounds.
    pub fn duration(&self) -> i32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

impl Display for Talk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.start, self.end, self.speaker, self.topic)
    }
}

fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        None
    } else {
        let end = text.find(char::is_whitespace).unwrap_or(text.len());
        Some(text.split_at(end))
    }
}
