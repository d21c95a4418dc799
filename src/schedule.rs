use std::io::Write;
use std::path::PathBuf;

use regex::Regex;

use crate::config::Config;
use crate::loader;
use crate::query::{render, Views};
use crate::speaker::Speaker;
use crate::talk::Talk;

/// Report on a conference schedule file
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use conference_schedule::schedule::Schedule;
/// use conference_schedule::speaker::Speaker;
///
/// fn report(input: PathBuf) -> Result<(), anyhow::Error> {
///     let mut schedule = Schedule::new(input);
///     // list the talks of another speaker
///     schedule.with_speaker(Speaker::new("Петров", "Петр", "Петрович"));
///     // only talks longer than half an hour
///     schedule.with_duration_threshold(30);
///     schedule.report(&mut std::io::stdout().lock())
/// }
/// ```
pub struct Schedule {
    input: PathBuf,
    speaker: Speaker,
    duration_threshold: i32,
    ignore_lines: Option<Regex>,
}

impl Schedule {
    /// Create a default Schedule definition.
    ///
    /// * the selected speaker is Иванов Иван Иванович
    /// * talks longer than 15 minutes are reported as long
    /// * no lines are ignored apart from empty and malformed ones
    pub fn new(input: PathBuf) -> Schedule {
        Schedule {
            input,
            speaker: Speaker::new("Иванов", "Иван", "Иванович"),
            duration_threshold: 15,
            ignore_lines: None,
        }
    }

    /// Set the speaker whose talks are listed.
    pub fn with_speaker(&mut self, speaker: Speaker) {
        self.speaker = speaker;
    }

    /// Set the duration in minutes a talk has to exceed to be listed as long. The default is 15.
    pub fn with_duration_threshold(&mut self, minutes: i32) {
        self.duration_threshold = minutes;
    }

    /// Specify which lines to ignore. Each line matching the regex is skipped when loading.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// Load the talks. An unreadable file is logged and yields no talks.
    pub fn load(&self) -> Vec<Talk> {
        let config = self.create_config();
        Self::internal_load(&config)
    }

    /// Load the talks and derive all views.
    pub fn views(&self) -> Views {
        let config = self.create_config();
        let talks = Self::internal_load(&config);
        Views::new(&talks, config.speaker(), config.duration_threshold())
    }

    /// Write the talks of the selected speaker followed by the long talks, each under a heading.
    pub fn report<W: Write>(&self, out: &mut W) -> Result<(), anyhow::Error> {
        let config = self.create_config();
        let views = self.views();

        writeln!(out)?;
        writeln!(out, "All talks by {}:", config.speaker())?;
        render(out, views.by_speaker())?;

        writeln!(out)?;
        writeln!(out, "Talks longer than {} minutes:", config.duration_threshold())?;
        render(out, views.long_talks())?;
        out.flush()?;
        Ok(())
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.input.clone(),
            self.speaker.clone(),
            self.duration_threshold,
            self.ignore_lines.clone(),
        )
    }

    fn internal_load(config: &Config) -> Vec<Talk> {
        log::info!("Loading schedule from {}", config.input().display());
        loader::load(config.input(), config.ignore_lines().as_ref())
    }
}
