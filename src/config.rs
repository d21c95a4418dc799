use std::path::PathBuf;
use regex::Regex;
use crate::speaker::Speaker;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    input: PathBuf,
    speaker: Speaker,
    duration_threshold: i32,
    ignore_lines: Option<Regex>,
}

impl Config {
    pub(crate) fn new(
        input: PathBuf,
        speaker: Speaker,
        duration_threshold: i32,
        ignore_lines: Option<Regex>,
    ) -> Config {
        Config {
            input,
            speaker,
            duration_threshold,
            ignore_lines,
        }
    }

    pub(crate) fn input(&self) -> &PathBuf {
        &self.input
    }

    pub(crate) fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    pub(crate) fn duration_threshold(&self) -> i32 {
        self.duration_threshold
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }
}
