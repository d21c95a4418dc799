//! This crate reads the schedule of a conference from a text file and derives views over its
//! talks: the talks of one speaker and the talks exceeding a duration threshold, sorted.
//!
//! Each line of the schedule file describes one talk:
//! ```text
//! 09:00 09:20 Иванов Иван Иванович Вступительное слово
//! ```
//! The start and end times come first, then the surname, given name and patronymic of the
//! speaker, and the rest of the line is the topic. Empty and malformed lines are skipped.
//!
//! Sorting is done by two general purpose algorithms, a stable [merge_sort] and an in-place
//! [heap_sort], both driven by any [Comparator](comparator::Comparator).
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use conference_schedule::schedule::Schedule;
//!
//! fn long_talks(input: PathBuf) {
//!     let schedule = Schedule::new(input);
//!     for talk in schedule.views().long_by_author_topic() {
//!         println!("{} minutes: {}", talk.duration(), talk);
//!     }
//! }
//! ```
//!

pub(crate) mod config;

pub mod time_of_day;
pub mod speaker;
pub mod talk;
pub mod comparator;
pub mod merge_sort;
pub mod heap_sort;
pub mod loader;
pub mod query;
pub mod schedule;
