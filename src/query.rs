use std::io::Write;

use crate::comparator::{AuthorTopicAscending, DurationDescending};
use crate::heap_sort::heap_sort;
use crate::merge_sort::merge_sort;
use crate::speaker::Speaker;
use crate::talk::Talk;

/// Talks given by `speaker`, in the order they were read.
pub fn speaker_talks(talks: &[Talk], speaker: &Speaker) -> Vec<Talk> {
    talks.iter()
        .filter(|talk| talk.speaker() == speaker)
        .cloned()
        .collect()
}

/// Talks lasting strictly longer than `threshold` minutes, longest first.
///
/// A copy of `talks` is heap sorted, `talks` itself is left as is.
pub fn long_talks(talks: &[Talk], threshold: i32) -> Vec<Talk> {
    let mut sorted = talks.to_vec();
    heap_sort(&mut sorted, &DurationDescending);
    sorted.retain(|talk| talk.duration() > threshold);
    sorted
}

/// Every derived view of a loaded schedule. Each view owns its talks.
#[derive(Clone, Debug)]
pub struct Views {
    by_speaker: Vec<Talk>,
    long_talks: Vec<Talk>,
    long_by_duration: Vec<Talk>,
    long_by_author_topic: Vec<Talk>,
}

impl Views {
    pub fn new(talks: &[Talk], speaker: &Speaker, threshold: i32) -> Views {
        let by_speaker = speaker_talks(talks, speaker);
        let long_talks = long_talks(talks, threshold);

        let mut long_by_duration = long_talks.clone();
        merge_sort(&mut long_by_duration, &DurationDescending);

        let mut long_by_author_topic = long_talks.clone();
        merge_sort(&mut long_by_author_topic, &AuthorTopicAscending);

        Views {
            by_speaker,
            long_talks,
            long_by_duration,
            long_by_author_topic,
        }
    }

    /// Talks of the selected speaker in file order.
    pub fn by_speaker(&self) -> &[Talk] {
        &self.by_speaker
    }

    /// Long talks as ordered by heap sort, longest first.
    pub fn long_talks(&self) -> &[Talk] {
        &self.long_talks
    }

    /// Long talks merge sorted longest first. Talks of equal duration keep the
    /// [long_talks](Views::long_talks) order.
    pub fn long_by_duration(&self) -> &[Talk] {
        &self.long_by_duration
    }

    /// Long talks merge sorted by surname and topic.
    pub fn long_by_author_topic(&self) -> &[Talk] {
        &self.long_by_author_topic
    }
}

/// Write one line per talk.
pub fn render<W: Write>(out: &mut W, talks: &[Talk]) -> Result<(), anyhow::Error> {
    for talk in talks {
        writeln!(out, "{}", talk)?;
    }
    Ok(())
}
