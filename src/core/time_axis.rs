use chrono::{DateTime, FixedOffset, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Text used when a timestamp falls outside chrono's representable range.
pub const UNREPRESENTABLE_TIME_LABEL: &str = "--:--";

/// Wall clock used to render label hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelClock {
    /// Host time zone.
    #[default]
    Local,
    Utc,
    Fixed {
        offset_seconds: i32,
    },
}

/// Formats a Unix-seconds timestamp as zero-padded `HH:MM` on `clock`.
#[must_use]
pub fn format_hh_mm(timestamp: i64, clock: LabelClock) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return UNREPRESENTABLE_TIME_LABEL.to_owned();
    };
    match clock {
        LabelClock::Local => hh_mm(&utc.with_timezone(&Local)),
        LabelClock::Utc => hh_mm(&utc),
        LabelClock::Fixed { offset_seconds } => match FixedOffset::east_opt(offset_seconds) {
            Some(offset) => hh_mm(&utc.with_timezone(&offset)),
            None => UNREPRESENTABLE_TIME_LABEL.to_owned(),
        },
    }
}

fn hh_mm<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// One time-axis label, positioned on a grid slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabel {
    /// Grid line index counted from the left edge; slot `0` is never labeled.
    pub slot: usize,
    pub sample_index: usize,
    pub timestamp: i64,
    pub text: String,
}

/// Picks one label every `stride` raw samples, walking back from the newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxisFormatter {
    clock: LabelClock,
    stride: usize,
}

impl TimeAxisFormatter {
    pub const DEFAULT_STRIDE: usize = 9;

    /// A zero stride is bumped to one sample.
    #[must_use]
    pub fn new(clock: LabelClock, stride: usize) -> Self {
        Self {
            clock,
            stride: stride.max(1),
        }
    }

    #[must_use]
    pub fn clock(self) -> LabelClock {
        self.clock
    }

    #[must_use]
    pub fn stride(self) -> usize {
        self.stride
    }

    #[must_use]
    pub fn format(self, timestamp: i64) -> String {
        format_hh_mm(timestamp, self.clock)
    }

    /// Lazy labels in ascending time order, at most `max_labels` of them.
    ///
    /// The newest sample always carries the rightmost label. The iterator is
    /// `Clone`, so a pass can be restarted from a saved copy.
    #[must_use]
    pub fn labels(self, timestamps: &[i64], max_labels: usize) -> TimeLabels<'_> {
        let available = if timestamps.is_empty() {
            0
        } else {
            (timestamps.len() - 1) / self.stride + 1
        };
        let count = available.min(max_labels);
        TimeLabels {
            formatter: self,
            timestamps,
            count,
            front: 0,
            back: count,
        }
    }
}

impl Default for TimeAxisFormatter {
    fn default() -> Self {
        Self::new(LabelClock::default(), Self::DEFAULT_STRIDE)
    }
}

/// Iterator returned by [`TimeAxisFormatter::labels`].
#[derive(Debug, Clone)]
pub struct TimeLabels<'a> {
    formatter: TimeAxisFormatter,
    timestamps: &'a [i64],
    count: usize,
    front: usize,
    back: usize,
}

impl TimeLabels<'_> {
    fn label_at(&self, position: usize) -> Option<TimeLabel> {
        // Position 0 is the oldest label; `count - 1` the newest.
        let steps_back = self.count.checked_sub(position + 1)?;
        let newest = self.timestamps.len().checked_sub(1)?;
        let sample_index = newest.checked_sub(steps_back * self.formatter.stride)?;
        let timestamp = self.timestamps[sample_index];
        Some(TimeLabel {
            slot: position + 1,
            sample_index,
            timestamp,
            text: self.formatter.format(timestamp),
        })
    }
}

impl Iterator for TimeLabels<'_> {
    type Item = TimeLabel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let label = self.label_at(self.front);
        self.front += 1;
        label
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for TimeLabels<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let label = self.label_at(self.back - 1);
        self.back -= 1;
        label
    }
}

impl ExactSizeIterator for TimeLabels<'_> {}
