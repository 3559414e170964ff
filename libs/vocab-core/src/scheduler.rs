//! Fixed-interval spaced repetition scheduler.
//!
//! Each successful recall moves an entry one step up an ascending interval
//! table. Recalling an entry after the last step marks it mastered; failing
//! to recall sends it back to the first step.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Result, SchedulerError};
use crate::types::{EntryStatus, Outcome, ReviewState, VocabularyEntry};

/// Ascending review intervals, indexed by progress level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    steps: Vec<Duration>,
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            steps: vec![
                Duration::minutes(20),
                Duration::hours(2),
                Duration::days(1),
                Duration::days(2),
                Duration::days(7),
                Duration::days(14),
                Duration::days(30),
            ],
        }
    }
}

impl IntervalTable {
    /// Build a custom table. Steps must be positive and strictly ascending.
    pub fn new(steps: Vec<Duration>) -> Result<Self> {
        if steps.is_empty() {
            return Err(SchedulerError::InvalidIntervals(
                "at least one interval is required".to_string(),
            ));
        }
        if let Some(idx) = steps.iter().position(|step| *step <= Duration::zero()) {
            return Err(SchedulerError::InvalidIntervals(format!(
                "interval {idx} is not positive"
            )));
        }
        if let Some(idx) = steps.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(SchedulerError::InvalidIntervals(format!(
                "interval {} is not longer than interval {idx}",
                idx + 1
            )));
        }
        Ok(Self { steps })
    }

    /// Interval for a progress level, `None` once the table is exhausted.
    pub fn get(&self, level: u32) -> Option<Duration> {
        usize::try_from(level)
            .ok()
            .and_then(|idx| self.steps.get(idx))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Progress level at which the next successful recall masters the entry.
    pub fn mastery_level(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }
}

/// Review scheduler. Immutable after construction, safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    intervals: IntervalTable,
}

impl Scheduler {
    pub fn new(intervals: IntervalTable) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &IntervalTable {
        &self.intervals
    }

    /// Calculate the state after a review with a known outcome.
    pub fn apply_outcome(
        &self,
        state: &ReviewState,
        outcome: Outcome,
        now: DateTime<Utc>,
    ) -> ReviewState {
        if state.status == EntryStatus::Mastered {
            return *state;
        }

        match outcome {
            Outcome::Know => match self.intervals.get(state.progress_level) {
                Some(interval) => ReviewState {
                    progress_level: state.progress_level + 1,
                    next_review_at: now + interval,
                    status: EntryStatus::Active,
                },
                // Level and due time are frozen from here on.
                None => ReviewState {
                    status: EntryStatus::Mastered,
                    ..*state
                },
            },
            Outcome::Study => ReviewState::new(now),
        }
    }

    /// Validate a raw outcome string and apply it to an entry.
    ///
    /// The entry is not modified; the caller persists the returned state.
    pub fn review(
        &self,
        entry: &VocabularyEntry,
        outcome: &str,
        now: DateTime<Utc>,
    ) -> Result<ReviewState> {
        let outcome: Outcome = outcome.parse()?;
        Ok(self.apply_outcome(&entry.state(), outcome, now))
    }

    /// Pick one due entry uniformly at random, `None` when nothing is due.
    pub fn pick_due<'a, R>(
        &self,
        entries: &'a [VocabularyEntry],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<&'a VocabularyEntry>
    where
        R: Rng + ?Sized,
    {
        let due: Vec<&VocabularyEntry> = entries.iter().filter(|e| e.is_due(now)).collect();
        due.choose(rng).copied()
    }
}
