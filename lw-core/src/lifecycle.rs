//! Derived, time-dependent signals of comments.
//!
//! Nothing in here is ever stored. Priority and overdue status are
//! recomputed for an explicitly given point in time on every evaluation.

use crate::entities::*;

const MILLIS_PER_DAY: i128 = 24 * 60 * 60 * 1_000;

pub const DEFAULT_OVERDUE_AFTER_DAYS: i64 = 7;
pub const DEFAULT_AGING_AFTER_DAYS: i64 = 3;

/// Age limits (in whole days) that drive the prioritization of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleThresholds {
    /// A comment still open for discussion that is older is overdue.
    pub overdue_after_days: i64,
    /// An unprocessed comment that is older has at least medium priority.
    pub aging_after_days: i64,
}

impl Default for LifecycleThresholds {
    fn default() -> Self {
        Self {
            overdue_after_days: DEFAULT_OVERDUE_AFTER_DAYS,
            aging_after_days: DEFAULT_AGING_AFTER_DAYS,
        }
    }
}

impl LifecycleThresholds {
    pub fn is_overdue(&self, comment: &Comment, now: Timestamp) -> bool {
        comment.is_for_discussion && days_since_created(comment, now) > self.overdue_after_days
    }

    pub fn priority(&self, comment: &Comment, now: Timestamp) -> Priority {
        // The order of the rules matters: processed comments
        // are never prioritized, not even when overdue.
        if comment.is_processed {
            return Priority::Low;
        }
        if self.is_overdue(comment, now) {
            return Priority::High;
        }
        if days_since_created(comment, now) > self.aging_after_days {
            return Priority::Medium;
        }
        Priority::Low
    }
}

/// Number of full days since the comment has been created (rounded down).
pub fn days_since_created(comment: &Comment, now: Timestamp) -> i64 {
    let days = (now - comment.created_at)
        .whole_milliseconds()
        .div_euclid(MILLIS_PER_DAY);
    // Timestamps are limited to +/-9999 years
    days as i64
}

pub fn is_overdue(comment: &Comment, now: Timestamp) -> bool {
    LifecycleThresholds::default().is_overdue(comment, now)
}

pub fn priority(comment: &Comment, now: Timestamp) -> Priority {
    LifecycleThresholds::default().priority(comment, now)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentSummary {
    pub total: usize,
    pub for_discussion: usize,
    pub processed: usize,
    pub overdue: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl CommentSummary {
    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

pub fn summarize<'a>(
    comments: impl IntoIterator<Item = &'a Comment>,
    now: Timestamp,
    thresholds: &LifecycleThresholds,
) -> CommentSummary {
    comments
        .into_iter()
        .fold(CommentSummary::default(), |mut summary, comment| {
            summary.total += 1;
            if comment.is_for_discussion {
                summary.for_discussion += 1;
            }
            if comment.is_processed {
                summary.processed += 1;
            }
            if thresholds.is_overdue(comment, now) {
                summary.overdue += 1;
            }
            match thresholds.priority(comment, now) {
                Priority::Low => summary.low += 1,
                Priority::Medium => summary.medium += 1,
                Priority::High => summary.high += 1,
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lw_entities::builders::*;
    use time::Duration;

    fn t0() -> Timestamp {
        Timestamp::try_from_secs(1_700_000_000).unwrap()
    }

    fn new_comment(for_discussion: bool, processed: bool) -> Comment {
        Comment::build()
            .created_at(t0())
            .content("Is this slide still correct?")
            .for_discussion(for_discussion)
            .processed(processed)
            .finish()
    }

    #[test]
    fn whole_days_are_rounded_down() {
        let c = new_comment(true, false);
        assert_eq!(days_since_created(&c, t0()), 0);
        assert_eq!(days_since_created(&c, t0() + Duration::hours(23)), 0);
        assert_eq!(days_since_created(&c, t0() + Duration::hours(24)), 1);
        assert_eq!(days_since_created(&c, t0() + Duration::hours(191)), 7);
        assert_eq!(days_since_created(&c, t0() - Duration::hours(1)), -1);
    }

    #[test]
    fn processed_comments_have_low_priority() {
        for for_discussion in [true, false] {
            let c = new_comment(for_discussion, true);
            for days in [0, 2, 4, 7, 8, 30, 365] {
                assert_eq!(
                    priority(&c, t0() + Duration::days(days)),
                    Priority::Low,
                    "{days} days"
                );
            }
        }
    }

    #[test]
    fn old_open_discussions_are_overdue_with_high_priority() {
        let c = new_comment(true, false);
        for days in [8, 9, 30] {
            let now = t0() + Duration::days(days);
            assert!(is_overdue(&c, now));
            assert_eq!(priority(&c, now), Priority::High);
        }
    }

    #[test]
    fn aging_discussions_have_medium_priority() {
        let c = new_comment(true, false);
        for days in [4, 5, 6, 7] {
            let now = t0() + Duration::days(days);
            assert!(!is_overdue(&c, now));
            assert_eq!(priority(&c, now), Priority::Medium);
        }
        // Just below four full days
        let now = t0() + Duration::days(4) - Duration::seconds(1);
        assert_eq!(priority(&c, now), Priority::Low);
    }

    #[test]
    fn recent_comments_have_low_priority() {
        for for_discussion in [true, false] {
            let c = new_comment(for_discussion, false);
            for days in [0, 1, 2, 3] {
                assert_eq!(priority(&c, t0() + Duration::days(days)), Priority::Low);
            }
        }
    }

    #[test]
    fn old_comments_not_for_discussion_are_never_overdue() {
        let c = new_comment(false, false);
        let now = t0() + Duration::days(20);
        assert!(!is_overdue(&c, now));
        assert_eq!(priority(&c, now), Priority::Medium);
    }

    #[test]
    fn overdue_after_seven_full_days() {
        let c = new_comment(true, false);
        assert!(is_overdue(&c, t0() + Duration::days(8)));
        assert!(!is_overdue(&c, t0() + Duration::days(6)));
        assert!(!is_overdue(&c, t0() + Duration::days(8) - Duration::milliseconds(1)));
    }

    #[test]
    fn processed_comments_may_still_be_overdue() {
        let c = new_comment(true, true);
        let now = t0() + Duration::days(10);
        assert!(is_overdue(&c, now));
        assert_eq!(priority(&c, now), Priority::Low);
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = LifecycleThresholds {
            overdue_after_days: 2,
            aging_after_days: 1,
        };
        let c = new_comment(true, false);
        assert_eq!(
            thresholds.priority(&c, t0() + Duration::days(2)),
            Priority::Medium
        );
        assert_eq!(
            thresholds.priority(&c, t0() + Duration::days(3)),
            Priority::High
        );
    }

    #[test]
    fn summarize_comments() {
        let comments = vec![
            new_comment(true, false),
            new_comment(true, true),
            Comment::build()
                .created_at(t0() + Duration::days(5))
                .for_discussion(false)
                .finish(),
        ];
        let summary = summarize(
            &comments,
            t0() + Duration::days(9),
            &LifecycleThresholds::default(),
        );
        assert_eq!(
            summary,
            CommentSummary {
                total: 3,
                for_discussion: 2,
                processed: 1,
                overdue: 2,
                low: 1,
                medium: 1,
                high: 1,
            }
        );
        assert_eq!(summary.count(Priority::High), 1);
    }
}
