//! View Projection
//!
//! Pure functions turning collection state into values a component can render directly.

use serde::{Deserialize, Serialize};

use crate::domain::{Goal, Step};
use crate::pagination::PagedCollection;
use crate::preferences::ViewMode;

/// Progress above this counts as nearly complete
pub const NEAR_COMPLETE_THRESHOLD: f64 = 70.0;

/// Page numbers shown on either side of the current page
const PAGE_WINDOW: u32 = 2;

/// `completed / total * 100`, rounded; 0 for an empty total.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (completed.min(total) as f64 / total as f64 * 100.0).round();
    percent as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    NearComplete,
    Completed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::NearComplete,
        GoalStatus::Completed,
    ];

    pub fn classify(progress: f64, is_completed: bool) -> Self {
        if is_completed {
            GoalStatus::Completed
        } else if progress > NEAR_COMPLETE_THRESHOLD {
            GoalStatus::NearComplete
        } else if progress > 0.0 {
            GoalStatus::InProgress
        } else {
            GoalStatus::NotStarted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "Not started",
            GoalStatus::InProgress => "In progress",
            GoalStatus::NearComplete => "Almost there",
            GoalStatus::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "status-not-started",
            GoalStatus::InProgress => "status-in-progress",
            GoalStatus::NearComplete => "status-near-complete",
            GoalStatus::Completed => "status-completed",
        }
    }
}

/// Prev/next state and page numbers for the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<u32>,
}

/// Nothing to render for a single page.
pub fn pagination_controls(page: u32, total_pages: u32) -> Option<PaginationControls> {
    if total_pages <= 1 {
        return None;
    }
    let page = page.clamp(1, total_pages);
    let first = page.saturating_sub(PAGE_WINDOW).max(1);
    let last = (page + PAGE_WINDOW).min(total_pages);
    Some(PaginationControls {
        page,
        total_pages,
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
        pages: (first..=last).collect(),
    })
}

pub fn controls_for<T: crate::domain::Entity>(
    collection: &PagedCollection<T>,
) -> Option<PaginationControls> {
    pagination_controls(collection.page(), collection.total_pages())
}

/// Everything a goal card shows
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCard {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub percent: u8,
    pub status: GoalStatus,
    pub steps_done: usize,
    pub steps_total: usize,
    pub like_count: usize,
    pub liked_by_viewer: bool,
    pub comment_count: u32,
}

impl GoalCard {
    pub fn from_goal(goal: &Goal, viewer_id: Option<&str>) -> Self {
        let steps_done = Step::completed_count(&goal.steps);
        let percent = if goal.steps.is_empty() {
            goal.progress.clamp(0.0, 100.0).round() as u8
        } else {
            completion_percentage(steps_done, goal.steps.len())
        };
        Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            category: goal.category.clone(),
            percent,
            status: GoalStatus::classify(f64::from(percent), goal.is_completed),
            steps_done,
            steps_total: goal.steps.len(),
            like_count: goal.likes.len(),
            liked_by_viewer: viewer_id.is_some_and(|viewer| goal.is_liked_by(viewer)),
            comment_count: goal.comment_count,
        }
    }

    pub fn steps_summary(&self) -> Option<String> {
        (self.steps_total > 0).then(|| format!("{}/{} steps", self.steps_done, self.steps_total))
    }
}

/// A titled group of cards
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: Option<&'static str>,
    pub cards: Vec<GoalCard>,
}

/// Lay cards out for a view mode. `Board` groups by status; the others keep one section.
pub fn sections(goals: &[Goal], mode: ViewMode, viewer_id: Option<&str>) -> Vec<Section> {
    let cards: Vec<GoalCard> = goals
        .iter()
        .map(|goal| GoalCard::from_goal(goal, viewer_id))
        .collect();
    match mode {
        ViewMode::List | ViewMode::Grid => vec![Section { title: None, cards }],
        ViewMode::Board => GoalStatus::ALL
            .iter()
            .map(|status| Section {
                title: Some(status.label()),
                cards: cards
                    .iter()
                    .filter(|card| card.status == *status)
                    .cloned()
                    .collect(),
            })
            .filter(|section| !section.cards.is_empty())
            .collect(),
    }
}

/// Profile statistics over the loaded goals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub near_complete: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub average_percent: u8,
}

pub fn goal_stats(goals: &[Goal]) -> GoalStats {
    let mut stats = GoalStats {
        total: goals.len(),
        ..GoalStats::default()
    };
    let mut percent_sum: u32 = 0;
    for goal in goals {
        let card = GoalCard::from_goal(goal, None);
        percent_sum += u32::from(card.percent);
        match card.status {
            GoalStatus::Completed => stats.completed += 1,
            GoalStatus::NearComplete => stats.near_complete += 1,
            GoalStatus::InProgress => stats.in_progress += 1,
            GoalStatus::NotStarted => stats.not_started += 1,
        }
    }
    if !goals.is_empty() {
        stats.average_percent = (percent_sum as f64 / goals.len() as f64).round() as u8;
    }
    stats
}

/// Placeholder engagement numbers for the demo card. Not real metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoEngagement {
    pub likes: u32,
    pub comments: u32,
}

/// Same id, same numbers, on every render.
pub fn demo_engagement(id: &str) -> DemoEngagement {
    let hash = blake3::hash(id.as_bytes());
    let bytes = hash.as_bytes();
    let likes = u32::from(u16::from_le_bytes([bytes[0], bytes[1]]));
    let comments = u32::from(bytes[2]);
    DemoEngagement {
        likes: 3 + likes % 120,
        comments: comments % 25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_handles_empty_and_rounding() {
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(5, 5), 100);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(GoalStatus::classify(0.0, false), GoalStatus::NotStarted);
        assert_eq!(GoalStatus::classify(10.0, false), GoalStatus::InProgress);
        assert_eq!(GoalStatus::classify(70.0, false), GoalStatus::InProgress);
        assert_eq!(GoalStatus::classify(71.0, false), GoalStatus::NearComplete);
        assert_eq!(GoalStatus::classify(5.0, true), GoalStatus::Completed);
    }

    #[test]
    fn first_of_three_pages() {
        let controls = pagination_controls(1, 3).unwrap();
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
        assert_eq!(controls.pages, vec![1, 2, 3]);
    }

    #[test]
    fn page_window_is_bounded() {
        let controls = pagination_controls(10, 20).unwrap();
        assert_eq!(controls.pages, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn card_uses_steps_when_present() {
        let mut goal = Goal::new("g1", "Learn Rust");
        goal.progress = 5.0;
        goal.steps = vec![
            Step { id: "a".into(), title: "Book".into(), is_completed: true },
            Step { id: "b".into(), title: "Project".into(), is_completed: true },
            Step { id: "c".into(), title: "Talk".into(), is_completed: true },
            Step { id: "d".into(), title: "Crate".into(), is_completed: false },
        ];
        goal.likes = vec!["me".into()];
        let card = GoalCard::from_goal(&goal, Some("me"));
        assert_eq!(card.percent, 75);
        assert_eq!(card.status, GoalStatus::NearComplete);
        assert!(card.liked_by_viewer);
        assert_eq!(card.steps_summary().as_deref(), Some("3/4 steps"));
    }

    #[test]
    fn board_groups_by_status_and_drops_empty_sections() {
        let mut done = Goal::new("a", "Done");
        done.is_completed = true;
        let fresh = Goal::new("b", "Fresh");
        let sections = sections(&[done, fresh], ViewMode::Board, None);
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec![Some("Not started"), Some("Completed")]);
        assert_eq!(super::sections(&[], ViewMode::List, None)[0].cards.len(), 0);
    }

    #[test]
    fn stats_average_progress() {
        let mut half = Goal::new("a", "Half");
        half.progress = 50.0;
        let mut done = Goal::new("b", "Done");
        done.progress = 100.0;
        done.is_completed = true;
        let stats = goal_stats(&[half, done]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.average_percent, 75);
    }

    #[test]
    fn demo_numbers_are_stable_per_id() {
        assert_eq!(demo_engagement("goal-42"), demo_engagement("goal-42"));
        let numbers = demo_engagement("goal-42");
        assert!((3..123).contains(&numbers.likes));
        assert!(numbers.comments < 25);
    }

    proptest! {
        #[test]
        fn single_page_renders_no_pager(page in 0u32..1000, total_pages in 0u32..=1) {
            prop_assert!(pagination_controls(page, total_pages).is_none());
        }

        #[test]
        fn pager_always_contains_current_page(page in 1u32..200, total_pages in 2u32..200) {
            let controls = pagination_controls(page, total_pages).unwrap();
            prop_assert!(controls.pages.contains(&controls.page));
            prop_assert_eq!(controls.next_enabled, controls.page < total_pages);
        }

        #[test]
        fn percentage_never_exceeds_100(done in 0usize..500, total in 0usize..500) {
            prop_assert!(completion_percentage(done, total) <= 100);
        }
    }
}
