//! UI Components
//!
//! Reusable Leptos components.

mod archive_confirm_button;
mod comment_thread;
mod error_fallback;
mod goal_card;
mod goal_list;
mod group_goal_list;
mod new_entry_form;
mod pager;
mod profile_stats;
mod progress_feed;
mod scope_tab_bar;
mod toast_stack;
mod view_mode_toggle;

pub use archive_confirm_button::ArchiveConfirmButton;
pub use comment_thread::CommentThread;
pub use error_fallback::{ErrorFallback, SignInPrompt};
pub use goal_card::GoalCardView;
pub use goal_list::GoalList;
pub use group_goal_list::GroupGoalList;
pub use new_entry_form::NewEntryForm;
pub use pager::Pager;
pub use profile_stats::ProfileStats;
pub use progress_feed::ProgressFeed;
pub use scope_tab_bar::ScopeTabBar;
pub use toast_stack::ToastStack;
pub use view_mode_toggle::ViewModeToggle;
