//! Goal Sync
//!
//! Client-side state for the goal tracker: paginated collections fed by the goals API,
//! optimistic mutations with rollback, and the pure projections views render from.
//!
//! Layers:
//! - domain: wire entities and the normalized page model
//! - api: the backend trait, its HTTP client and the cookie session
//! - fetcher / pagination: page requests and the collection state machine
//! - optimistic: mutation intents, the pending ledger and like bursts
//! - sync: async drivers that tie the above to a state cell
//! - projection / preferences: view values and persisted UI settings

pub mod api;
pub mod cell;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod notify;
pub mod optimistic;
pub mod pagination;
pub mod preferences;
pub mod projection;
pub mod sync;

pub use api::{GoalApi, GoalScope, HttpGoalApi, PageQuery, Session};
pub use cell::StateCell;
pub use config::ApiConfig;
pub use domain::{
    CollectionPage, Comment, Entity, FieldKey, FieldValue, Goal, GroupGoal, ProgressEntry, Step,
};
pub use error::{SyncError, SyncResult};
pub use fetcher::{CollectionFetcher, GoalFeed, GroupGoalFeed, ProgressFeed};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use optimistic::{MutationIntent, MutationRejected, LIKE_BURST_DURATION};
pub use pagination::{Applied, LoadMode, LoadState, PageRequest, PagedCollection};
pub use preferences::{PreferenceStore, ViewMode};
pub use sync::{Loader, MutationOutcome, Mutator, PageAction, Scheduler};
