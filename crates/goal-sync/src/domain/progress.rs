//! Progress Entry Entity
//!
//! Blog-style updates posted against a goal, with likes and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::fields::{FieldKey, FieldValue, Mutable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "goal")]
    pub goal_id: Option<String>,
    #[serde(default, alias = "userId", alias = "author")]
    pub author_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProgressEntry {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            goal_id: None,
            author_id: None,
            content: content.into(),
            likes: Vec::new(),
            comment_count: 0,
            created_at: None,
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

impl Entity for ProgressEntry {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Mutable for ProgressEntry {
    fn read_field(&self, key: &FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::Likes => Some(FieldValue::Likes(self.likes.clone())),
            _ => None,
        }
    }

    fn write_field(&mut self, key: &FieldKey, value: FieldValue) -> bool {
        match (key, value) {
            (FieldKey::Likes, FieldValue::Likes(likes)) => {
                self.likes = likes;
                true
            }
            _ => false,
        }
    }
}

/// A comment on a progress entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "userId", alias = "author")]
    pub author_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
