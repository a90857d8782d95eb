//! Goal Entity
//!
//! A personal goal with optional steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::fields::{FieldKey, FieldValue, Mutable};

/// One step of a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Step {
    /// Number of completed steps in a list
    pub fn completed_count(steps: &[Step]) -> usize {
        steps.iter().filter(|step| step.is_completed).count()
    }
}

/// A personal goal (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "userId")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// 0-100
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: None,
            owner_id: None,
            steps: Vec::new(),
            progress: 0.0,
            is_completed: false,
            is_archived: false,
            likes: Vec::new(),
            comment_count: 0,
            created_at: None,
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

impl Entity for Goal {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Mutable for Goal {
    fn read_field(&self, key: &FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::Likes => Some(FieldValue::Likes(self.likes.clone())),
            FieldKey::Step(step_id) => self
                .steps
                .iter()
                .find(|step| &step.id == step_id)
                .map(|step| FieldValue::Flag(step.is_completed)),
            FieldKey::Archived => Some(FieldValue::Flag(self.is_archived)),
            FieldKey::CheckIn { .. } => None,
        }
    }

    fn write_field(&mut self, key: &FieldKey, value: FieldValue) -> bool {
        match (key, value) {
            (FieldKey::Likes, FieldValue::Likes(likes)) => {
                self.likes = likes;
                true
            }
            (FieldKey::Step(step_id), FieldValue::Flag(done)) => {
                let Some(step) = self.steps.iter_mut().find(|step| &step.id == step_id) else {
                    return false;
                };
                // `progress` stays the server's until the confirmed goal replaces it
                step.is_completed = done;
                true
            }
            (FieldKey::Archived, FieldValue::Flag(archived)) => {
                self.is_archived = archived;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mongo_style_ids_and_defaults() {
        let goal: Goal = serde_json::from_str(
            r#"{"_id":"g1","title":"Run","userId":"u1","steps":[{"_id":"s1","title":"5k"}]}"#,
        )
        .unwrap();
        assert_eq!(goal.id, "g1");
        assert_eq!(goal.owner_id.as_deref(), Some("u1"));
        assert_eq!(goal.steps.len(), 1);
        assert!(!goal.steps[0].is_completed);
        assert!(goal.likes.is_empty());
    }

    #[test]
    fn step_write_keeps_server_progress() {
        let mut goal = Goal::new("g1", "Read");
        goal.progress = 40.0;
        goal.steps = vec![
            Step { id: "a".into(), title: "Ch 1".into(), is_completed: true },
            Step { id: "b".into(), title: "Ch 2".into(), is_completed: false },
        ];
        assert!(goal.write_field(&FieldKey::Step("b".into()), FieldValue::Flag(true)));
        assert!(goal.steps[1].is_completed);
        assert_eq!(goal.progress, 40.0);
        assert!(!goal.write_field(&FieldKey::Step("zzz".into()), FieldValue::Flag(true)));
    }

    #[test]
    fn check_in_does_not_apply_to_personal_goals() {
        let goal = Goal::new("g1", "Read");
        let key = FieldKey::CheckIn {
            user_id: "u".into(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(goal.read_field(&key), None);
    }
}
