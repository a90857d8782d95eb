//! Group Goal Entity
//!
//! A goal shared by several members, with shared steps and daily check-ins.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::fields::{FieldKey, FieldValue, Mutable};
use super::goal::Step;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(alias = "_id", alias = "id")]
    pub user_id: String,
    #[serde(default, alias = "username", alias = "name")]
    pub display_name: Option<String>,
}

/// A member's check-in for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub user_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupGoal {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub check_ins: Vec<CheckIn>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl GroupGoal {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            members: Vec::new(),
            steps: Vec::new(),
            check_ins: Vec::new(),
            progress: 0.0,
            is_completed: false,
            is_archived: false,
        }
    }

    pub fn has_checked_in(&self, user_id: &str, date: NaiveDate) -> bool {
        self.check_ins
            .iter()
            .any(|check_in| check_in.user_id == user_id && check_in.date == date)
    }
}

impl Entity for GroupGoal {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Mutable for GroupGoal {
    fn read_field(&self, key: &FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::Step(step_id) => self
                .steps
                .iter()
                .find(|step| &step.id == step_id)
                .map(|step| FieldValue::Flag(step.is_completed)),
            FieldKey::CheckIn { user_id, date } => {
                Some(FieldValue::Flag(self.has_checked_in(user_id, *date)))
            }
            FieldKey::Archived => Some(FieldValue::Flag(self.is_archived)),
            FieldKey::Likes => None,
        }
    }

    fn write_field(&mut self, key: &FieldKey, value: FieldValue) -> bool {
        match (key, value) {
            (FieldKey::Step(step_id), FieldValue::Flag(done)) => {
                match self.steps.iter_mut().find(|step| &step.id == step_id) {
                    Some(step) => {
                        step.is_completed = done;
                        true
                    }
                    None => false,
                }
            }
            (FieldKey::CheckIn { user_id, date }, FieldValue::Flag(checked_in)) => {
                self.check_ins
                    .retain(|check_in| !(check_in.user_id == *user_id && check_in.date == *date));
                if checked_in {
                    self.check_ins.push(CheckIn {
                        user_id: user_id.clone(),
                        date: *date,
                    });
                }
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

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn check_in_flag_round_trips() {
        let mut goal = GroupGoal::new("gg1", "Walk daily");
        let key = FieldKey::CheckIn { user_id: "u1".into(), date: day() };

        assert_eq!(goal.read_field(&key), Some(FieldValue::Flag(false)));
        assert!(goal.write_field(&key, FieldValue::Flag(true)));
        assert!(goal.has_checked_in("u1", day()));
        assert!(goal.write_field(&key, FieldValue::Flag(true)));
        assert_eq!(goal.check_ins.len(), 1);
        assert!(goal.write_field(&key, FieldValue::Flag(false)));
        assert!(goal.check_ins.is_empty());
    }

    #[test]
    fn deserializes_members_and_check_ins() {
        let goal: GroupGoal = serde_json::from_str(
            r#"{"_id":"gg","title":"T","members":[{"_id":"u1","username":"ana"}],
                "checkIns":[{"userId":"u1","date":"2024-03-09"}]}"#,
        )
        .unwrap();
        assert_eq!(goal.members[0].user_id, "u1");
        assert_eq!(goal.members[0].display_name.as_deref(), Some("ana"));
        assert!(goal.has_checked_in("u1", day()));
    }
}
