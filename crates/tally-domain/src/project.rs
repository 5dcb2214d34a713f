//! Project tree nodes and their project-level rate defaults.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Node of the project hierarchy owning contracts and members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
    #[serde(default)]
    pub user_rates: Vec<UserProjectRate>,
    /// Rate used for members without a project-level rate.
    #[serde(default)]
    pub default_rate: f64,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: None,
            member_ids: Vec::new(),
            user_rates: Vec::new(),
            default_rate: 0.0,
        }
    }

    /// Places the project beneath `parent_id` in the tree.
    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_default_rate(mut self, rate: f64) -> Self {
        self.default_rate = rate;
        self
    }

    /// Adds a member unless already present.
    pub fn add_member(&mut self, user_id: Uuid) {
        if !self.member_ids.contains(&user_id) {
            self.member_ids.push(user_id);
        }
    }

    pub fn user_rate(&self, user_id: Uuid) -> Option<f64> {
        self.user_rates
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.rate)
    }

    /// Returns the member's project rate, or the project default.
    pub fn user_rate_or_default(&self, user_id: Uuid) -> f64 {
        self.user_rate(user_id).unwrap_or(self.default_rate)
    }

    /// Stores a project-level rate, replacing any prior value for the user.
    pub fn set_user_rate(&mut self, user_id: Uuid, rate: f64) {
        match self
            .user_rates
            .iter_mut()
            .find(|entry| entry.user_id == user_id)
        {
            Some(existing) => existing.rate = rate,
            None => self.user_rates.push(UserProjectRate { user_id, rate }),
        }
    }
}

impl Identifiable for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Project-wide default rate for a single member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProjectRate {
    pub user_id: Uuid,
    pub rate: f64,
}
