use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A worker who logs time and can be assigned rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub display_name: String,
}

impl User {
    pub fn new(login: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            display_name: display_name.into(),
        }
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}
